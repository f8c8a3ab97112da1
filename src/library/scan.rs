use std::path::{Path, PathBuf};

use lofty::file::TaggedFileExt;
use lofty::tag::Accessor;
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::playlist::{DEFAULT_ARTIST, Song};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Read title and artist tags, falling back to the file stem and the default artist.
fn song_from_path(path: &Path) -> Song {
    let mut name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist = DEFAULT_ARTIST.to_string();

    if let Ok(tagged) = lofty::read_from_path(path) {
        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.title().filter(|v| !v.trim().is_empty()) {
                name = v.trim().to_string();
            }
            if let Some(v) = tag.artist().filter(|v| !v.trim().is_empty()) {
                artist = v.trim().to_string();
            }
        }
    }

    Song {
        name,
        path: path.to_path_buf(),
        artist,
    }
}

/// Walk `dir` and build a song for every audio file, sorted by name.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Song> {
    let mut songs: Vec<Song> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file() && is_audio_file(path, settings) {
            songs.push(song_from_path(path));
        }
    }

    songs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    songs
}

/// The music directory and how to scan it.
#[derive(Debug, Clone)]
pub struct Library {
    settings: LibrarySettings,
}

impl Library {
    pub fn new(settings: LibrarySettings) -> Self {
        Self { settings }
    }

    pub fn root(&self) -> &Path {
        &self.settings.root
    }

    pub fn rescan(&self) -> Vec<Song> {
        let songs = scan(&self.settings.root, &self.settings);
        tracing::debug!(
            "scanned {} songs under {}",
            songs.len(),
            self.settings.root.display()
        );
        songs
    }

    /// Find a file with the same name as `missing` anywhere under the root.
    pub fn locate(&self, missing: &Path) -> Option<PathBuf> {
        let wanted = missing.file_name()?;
        self.rescan()
            .into_iter()
            .map(|s| s.path)
            .find(|p| p.file_name() == Some(wanted) && p != missing)
    }
}
