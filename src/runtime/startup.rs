use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use crate::config::Settings;
use crate::library::Library;
use crate::playlist::{PlaylistFile, PlaylistPersistence, PlaylistRecord, PlaylistStore};

/// Name of the playlist seeded from the music root on first run.
const LIBRARY_PLAYLIST: &str = "Library";

pub fn playlist_file(settings: &Settings) -> PlaylistFile {
    PlaylistFile::new(
        settings
            .playlists_path()
            .unwrap_or_else(|| PathBuf::from("playlists.json")),
    )
}

/// Load saved playlists and drop songs whose files are gone.
///
/// When nothing usable is saved, a single playlist of everything under the
/// music root is used instead. It is only written out when there was no saved
/// playlist at all; an unreadable file or one whose songs are all missing (an
/// unmounted drive, say) is left untouched. Fails only if the scan finds no audio.
pub fn load_store(file: &PlaylistFile, library: &Library) -> anyhow::Result<PlaylistStore> {
    let (records, first_run) = match file.load() {
        Ok(records) => {
            let empty = records.is_empty();
            (records, empty)
        }
        Err(e) => {
            tracing::error!("{e}; leaving it as is and starting from the music library");
            (Vec::new(), false)
        }
    };

    if let Ok(mut store) = PlaylistStore::from_records(records) {
        match store.reconcile(Path::exists) {
            Ok(report) => {
                if report.dropped_songs > 0 || !report.dropped_playlists.is_empty() {
                    tracing::warn!(
                        songs = report.dropped_songs,
                        playlists = report.dropped_playlists.len(),
                        "skipping entries whose files are missing"
                    );
                }
                return Ok(store);
            }
            Err(e) => tracing::warn!("{e}; starting from the music library"),
        }
    }

    let songs = library.rescan();
    if songs.is_empty() {
        bail!("no audio files found under {}", library.root().display());
    }
    tracing::info!(
        "created playlist {LIBRARY_PLAYLIST:?} with {} songs",
        songs.len()
    );
    let store = PlaylistStore::from_records(vec![PlaylistRecord {
        name: LIBRARY_PLAYLIST.to_string(),
        songs,
    }])
    .context("failed to build the library playlist")?;
    if first_run {
        if let Err(e) = file.save(&store) {
            tracing::error!("failed to save playlists: {e}");
        }
    }
    Ok(store)
}
