use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ARTIST: &str = "Artist Unknown";
pub const DEFAULT_TITLE: &str = "Add the song title";

/// Process-unique playlist identifier. Never reused, never persisted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaylistId(pub(crate) u64);

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

fn default_artist() -> String {
    DEFAULT_ARTIST.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    pub path: PathBuf,
    #[serde(default = "default_artist")]
    pub artist: String,
}

impl Song {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            artist: default_artist(),
        }
    }

    pub fn by(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    /// The song's file name, used to find moved files during a rescan.
    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.path.file_name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub songs: Vec<Song>,
}
