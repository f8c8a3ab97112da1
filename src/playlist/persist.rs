use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::Song;
use super::store::PlaylistStore;

/// On-disk shape of one playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub name: String,
    #[serde(default)]
    pub songs: Vec<Song>,
}

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed playlist file '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait PlaylistPersistence {
    fn load(&self) -> Result<Vec<PlaylistRecord>, PersistError>;
    fn save(&self, store: &PlaylistStore) -> Result<(), PersistError>;
}

/// JSON array of playlist records at a fixed path.
#[derive(Debug, Clone)]
pub struct PlaylistFile {
    path: PathBuf,
}

impl PlaylistFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlaylistPersistence for PlaylistFile {
    /// A missing file is an empty playlist list, not an error.
    fn load(&self) -> Result<Vec<PlaylistRecord>, PersistError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(PersistError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| PersistError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, store: &PlaylistStore) -> Result<(), PersistError> {
        let write_err = |source| PersistError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(&store.records()).map_err(|source| {
            PersistError::Json {
                path: self.path.clone(),
                source,
            }
        })?;

        // Write a sibling file, then rename it over the target.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        tracing::debug!("saved {} playlists to {}", store.len(), self.path.display());
        Ok(())
    }
}
