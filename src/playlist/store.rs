use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Playlist, PlaylistId, Song};
use super::persist::PlaylistRecord;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("no playlists to load")]
    Empty,
    #[error("playlist {0} does not exist")]
    NotFound(PlaylistId),
    #[error("playlist {id} has no song at index {index}")]
    NoSuchSong { id: PlaylistId, index: usize },
    #[error("cannot delete the only remaining playlist")]
    LastPlaylist,
    #[error("no playable songs remain in any playlist")]
    NoSurvivors,
}

/// What a reconciliation pass removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub dropped_songs: usize,
    pub dropped_playlists: Vec<PlaylistId>,
    pub sample_changed: bool,
}

/// Owner of every playlist.
///
/// Always holds at least one playlist, and `sample` always names a stored one.
/// Mutations build a fresh map and swap it in, so a failed operation leaves the
/// previous contents intact.
#[derive(Debug, Clone)]
pub struct PlaylistStore {
    playlists: BTreeMap<PlaylistId, Playlist>,
    sample: PlaylistId,
    next_id: u64,
    revision: u64,
}

impl PlaylistStore {
    pub fn from_records(records: Vec<PlaylistRecord>) -> Result<Self, StoreError> {
        let mut playlists = BTreeMap::new();
        let mut next_id = 1;
        for record in records {
            let id = PlaylistId(next_id);
            next_id += 1;
            playlists.insert(
                id,
                Playlist {
                    id,
                    name: record.name,
                    songs: record.songs,
                },
            );
        }
        let sample = *playlists.keys().next().ok_or(StoreError::Empty)?;
        Ok(Self {
            playlists,
            sample,
            next_id,
            revision: 0,
        })
    }

    pub fn get(&self, id: PlaylistId) -> Option<&Playlist> {
        self.playlists.get(&id)
    }

    pub fn contains(&self, id: PlaylistId) -> bool {
        self.playlists.contains_key(&id)
    }

    pub fn sample_id(&self) -> PlaylistId {
        self.sample
    }

    pub fn sample(&self) -> &Playlist {
        // `sample` is kept pointing at a stored playlist by every mutation.
        &self.playlists[&self.sample]
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Playlists in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    pub fn ids(&self) -> Vec<PlaylistId> {
        self.playlists.keys().copied().collect()
    }

    /// Bumped by every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn insert(&mut self, name: impl Into<String>, songs: Vec<Song>) -> PlaylistId {
        let id = PlaylistId(self.next_id);
        self.next_id += 1;
        let mut next = self.playlists.clone();
        next.insert(
            id,
            Playlist {
                id,
                name: name.into(),
                songs,
            },
        );
        self.commit(next, self.sample);
        id
    }

    /// Replace the name and songs of an existing playlist.
    pub fn update(
        &mut self,
        id: PlaylistId,
        name: impl Into<String>,
        songs: Vec<Song>,
    ) -> Result<(), StoreError> {
        let mut next = self.playlists.clone();
        let playlist = next.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        playlist.name = name.into();
        playlist.songs = songs;
        self.commit(next, self.sample);
        Ok(())
    }

    pub fn remove(&mut self, id: PlaylistId) -> Result<Playlist, StoreError> {
        if !self.contains(id) {
            return Err(StoreError::NotFound(id));
        }
        if self.len() == 1 {
            return Err(StoreError::LastPlaylist);
        }
        let mut next = self.playlists.clone();
        let removed = next.remove(&id).ok_or(StoreError::NotFound(id))?;
        let sample = Self::pick_sample(&next, self.sample).ok_or(StoreError::LastPlaylist)?;
        self.commit(next, sample);
        Ok(removed)
    }

    /// Point one song at a new file (after it was found elsewhere on disk).
    pub fn replace_song_path(
        &mut self,
        id: PlaylistId,
        index: usize,
        path: PathBuf,
    ) -> Result<(), StoreError> {
        let mut next = self.playlists.clone();
        let song = next
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?
            .songs
            .get_mut(index)
            .ok_or(StoreError::NoSuchSong { id, index })?;
        song.path = path;
        self.commit(next, self.sample);
        Ok(())
    }

    /// Drop songs whose file no longer exists and playlists left empty.
    ///
    /// Surviving playlists keep their ids. When nothing survives the store is
    /// left untouched and `NoSurvivors` is returned.
    pub fn reconcile(
        &mut self,
        exists: impl Fn(&Path) -> bool,
    ) -> Result<ReconcileReport, StoreError> {
        let mut report = ReconcileReport::default();
        let mut next = BTreeMap::new();
        for (id, playlist) in &self.playlists {
            let before = playlist.songs.len();
            let songs: Vec<Song> = playlist
                .songs
                .iter()
                .filter(|s| exists(&s.path))
                .cloned()
                .collect();
            report.dropped_songs += before - songs.len();
            if songs.is_empty() {
                report.dropped_playlists.push(*id);
                continue;
            }
            next.insert(
                *id,
                Playlist {
                    songs,
                    ..playlist.clone()
                },
            );
        }

        let sample = Self::pick_sample(&next, self.sample).ok_or(StoreError::NoSurvivors)?;
        report.sample_changed = sample != self.sample;
        self.commit(next, sample);
        Ok(report)
    }

    /// Records in creation order, for persistence.
    pub fn records(&self) -> Vec<PlaylistRecord> {
        self.playlists
            .values()
            .map(|p| PlaylistRecord {
                name: p.name.clone(),
                songs: p.songs.clone(),
            })
            .collect()
    }

    fn pick_sample(map: &BTreeMap<PlaylistId, Playlist>, current: PlaylistId) -> Option<PlaylistId> {
        if map.contains_key(&current) {
            Some(current)
        } else {
            map.keys().next().copied()
        }
    }

    fn commit(&mut self, playlists: BTreeMap<PlaylistId, Playlist>, sample: PlaylistId) {
        self.playlists = playlists;
        self.sample = sample;
        self.revision += 1;
    }
}
