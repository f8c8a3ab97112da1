use std::path::Path;
use std::time::Duration;

use crate::library::Library;
use crate::playlist::{PlaylistId, PlaylistStore, Song};

use super::backend::MediaBackend;
use super::types::{MediaError, TransportState};

const MIN_UNMUTE_VOLUME: f32 = 0.05;

/// Playback cursor and transport over one `MediaBackend`.
///
/// Operations that can touch playlists take the store by `&mut`. When a song
/// cannot be opened the engine rescans the library and retries once; if that
/// fails too, the store is reconciled against the filesystem and playback moves
/// to the sample playlist. When no playlist survives, the engine goes inert and
/// every later call is a no-op.
pub struct PlaybackEngine<B> {
    backend: B,
    library: Library,
    playlist: PlaylistId,
    track: usize,
    transport: TransportState,
    start_offset: Duration,
    duration: Duration,
    volume: f32,
    muted: bool,
    inert: bool,
    recovering: bool,
}

impl<B: MediaBackend> PlaybackEngine<B> {
    pub fn new(backend: B, library: Library, store: &PlaylistStore, volume: f32) -> Self {
        let mut engine = Self {
            backend,
            library,
            playlist: store.sample_id(),
            track: 0,
            transport: TransportState::Stopped,
            start_offset: Duration::ZERO,
            duration: Duration::ZERO,
            volume: 0.0,
            muted: false,
            inert: false,
            recovering: false,
        };
        engine.set_volume(volume);
        engine
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn playlist_id(&self) -> PlaylistId {
        self.playlist
    }

    pub fn track_index(&self) -> usize {
        self.track
    }

    pub fn transport(&self) -> TransportState {
        self.transport
    }

    pub fn is_inert(&self) -> bool {
        self.inert
    }

    /// Slider level; 0 while muted.
    pub fn volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Position within the current song.
    pub fn position(&self) -> Duration {
        self.start_offset + self.backend.elapsed()
    }

    /// Fraction of the current song played; 0 when its length is unknown.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        self.position().as_secs_f32() / self.duration.as_secs_f32()
    }

    /// The current song ran out while playing.
    pub fn song_finished(&self) -> bool {
        self.transport == TransportState::Playing && self.backend.finished()
    }

    pub fn now_playing<'s>(&self, store: &'s PlaylistStore) -> Option<&'s Song> {
        store.get(self.playlist)?.songs.get(self.track)
    }

    /// Switch to playlist `id` and start its first song.
    pub fn change_playlist(&mut self, store: &mut PlaylistStore, id: PlaylistId) {
        if self.inert {
            return;
        }
        self.track = 0;
        if !store.contains(id) {
            tracing::warn!("playlist {id} does not exist, reloading playlists");
            self.recover(store);
            return;
        }
        self.playlist = id;
        self.play_track(store, 0, false);
    }

    /// Play song `index` of the active playlist; out of range plays the first song.
    pub fn play(&mut self, store: &mut PlaylistStore, index: usize) {
        if self.inert {
            return;
        }
        self.play_track(store, index, false);
    }

    pub fn toggle_pause(&mut self, store: &mut PlaylistStore) {
        if self.inert {
            return;
        }
        match self.transport {
            TransportState::Playing => {
                self.backend.pause();
                self.transport = TransportState::Paused;
            }
            TransportState::Paused => {
                self.backend.resume();
                self.transport = TransportState::Playing;
            }
            TransportState::Stopped => self.play(store, self.track),
        }
    }

    pub fn stop(&mut self) {
        if self.inert {
            return;
        }
        self.backend.pause();
        self.transport = TransportState::Stopped;
    }

    pub fn next(&mut self, store: &mut PlaylistStore) {
        self.play(store, self.track + 1);
    }

    /// From the first song this replays it.
    pub fn prev(&mut self, store: &mut PlaylistStore) {
        // usize::MAX is out of range and resolves to the first song.
        self.play(store, self.track.checked_sub(1).unwrap_or(usize::MAX));
    }

    pub fn skip(&mut self, delta: Duration) {
        self.scrub(|at| at + delta);
    }

    pub fn rewind(&mut self, delta: Duration) {
        self.scrub(|at| at.saturating_sub(delta));
    }

    /// Jump to `fraction` of the song and keep playing from there.
    pub fn seek_to_fraction(&mut self, fraction: f32) {
        if self.inert {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        if self.reseek(self.duration.mul_f32(fraction)) {
            self.transport = TransportState::Playing;
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        if volume <= 0.0 {
            self.volume = 0.0;
            self.muted = true;
        } else {
            self.volume = volume.min(1.0);
            self.muted = false;
        }
        self.apply_volume();
    }

    pub fn change_volume(&mut self, delta: f32) {
        self.set_volume(self.volume() + delta);
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if !self.muted {
            self.volume = self.volume.max(MIN_UNMUTE_VOLUME);
        }
        self.apply_volume();
    }

    fn apply_volume(&mut self) {
        let v = self.volume();
        self.backend.set_volume(v);
    }

    fn scrub(&mut self, target: impl FnOnce(Duration) -> Duration) {
        if self.inert || self.transport == TransportState::Stopped {
            return;
        }
        if self.reseek(target(self.position())) {
            self.transport = TransportState::Playing;
        }
    }

    /// Restart the media at `offset`; on failure the previous offset and
    /// transport are kept.
    fn reseek(&mut self, offset: Duration) -> bool {
        match self.backend.play_from(offset) {
            Ok(()) => {
                self.start_offset = offset;
                true
            }
            Err(e) => {
                tracing::warn!("seek to {offset:?} failed: {e}");
                false
            }
        }
    }

    fn play_track(&mut self, store: &mut PlaylistStore, index: usize, is_retry: bool) {
        let Some(playlist) = store.get(self.playlist) else {
            tracing::warn!("active playlist {} vanished", self.playlist);
            self.stop();
            self.recover(store);
            return;
        };
        let index = if index < playlist.songs.len() || is_retry {
            index
        } else {
            0
        };
        let song = playlist.songs.get(index).cloned();

        let loaded = match &song {
            Some(song) => self.backend.load(&song.path),
            None => Err(MediaError::NoSong(self.playlist)),
        };

        match loaded {
            Ok(duration) => {
                self.track = index;
                self.transport = TransportState::Playing;
                self.start_offset = Duration::ZERO;
                self.duration = duration;
                self.apply_volume();
                if let Some(song) = song {
                    tracing::info!("playing {:?} by {}", song.name, song.artist);
                }
            }
            Err(e) if !is_retry => {
                tracing::warn!("{e}; rescanning {}", self.library.root().display());
                if let Some(song) = &song {
                    self.repair_path(store, index, &song.path);
                }
                self.play_track(store, index, true);
            }
            Err(e) => {
                tracing::warn!("{e}; checking playlists");
                self.stop();
                self.recover(store);
            }
        }
    }

    fn repair_path(&mut self, store: &mut PlaylistStore, index: usize, missing: &Path) {
        let Some(found) = self.library.locate(missing) else {
            return;
        };
        match store.replace_song_path(self.playlist, index, found.clone()) {
            Ok(()) => tracing::info!("found {} at {}", missing.display(), found.display()),
            Err(e) => tracing::debug!("could not repair song path: {e}"),
        }
    }

    /// Drop missing songs and empty playlists, then restart on the sample.
    fn recover(&mut self, store: &mut PlaylistStore) {
        if self.recovering {
            tracing::warn!("playback failed again while recovering, stopping");
            self.stop();
            return;
        }
        self.recovering = true;
        match store.reconcile(|p: &Path| p.exists()) {
            Ok(report) => {
                tracing::warn!(
                    "removed {} missing songs and {} empty playlists",
                    report.dropped_songs,
                    report.dropped_playlists.len()
                );
                let sample = store.sample_id();
                self.change_playlist(store, sample);
            }
            Err(e) => {
                tracing::error!("{e}; playback disabled");
                self.stop();
                self.inert = true;
            }
        }
        self.recovering = false;
    }
}
