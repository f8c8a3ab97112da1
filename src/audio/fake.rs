//! In-memory `MediaBackend` for tests.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::backend::MediaBackend;
use super::types::MediaError;

#[derive(Debug, Default)]
pub struct FakeBackend {
    /// Every successfully loaded path, in order.
    pub loads: Vec<PathBuf>,
    /// Every `play_from` offset, in order.
    pub seeks: Vec<Duration>,
    pub paused: bool,
    pub volume: f32,
    /// Length reported for every loaded file.
    pub length: Duration,
    /// Set by tests to simulate the media running out.
    pub finished: bool,
    elapsed: Duration,
}

impl FakeBackend {
    pub fn new(length: Duration) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }
}

impl MediaBackend for FakeBackend {
    fn load(&mut self, path: &Path) -> Result<Duration, MediaError> {
        if !path.exists() {
            return Err(MediaError::Open {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        self.loads.push(path.to_path_buf());
        self.paused = false;
        self.finished = false;
        self.elapsed = Duration::ZERO;
        Ok(self.length)
    }

    fn play_from(&mut self, offset: Duration) -> Result<(), MediaError> {
        if self.loads.is_empty() {
            return Err(MediaError::NothingLoaded);
        }
        self.seeks.push(offset);
        self.paused = false;
        self.finished = false;
        self.elapsed = Duration::ZERO;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn finished(&self) -> bool {
        self.finished
    }
}
