use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::sink::{create_sink_at, probe_duration};
use super::types::MediaError;

/// The single streaming channel the playback engine drives.
pub trait MediaBackend {
    /// Open `path` and start it from the beginning. Returns its length
    /// (zero when unknown).
    fn load(&mut self, path: &Path) -> Result<Duration, MediaError>;
    /// Restart the loaded media at `offset`.
    fn play_from(&mut self, offset: Duration) -> Result<(), MediaError>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn set_volume(&mut self, volume: f32);
    /// Time played since the last `load`/`play_from`, excluding pauses.
    fn elapsed(&self) -> Duration;
    /// Whether the loaded media has played to its end.
    fn finished(&self) -> bool;
}

/// `MediaBackend` on the default output device.
pub struct RodioBackend {
    stream: OutputStream,
    sink: Option<Sink>,
    path: Option<PathBuf>,
    started_at: Option<Instant>,
    accumulated: Duration,
    volume: f32,
}

impl RodioBackend {
    pub fn open_default() -> Result<Self, MediaError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped, which corrupts the TUI.
        stream.log_on_drop(false);
        Ok(Self {
            stream,
            sink: None,
            path: None,
            started_at: None,
            accumulated: Duration::ZERO,
            volume: 1.0,
        })
    }

    fn start(&mut self, path: &Path, offset: Duration) -> Result<Option<Duration>, MediaError> {
        let (sink, total) = create_sink_at(&self.stream, path, offset)?;
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        sink.set_volume(self.volume);
        sink.play();
        self.sink = Some(sink);
        self.started_at = Some(Instant::now());
        self.accumulated = Duration::ZERO;
        Ok(total)
    }
}

impl MediaBackend for RodioBackend {
    fn load(&mut self, path: &Path) -> Result<Duration, MediaError> {
        let total = self.start(path, Duration::ZERO)?;
        self.path = Some(path.to_path_buf());
        Ok(total
            .or_else(|| probe_duration(path))
            .unwrap_or(Duration::ZERO))
    }

    fn play_from(&mut self, offset: Duration) -> Result<(), MediaError> {
        let path = self.path.clone().ok_or(MediaError::NothingLoaded)?;
        self.start(&path, offset)?;
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
    }

    fn resume(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
            if self.started_at.is_none() {
                self.started_at = Some(Instant::now());
            }
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(volume);
        }
    }

    fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    fn finished(&self) -> bool {
        self.sink.as_ref().is_some_and(Sink::empty)
    }
}
