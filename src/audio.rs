//! Audio playback.
//!
//! `MediaBackend` abstracts the single output channel (`RodioBackend` in the
//! application, `FakeBackend` in tests). `PlaybackEngine` owns the backend and
//! keeps the playback cursor: active playlist, track, transport and volume.

mod backend;
mod engine;
mod sink;
mod types;

pub use backend::*;
pub use engine::*;
pub use types::*;

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
mod tests;
