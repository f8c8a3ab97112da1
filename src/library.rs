//! The on-disk music library.
//!
//! `Library` scans its root directory for audio files and turns them into
//! `Song` values, either to seed the first playlist or to locate files that
//! moved since a playlist was saved.

mod display;
mod scan;

pub use display::*;
pub use scan::*;
