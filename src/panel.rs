//! Slide-in side panels.
//!
//! A panel is hidden off-screen at `direction * width` and animates its offset
//! toward 0 when opened. Panels that shift content report how far the rest of
//! the screen should move on each tick.

mod slide;

pub use slide::*;
