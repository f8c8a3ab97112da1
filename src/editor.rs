//! The playlist editor dialog.
//!
//! Edits happen on a draft list of songs shown as one card per song plus a
//! trailing card for adding a new one. Only `submit` and `delete_playlist`
//! touch the playlist store.

mod card;
mod input;
mod picker;
mod workflow;

pub use card::*;
pub use input::*;
pub use picker::*;
pub use workflow::*;

#[cfg(test)]
mod tests;
