//! Theme provider and icon resolution.
//!
//! Widgets never poll the theme: `App::load_theme` pushes the selected theme into
//! every widget explicitly.

mod icon;
mod palette;

pub use icon::*;
pub use palette::*;

#[cfg(test)]
mod tests;
