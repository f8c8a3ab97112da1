//! Application module: the widget tree and its per-frame dispatch.
//!
//! `App` owns the playlist store, the playback engine and every widget. The
//! runtime feeds it frames and key presses; `ui` draws it.

mod keys;
mod model;
mod sidebar;
mod tray;
mod view;

pub use model::*;
pub use sidebar::*;
pub use tray::*;
pub use view::*;
