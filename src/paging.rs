//! Fixed-size pagination over an item list.

mod pager;

pub use pager::*;
