//! Songs, playlists and the store that owns them.
//!
//! The store is passed explicitly to whoever reads or mutates it; there is no
//! global instance. Playlists are persisted as a JSON array by `PlaylistFile`.

mod model;
mod persist;
mod store;

pub use model::*;
pub use persist::*;
pub use store::*;

#[cfg(test)]
mod tests;
