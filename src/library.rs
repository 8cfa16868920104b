//! Library data model: tracks, track lists and the per-directory cache.
//!
//! Directories and their track lists come from the server; nothing here
//! touches the network.

mod cache;
mod display;
mod model;

pub use cache::DirectoryCache;
pub use display::{display_name, format_time};
pub use model::{Track, TrackList};
