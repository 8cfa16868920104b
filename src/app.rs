//! Application module: the state of the library browser and its
//! transitions.
//!
//! `App` never performs I/O. Actions return `Effect`s that the runtime
//! carries out, and completions are fed back through methods such as
//! `App::files_loaded` and `App::on_progress`.

mod catalog;
mod model;
mod overflow;
mod playback;

pub use catalog::{CatalogFailure, EMPTY_PLACEHOLDER, TrackRow};
pub use model::*;
pub use overflow::is_long_name;
pub use playback::{PlayStatus, PlaybackState};
