//! Settings for the server connection, playback defaults, key steps, the
//! UI and logging.
//!
//! Values come from an optional TOML file, then `STETHO__*` environment
//! variables, then struct defaults. Command line flags are applied on top
//! by `main`.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;

#[cfg(test)]
mod tests;
