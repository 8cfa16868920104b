//! The single audio output.
//!
//! A dedicated thread owns the `rodio` stream and sink; the rest of the
//! program talks to it through `AudioCmd` and listens for `AudioEvent`.

mod download;
mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::{AudioCmd, AudioEvent};

#[cfg(test)]
mod tests;
