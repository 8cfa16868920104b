//! Client side of the sound library HTTP API.
//!
//! The server exposes three read-only endpoints under an optional mount
//! path: `/directories`, `/files/{directory}` and `/audio/{directory}/{file}`.

mod client;
mod endpoints;
mod error;
mod fetch;
mod payload;

pub use client::LibraryClient;
pub use endpoints::Endpoints;
pub use error::ApiError;
pub use fetch::{FetchEvent, Fetcher};

#[cfg(test)]
mod tests;
