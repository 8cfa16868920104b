//! Background listing requests.
//!
//! Each request runs on its own thread and reports back through a channel
//! drained by the event loop. Requests are never merged or cancelled:
//! completions arrive in whatever order the server answers.

use std::sync::mpsc::Sender;
use std::thread;

use tracing::warn;

use crate::library::Track;

use super::client::LibraryClient;
use super::error::ApiError;

/// Completion of a background listing request.
#[derive(Debug)]
pub enum FetchEvent {
    Directories(Result<Vec<String>, ApiError>),
    Files {
        directory: String,
        result: Result<Vec<Track>, ApiError>,
    },
}

pub struct Fetcher {
    client: LibraryClient,
    tx: Sender<FetchEvent>,
}

impl Fetcher {
    pub fn new(client: LibraryClient, tx: Sender<FetchEvent>) -> Self {
        Self { client, tx }
    }

    pub fn directories(&self) {
        let client = self.client.clone();
        self.spawn(move || FetchEvent::Directories(client.directories()));
    }

    pub fn files(&self, directory: String) {
        let client = self.client.clone();
        self.spawn(move || {
            let result = client.files(&directory);
            FetchEvent::Files { directory, result }
        });
    }

    fn spawn<F>(&self, request: F)
    where
        F: FnOnce() -> FetchEvent + Send + 'static,
    {
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name("stetho-fetch".to_string())
            .spawn(move || {
                // The receiver is gone only while shutting down.
                let _ = tx.send(request());
            });
        if let Err(e) = spawned {
            warn!(error = %e, "could not start fetch thread");
        }
    }
}
