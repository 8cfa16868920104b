//! Audio downloads, kept off the audio thread.
//!
//! Every `Load` starts a new generation. Only the newest download may
//! reach the output; anything older is dropped when it arrives.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::api::LibraryClient;

use super::types::Inbox;

struct Pending {
    generation: u64,
    source: String,
    duration_hint: Option<Duration>,
}

/// Tracks the one download the output is waiting for.
#[derive(Default)]
pub(super) struct DownloadSlot {
    latest: u64,
    pending: Option<Pending>,
}

impl DownloadSlot {
    /// Wait for `source` from now on. Returns its generation.
    pub fn begin(&mut self, source: String, duration_hint: Option<Duration>) -> u64 {
        self.latest += 1;
        self.pending = Some(Pending {
            generation: self.latest,
            source,
            duration_hint,
        });
        self.latest
    }

    /// Claim the waiting download if `generation` is the one it expects.
    pub fn finish(&mut self, generation: u64) -> Option<(String, Option<Duration>)> {
        if self.pending.as_ref()?.generation != generation {
            return None;
        }
        self.pending
            .take()
            .map(|p| (p.source, p.duration_hint))
    }
}

/// Fetch `source` on its own thread and post the bytes back to the
/// audio thread.
pub(super) fn spawn_download(
    client: LibraryClient,
    source: String,
    generation: u64,
    inbox: Sender<Inbox>,
) {
    let spawned = thread::Builder::new()
        .name("stetho-audio-fetch".to_string())
        .spawn(move || {
            let result = client.audio(&source);
            // The audio thread is gone only while shutting down.
            let _ = inbox.send(Inbox::Downloaded { generation, result });
        });
    if let Err(e) = spawned {
        warn!(error = %e, "could not start download thread");
    }
}
