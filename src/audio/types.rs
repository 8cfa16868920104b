//! Audio-related small types.
//!
//! Commands flow from the app to the audio thread; events flow back.

use std::sync::Arc;
use std::time::Duration;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCmd {
    /// Replace the current source with `source` and start playing it.
    ///
    /// `duration_hint` is the catalog's duration, used when the decoder
    /// cannot tell the length on its own.
    Load {
        source: String,
        duration_hint: Option<Duration>,
    },
    /// Resume, or restart a track that already ran to its end.
    Play,
    /// Pause at the current position.
    Pause,
    /// Jump to an absolute position in the current source.
    Seek(Duration),
    /// Restart the current track when it ends instead of stopping.
    SetRepeat(bool),
    /// Stop playback and end the audio thread.
    Quit,
}

/// Reports from the audio thread. Each one names the source it is about,
/// so reports from a replaced track can be told apart.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioEvent {
    /// Periodic position report for the current source.
    Progress {
        source: String,
        position: Duration,
        duration: Option<Duration>,
    },
    /// The current track ran out and repeat is off.
    Ended { source: String },
}

/// Messages handled by the audio thread.
pub(super) enum Inbox {
    Cmd(AudioCmd),
    /// A download started by `AudioCmd::Load` finished.
    Downloaded {
        generation: u64,
        result: Result<Arc<[u8]>, ApiError>,
    },
}
