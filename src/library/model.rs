use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

/// One playable recording as listed by the server.
///
/// The wire shape is a `[fileName, durationSeconds]` pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(String, f64)")]
pub struct Track {
    pub file_name: String,
    pub duration_secs: f64,
}

impl From<(String, f64)> for Track {
    fn from((file_name, duration_secs): (String, f64)) -> Self {
        Self {
            file_name,
            duration_secs,
        }
    }
}

impl Track {
    pub fn new(file_name: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            file_name: file_name.into(),
            duration_secs,
        }
    }

    /// Server-supplied duration, when it is a usable number.
    pub fn duration(&self) -> Option<Duration> {
        if self.duration_secs > 0.0 {
            Duration::try_from_secs_f64(self.duration_secs).ok()
        } else {
            None
        }
    }
}

/// Ordered tracks of one directory. Display order is navigation order.
pub type TrackList = Arc<[Track]>;
