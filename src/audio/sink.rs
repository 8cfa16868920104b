//! Utilities for creating `rodio` sinks from downloaded audio.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, Sink, Source};

/// A downloaded source kept around so the track can be restarted.
#[derive(Clone)]
pub(super) struct Loaded {
    pub source: String,
    pub bytes: Arc<[u8]>,
    pub duration: Option<Duration>,
}

/// Decode `loaded` into a paused `Sink`.
///
/// Returns the decoder's own duration when it knows one.
pub(super) fn create_sink(
    handle: &OutputStream,
    loaded: &Loaded,
) -> Result<(Sink, Option<Duration>), DecoderError> {
    let decoder = Decoder::new(Cursor::new(loaded.bytes.clone()))?;
    let total = decoder.total_duration();

    let sink = Sink::connect_new(handle.mixer());
    sink.append(decoder);
    sink.pause();
    Ok((sink, total))
}

/// Clamp a seek target into the playable range.
pub(super) fn clamp_position(target: Duration, total: Option<Duration>) -> Duration {
    match total {
        Some(t) if target > t => t,
        _ => target,
    }
}

/// What the output does on an idle tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TickAction {
    /// Nothing is playing.
    Idle,
    /// Playing; send a progress report.
    Report,
    /// The track ran out with repeat on: play it again from the start.
    Restart,
    /// The track ran out with repeat off: stop and tell the app.
    Ended,
}

/// Decide the tick for an output with a sink (`has_sink`) that is `paused`
/// and has `drained` all of its audio.
pub(super) fn tick_action(has_sink: bool, paused: bool, drained: bool, repeat: bool) -> TickAction {
    match (has_sink && !paused, drained, repeat) {
        (false, _, _) => TickAction::Idle,
        (true, false, _) => TickAction::Report,
        (true, true, true) => TickAction::Restart,
        (true, true, false) => TickAction::Ended,
    }
}
