//! Playback controller: the single output's source, transport actions and
//! progress reporting.

use std::time::Duration;

use tracing::debug;

use crate::audio::AudioCmd;
use crate::library::{Track, TrackList, display_name, format_time};

use super::model::{App, Effect, Transport};

/// The playback state of the output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlayStatus {
    /// Nothing loaded, or the track ran to its end.
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Playback bookkeeping owned by `App`.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    /// Source currently assigned to the output.
    pub source: Option<String>,
    pub status: PlayStatus,
    pub repeat: bool,
    /// Index of the current track within `last_tracks`.
    pub current_index: Option<usize>,
    pub last_directory: Option<String>,
    pub last_file: Option<String>,
    /// Track list of the directory the current track was started from.
    pub last_tracks: TrackList,
    /// Seconds, as last reported by the output.
    pub position: Option<f64>,
    pub duration: Option<f64>,
}

impl PlaybackState {
    pub fn new(repeat: bool) -> Self {
        Self {
            source: None,
            status: PlayStatus::Stopped,
            repeat,
            current_index: None,
            last_directory: None,
            last_file: None,
            last_tracks: TrackList::from(Vec::new()),
            position: None,
            duration: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlayStatus::Playing
    }
}

/// Seek bar value for a position, or 0 while the duration is unknown.
pub(crate) fn progress_percent(position: f64, duration: Option<f64>) -> f64 {
    let percent = position / duration.unwrap_or(f64::NAN) * 100.0;
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn time_label(position: f64, duration: Option<f64>) -> String {
    let total = match duration {
        Some(d) if d.is_finite() => format_time(d),
        _ => "-:--".to_string(),
    };
    format!("{} / {}", format_time(position), total)
}

impl App {
    /// Point the output at `track` in `directory` and start it.
    pub fn play_audio(&mut self, directory: &str, track: &Track) -> Effect {
        let source = self.endpoints.audio(directory, &track.file_name).to_string();
        debug!(%source, "play");

        self.now_playing = Some(display_name(&track.file_name).to_string());
        self.playback.source = Some(source.clone());
        self.playback.status = PlayStatus::Playing;
        self.playback.position = None;
        self.playback.duration = None;
        self.transport = Transport::default();

        Effect::Audio(AudioCmd::Load {
            source,
            duration_hint: track.duration(),
        })
    }

    /// Pause when playing, play otherwise. Does nothing without a source.
    pub fn toggle_play_pause(&mut self) -> Option<Effect> {
        self.playback.source.as_ref()?;
        let cmd = match self.playback.status {
            PlayStatus::Playing => {
                self.playback.status = PlayStatus::Paused;
                AudioCmd::Pause
            }
            PlayStatus::Paused | PlayStatus::Stopped => {
                self.playback.status = PlayStatus::Playing;
                AudioCmd::Play
            }
        };
        Some(Effect::Audio(cmd))
    }

    /// Move to `slider` percent of the track. Needs a known duration.
    pub fn seek_audio(&mut self, slider: f64) -> Option<Effect> {
        self.playback.source.as_ref()?;
        let duration = self
            .playback
            .duration
            .filter(|d| d.is_finite() && *d > 0.0)?;

        let slider = if slider.is_finite() {
            slider.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let target = Duration::try_from_secs_f64(slider / 100.0 * duration).ok()?;
        self.transport.seek_percent = slider;
        Some(Effect::Audio(AudioCmd::Seek(target)))
    }

    /// Nudge the slider by `step` percent.
    pub fn seek_by(&mut self, step: f64) -> Option<Effect> {
        self.seek_audio(self.transport.seek_percent + step)
    }

    /// Apply a progress report from the output.
    ///
    /// Reports about any source but the current one are stale and ignored.
    pub fn on_progress(&mut self, source: &str, position: Duration, duration: Option<Duration>) {
        if !self.is_current_source(source) {
            return;
        }
        let position = position.as_secs_f64();
        let duration = duration.map(|d| d.as_secs_f64());

        self.playback.position = Some(position);
        self.playback.duration = duration;
        self.transport.seek_percent = progress_percent(position, duration);
        self.transport.time_label = time_label(position, duration);
    }

    /// The output ran out of `source` with repeat off.
    pub fn on_track_ended(&mut self, source: &str) {
        if self.is_current_source(source) {
            self.playback.status = PlayStatus::Stopped;
        }
    }

    fn is_current_source(&self, source: &str) -> bool {
        self.playback.source.as_deref() == Some(source)
    }

    /// Play the previous track of the last-played list, wrapping to the end.
    pub fn previous(&mut self) -> Option<Effect> {
        let len = self.playback.last_tracks.len();
        if len == 0 {
            return None;
        }
        let index = match self.playback.current_index {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.skip_to(index)
    }

    /// Play the next track of the last-played list, wrapping to the start.
    pub fn next(&mut self) -> Option<Effect> {
        let len = self.playback.last_tracks.len();
        if len == 0 {
            return None;
        }
        let index = match self.playback.current_index {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.skip_to(index)
    }

    /// Flip repeat and mirror it onto the output's looping.
    pub fn repeat_toggle(&mut self) -> Effect {
        self.playback.repeat = !self.playback.repeat;
        Effect::Audio(AudioCmd::SetRepeat(self.playback.repeat))
    }

    /// Opacity of the repeat control: full when enabled, dimmed otherwise.
    pub fn repeat_opacity(&self) -> f32 {
        if self.playback.repeat { 1.0 } else { 0.5 }
    }

    fn skip_to(&mut self, index: usize) -> Option<Effect> {
        let track = self.playback.last_tracks.get(index)?.clone();
        let directory = self.playback.last_directory.clone()?;

        self.playback.current_index = Some(index);
        self.playback.last_file = Some(track.file_name.clone());
        let effect = self.play_audio(&directory, &track);
        self.update_track_index(index);
        Some(effect)
    }
}
