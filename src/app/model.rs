//! Application model types: `App`, `Effect` and the panel states.

use crate::api::Endpoints;
use crate::audio::AudioCmd;
use crate::library::{DirectoryCache, TrackList};

use super::playback::PlaybackState;

/// Work the runtime must perform on behalf of the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchDirectories,
    FetchFiles(String),
    Audio(AudioCmd),
}

/// Which list receives cursor keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Libraries,
    Tracks,
}

/// What the file panel currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilesPanel {
    /// No directory chosen yet.
    #[default]
    Idle,
    /// A listing request is in flight.
    Loading(String),
    Loaded {
        directory: String,
        tracks: TrackList,
    },
    /// The directory has no audio files.
    Empty(String),
    /// The listing failed; the panel has no content.
    Unavailable { directory: String, reason: String },
}

impl FilesPanel {
    /// True when the panel holds playable rows.
    pub fn has_files(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    pub fn directory(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading(d) | Self::Empty(d) => Some(d),
            Self::Loaded { directory, .. } | Self::Unavailable { directory, .. } => Some(directory),
        }
    }
}

/// Seek bar and time label, as last reported by the output.
#[derive(Debug, Clone, PartialEq)]
pub struct Transport {
    /// Slider value in `[0, 100]`.
    pub seek_percent: f64,
    pub time_label: String,
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            seek_percent: 0.0,
            time_label: "0:00 / -:--".to_string(),
        }
    }
}

/// Labels currently wider than their containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LongNames {
    pub now_playing: bool,
    pub selected_row: bool,
}

/// Rendered widths, in terminal cells, of the containers that hold names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelWidths {
    pub now_playing: u16,
    pub track_name: u16,
}

/// The main application model.
pub struct App {
    pub directories: Vec<String>,
    pub library_cursor: usize,
    /// Directory row marked as selected.
    pub library_selected: Option<usize>,
    /// Directory chosen in the library catalog.
    pub current_directory: Option<String>,

    pub files: FilesPanel,
    pub track_cursor: usize,
    /// Track row marked as selected.
    pub track_selected: Option<usize>,
    pub cache: DirectoryCache,

    pub playback: PlaybackState,
    pub transport: Transport,
    pub now_playing: Option<String>,
    pub long_names: LongNames,

    pub focus: Focus,
    /// Failure message shown to the user.
    pub notice: Option<String>,

    pub(super) endpoints: Endpoints,
}

impl App {
    /// Create a new `App`. `repeat` is the initial repeat state.
    pub fn new(endpoints: Endpoints, repeat: bool) -> Self {
        Self {
            directories: Vec::new(),
            library_cursor: 0,
            library_selected: None,
            current_directory: None,

            files: FilesPanel::Idle,
            track_cursor: 0,
            track_selected: None,
            cache: DirectoryCache::new(),

            playback: PlaybackState::new(repeat),
            transport: Transport::default(),
            now_playing: None,
            long_names: LongNames::default(),

            focus: Focus::Libraries,
            notice: None,

            endpoints,
        }
    }

    /// Switch keyboard focus between the two lists.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Libraries => Focus::Tracks,
            Focus::Tracks => Focus::Libraries,
        };
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Move the cursor of the focused list down, wrapping to the top.
    pub fn cursor_down(&mut self) {
        match self.focus {
            Focus::Libraries => {
                self.library_cursor = wrap_next(self.library_cursor, self.directories.len());
            }
            Focus::Tracks => {
                self.track_cursor = wrap_next(self.track_cursor, self.track_count());
            }
        }
    }

    /// Move the cursor of the focused list up, wrapping to the bottom.
    pub fn cursor_up(&mut self) {
        match self.focus {
            Focus::Libraries => {
                self.library_cursor = wrap_prev(self.library_cursor, self.directories.len());
            }
            Focus::Tracks => {
                self.track_cursor = wrap_prev(self.track_cursor, self.track_count());
            }
        }
    }

    /// Act on the row under the cursor: pick a directory or play a track.
    pub fn activate(&mut self) -> Option<Effect> {
        match self.focus {
            Focus::Libraries => self.select_directory(self.library_cursor),
            Focus::Tracks => self.play_row(self.track_cursor),
        }
    }

    /// Re-measure names against their containers.
    pub fn refresh_long_names(&mut self, widths: LabelWidths) {
        self.long_names.now_playing = self
            .now_playing
            .as_deref()
            .is_some_and(|t| super::overflow::is_long_name(t, widths.now_playing));
        self.long_names.selected_row = self
            .track_selected
            .and_then(|i| self.row_name(i))
            .is_some_and(|n| super::overflow::is_long_name(&n, widths.track_name));
    }

    pub(super) fn track_count(&self) -> usize {
        match &self.files {
            FilesPanel::Loaded { tracks, .. } => tracks.len(),
            _ => 0,
        }
    }
}

fn wrap_next(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

fn wrap_prev(current: usize, len: usize) -> usize {
    match len {
        0 => 0,
        _ if current == 0 || current >= len => len - 1,
        _ => current - 1,
    }
}
