//! Library and track catalogs: directory listing, file listing with the
//! session cache, and row selection.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use crate::api::ApiError;
use crate::library::{Track, TrackList, display_name, format_time};

use super::model::{App, Effect, FilesPanel};

/// Text of the single row shown for a directory without audio files.
pub const EMPTY_PLACEHOLDER: &str = "No audio files available in this directory.";

/// Failures of the two catalogs. Both degrade their own panel only.
#[derive(Debug, Error)]
pub enum CatalogFailure {
    #[error("error fetching directories: {0}")]
    DirectoryList(#[source] ApiError),
    #[error("error fetching audio files for {directory:?}: {source}")]
    FileList {
        directory: String,
        #[source]
        source: ApiError,
    },
}

/// One playable row of the file panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRow {
    /// Position in the track list; stable for the lifetime of the listing.
    pub id: usize,
    pub name: String,
    pub time: String,
}

impl TrackRow {
    fn new(id: usize, track: &Track) -> Self {
        Self {
            id,
            name: display_name(&track.file_name).to_string(),
            time: format_time(track.duration_secs),
        }
    }
}

impl App {
    /// Ask for a fresh directory listing. Directories are never cached.
    pub fn load_libraries(&self) -> Effect {
        Effect::FetchDirectories
    }

    /// Apply the result of a directory listing.
    pub fn directories_loaded(&mut self, result: Result<Vec<String>, ApiError>) {
        self.library_selected = None;
        self.library_cursor = 0;
        match result {
            Ok(directories) => {
                debug!(count = directories.len(), "directories loaded");
                self.directories = directories;
            }
            Err(e) => {
                let failure = CatalogFailure::DirectoryList(e);
                error!(error = %failure, "library catalog unavailable");
                self.directories.clear();
            }
        }
    }

    /// Mark directory `index` as selected and load its files.
    pub fn select_directory(&mut self, index: usize) -> Option<Effect> {
        let directory = self.directories.get(index)?.clone();
        self.library_selected = Some(index);
        self.library_cursor = index;
        self.current_directory = Some(directory.clone());
        self.load_audio_files(directory)
    }

    /// Show the files of `directory`, from the cache when possible.
    ///
    /// Returns the listing request to issue on a cache miss.
    pub fn load_audio_files(&mut self, directory: String) -> Option<Effect> {
        self.notice = None;
        if let Some(tracks) = self.cache.get(&directory) {
            debug!(%directory, "using cached files");
            self.populate_file_list(directory, tracks);
            return None;
        }

        self.files = FilesPanel::Loading(directory.clone());
        self.clear_track_selection();
        Some(Effect::FetchFiles(directory))
    }

    /// Apply the result of a file listing.
    ///
    /// Completions are applied in arrival order, so a late answer for a
    /// directory the user already left still replaces the panel.
    pub fn files_loaded(&mut self, directory: String, result: Result<Vec<Track>, ApiError>) {
        match result {
            Ok(files) => {
                let tracks: TrackList = Arc::from(files);
                self.cache.insert(directory.clone(), tracks.clone());
                self.populate_file_list(directory, tracks);
            }
            Err(source) => {
                // Network failures only degrade the panel; a bad payload also
                // gets a notice naming the server's error.
                if source.is_payload_error() {
                    self.notice = Some(match source.server_message() {
                        Some(m) => format!("Failed to load audio files: {m}"),
                        None => "Failed to load audio files.".to_string(),
                    });
                }

                let failure = CatalogFailure::FileList {
                    directory: directory.clone(),
                    source,
                };
                error!(error = %failure, "track catalog unavailable");

                self.clear_track_selection();
                self.track_cursor = 0;
                self.files = FilesPanel::Unavailable {
                    directory,
                    reason: failure.to_string(),
                };
            }
        }
    }

    /// Rows of the file panel, in navigation order.
    pub fn track_rows(&self) -> Vec<TrackRow> {
        match &self.files {
            FilesPanel::Loaded { tracks, .. } => tracks
                .iter()
                .enumerate()
                .map(|(i, t)| TrackRow::new(i, t))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Display name of row `id`, if the panel has it.
    pub fn row_name(&self, id: usize) -> Option<String> {
        match &self.files {
            FilesPanel::Loaded { tracks, .. } => tracks
                .get(id)
                .map(|t| display_name(&t.file_name).to_string()),
            _ => None,
        }
    }

    /// Play row `index` of the file panel and remember it as the
    /// last-played context.
    pub fn play_row(&mut self, index: usize) -> Option<Effect> {
        let FilesPanel::Loaded { directory, tracks } = &self.files else {
            return None;
        };
        let track = tracks.get(index)?.clone();
        let directory = directory.clone();
        let tracks = tracks.clone();

        self.clear_track_selection();
        self.track_selected = Some(index);
        self.track_cursor = index;

        self.playback.last_directory = Some(directory.clone());
        self.playback.last_file = Some(track.file_name.clone());
        self.playback.last_tracks = tracks;
        self.playback.current_index = Some(index);

        Some(self.play_audio(&directory, &track))
    }

    /// Highlight row `index` when the last-played directory is the one
    /// chosen in the library catalog.
    pub(super) fn update_track_index(&mut self, index: usize) {
        self.clear_track_selection();

        let same_directory = self.playback.last_directory.is_some()
            && self.playback.last_directory == self.current_directory;
        if same_directory && index < self.track_count() {
            self.track_selected = Some(index);
            self.track_cursor = index;
        }
    }

    fn populate_file_list(&mut self, directory: String, tracks: TrackList) {
        self.clear_track_selection();
        self.track_cursor = 0;

        if tracks.is_empty() {
            self.files = FilesPanel::Empty(directory);
            return;
        }

        let resume = self.playback.last_directory.as_deref() == Some(directory.as_str())
            && self.playback.last_file.is_some();
        self.files = FilesPanel::Loaded { directory, tracks };

        if resume {
            if let Some(i) = self.playback.current_index {
                self.update_track_index(i);
            }
        }
    }

    fn clear_track_selection(&mut self) {
        self.track_selected = None;
        self.long_names.selected_row = false;
    }
}
