//! Session cache of directory listings.
//!
//! Entries are written on every successful listing and never expire; the
//! cache lives as long as the process.

use std::collections::HashMap;

use super::model::TrackList;

#[derive(Debug, Default)]
pub struct DirectoryCache {
    entries: HashMap<String, TrackList>,
}

impl DirectoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, directory: &str) -> Option<TrackList> {
        self.entries.get(directory).cloned()
    }

    pub fn contains(&self, directory: &str) -> bool {
        self.entries.contains_key(directory)
    }

    /// Store `tracks` for `directory`, replacing any earlier listing.
    pub fn insert(&mut self, directory: impl Into<String>, tracks: TrackList) {
        self.entries.insert(directory.into(), tracks);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
