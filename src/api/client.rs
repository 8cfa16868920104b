use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::library::Track;

use super::endpoints::Endpoints;
use super::error::ApiError;
use super::payload::{parse_directories, parse_files};

/// Blocking client for the library server. Cheap to clone.
#[derive(Debug, Clone)]
pub struct LibraryClient {
    http: Client,
    endpoints: Endpoints,
}

impl LibraryClient {
    /// Build a client. `timeout` of `None` means requests may wait forever.
    pub fn new(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoints })
    }

    pub fn directories(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoints.directories();
        debug!(%url, "listing directories");
        let (status, body) = self.get_text(url)?;
        parse_directories(status, &body)
    }

    pub fn files(&self, directory: &str) -> Result<Vec<Track>, ApiError> {
        let url = self.endpoints.files(directory);
        debug!(%url, "listing files");
        let (status, body) = self.get_text(url)?;
        parse_files(status, &body)
    }

    /// Download a whole audio file. Sound samples are short clips.
    pub fn audio(&self, source: &str) -> Result<Arc<[u8]>, ApiError> {
        debug!(source, "fetching audio");
        let response = self.http.get(source).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: None,
            });
        }
        let bytes = response.bytes()?;
        Ok(Arc::from(bytes.as_ref()))
    }

    fn get_text(&self, url: reqwest::Url) -> Result<(u16, String), ApiError> {
        let response = self.http.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok((status, body))
    }
}
