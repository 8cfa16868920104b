use reqwest::Url;

use super::error::ApiError;

/// URL builder for the library endpoints.
///
/// The base is the server origin plus the optional mount path. Dynamic
/// values are appended as single path segments, so each one is
/// percent-encoded on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(server: &str, script_name: &str) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: server.to_string(),
            reason,
        };

        let mut base = Url::parse(server).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a hierarchical url".to_string()));
        }

        {
            let mut segments = base
                .path_segments_mut()
                .map_err(|_| invalid("not a hierarchical url".to_string()))?;
            segments
                .pop_if_empty()
                .extend(script_name.split('/').filter(|s| !s.is_empty()));
        }

        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn directories(&self) -> Url {
        self.join(&["directories"])
    }

    pub fn files(&self, directory: &str) -> Url {
        self.join(&["files", directory])
    }

    pub fn audio(&self, directory: &str, file: &str) -> Url {
        self.join(&["audio", directory, file])
    }

    fn join(&self, parts: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base urls, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(parts);
        }
        url
    }
}
