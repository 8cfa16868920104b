use thiserror::Error;

/// Failure talking to the library server.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid server url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {status}{}", fmt_server_message(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("unexpected response shape{}", fmt_server_message(.message))]
    UnexpectedShape { message: Option<String> },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The `error` field the server put in its JSON body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::UnexpectedShape { message } => message.as_deref(),
            _ => None,
        }
    }

    /// True when the server answered but not with the payload we expect.
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            Self::Status { .. } | Self::UnexpectedShape { .. } | Self::Decode(_)
        )
    }
}

fn fmt_server_message(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}
