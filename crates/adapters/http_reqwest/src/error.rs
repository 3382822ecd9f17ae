//! HTTP adapter error types.

use sitewatch_domain::error::{ApiError, SiteWatchError};

/// Errors specific to the reqwest adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL is empty or not http(s).
    #[error("invalid backend base URL: {0:?}")]
    InvalidBaseUrl(String),

    /// The reqwest client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request failed before a response arrived.
    #[error("request failed")]
    Request(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected JSON.
    #[error("failed to decode response body")]
    Decode(#[source] reqwest::Error),
}

impl HttpError {
    /// Convert into a [`SiteWatchError::Api`] for propagation across the
    /// port boundary.
    #[must_use]
    pub fn into_domain(self) -> SiteWatchError {
        let api = match self {
            Self::Status(status) => ApiError::Status(status.as_u16()),
            Self::Decode(err) => ApiError::Decode(err.to_string()),
            Self::Request(err) | Self::Client(err) => ApiError::Transport(err.to_string()),
            Self::InvalidBaseUrl(url) => ApiError::Transport(format!("invalid base URL {url:?}")),
        };
        api.into()
    }
}

impl From<HttpError> for SiteWatchError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}
