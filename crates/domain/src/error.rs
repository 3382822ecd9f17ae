//! Common error types used across the workspace.
//!
//! Each failure kind is a typed enum; [`SiteWatchError`] wraps them via
//! `#[from]` so callers can propagate with `?`.

/// Top-level error for every dashboard operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteWatchError {
    /// User input was rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend could not be reached or answered with a failure.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Client-side validation failures of the add-website form.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The URL field was blank after trimming.
    #[error("Please enter a valid URL")]
    MissingUrl,

    /// Exactly one of client certificate / client key was filled in.
    #[error("Both client certificate and key must be provided together")]
    UnpairedClientCertificate,
}

/// Failure talking to the backend REST API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}
