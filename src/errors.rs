//! Error types for the API client.

/// Errors that can occur when talking to the marketplace API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Network-level failure before a full response was read, or the
    /// default HTTP client could not be built.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The caller's cancellation token fired before the round trip
    /// finished. No decoded result exists.
    #[error("Request cancelled")]
    Cancelled,
    /// The response body could not be parsed as JSON of the expected
    /// shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The API answered a non-200 status with a body acknowledging the
    /// failure (`"success": false`).
    #[error("Not success")]
    Rejected,
    /// The API answered a non-200 status with a body that nevertheless
    /// claims success. The raw body is kept for diagnosis.
    #[error("Backend returned status {status}: {body}")]
    Protocol { status: u16, body: String },
    /// The configured base URL does not parse.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
