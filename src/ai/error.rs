use thiserror::Error;

/// Why an AI draft could not be produced.
///
/// Every variant is recoverable: the caller falls back to the template engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key in the configured environment variable.
    #[error("no API key found in ${0}")]
    MissingApiKey(String),

    /// The request never completed (DNS, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response (or the model's text inside it) was not the expected JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The JSON parsed but a required field was absent or empty.
    #[error("response is missing '{0}'")]
    MissingField(&'static str),
}
