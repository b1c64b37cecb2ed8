use thiserror::Error;

/// Message shown to users when a single-symbol lookup fails for any reason other than
/// the backend rejecting the symbol.
pub const GENERIC_FETCH_MESSAGE: &str = "Failed to fetch strategy data.";

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum MdError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or extended with a path.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The payload was well-formed but unusable (empty list, missing required field).
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The backend answered successfully but reported a semantic failure, typically an
    /// unknown symbol. The text is the backend's own message.
    #[error("{0}")]
    Backend(String),

    /// The caller supplied invalid parameters (e.g. an empty symbol).
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl MdError {
    /// Text suitable for showing to an end user.
    ///
    /// Backend-reported failures are passed through verbatim; everything else collapses to
    /// [`GENERIC_FETCH_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(msg) => msg.clone(),
            _ => GENERIC_FETCH_MESSAGE.to_string(),
        }
    }

    /// True when the backend itself rejected the request (as opposed to a transport or
    /// decoding failure).
    #[must_use]
    pub const fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }
}
