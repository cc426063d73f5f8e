//! Error types for model-client operations.

use thiserror::Error;

/// Result alias for model-client operations.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors raised while building the client or requesting a completion.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The configured API base URL did not parse.
    #[error("invalid API base URL '{url}'")]
    InvalidApiUrl {
        /// Offending URL string.
        url: String,
        /// Underlying parse error.
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {detail}")]
    BuildClient {
        /// Builder error detail.
        detail: String,
    },

    /// The completion request failed before a response arrived.
    #[error("chat completion request failed")]
    Request {
        /// Underlying transport error.
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("chat completion API returned status {status}: {detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Trimmed response body.
        detail: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode chat completion response")]
    DecodeResponse {
        /// Underlying decode error.
        source: reqwest::Error,
    },

    /// The API answered successfully but returned no choices.
    #[error("chat completion response contained no choices")]
    EmptyResponse,
}
