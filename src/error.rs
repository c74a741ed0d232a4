//! Error types for Voice API operations.
//!
//! Every fallible operation in this crate returns [`VoiceResult<T>`]. Errors are
//! classified into two axes for caller convenience:
//!
//! - **Validation errors** ([`VoiceError::is_validation`]): the input was rejected
//!   before anything happened. No fragment was appended and no request was sent.
//! - **Transport errors** ([`VoiceError::is_transport`]): the request was handed
//!   to the transport and failed there (connection, timeout, non-2xx status).

use thiserror::Error;

/// Result type alias for Voice operations
pub type VoiceResult<T> = Result<T, VoiceError>;

/// Error types for voice actions and API operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VoiceError {
    /// An option was missing or malformed
    #[error("{message}")]
    Validation { message: String },

    /// The dispatcher did not recognise the method name
    #[error("{name} is an invalid Voice SDK Method")]
    InvalidMethod { name: String },

    /// Configuration could not be assembled
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The API answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Request did not complete in time
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Connection or protocol failure inside the HTTP client
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Base URL could not be parsed
    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),
}

impl VoiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_method(name: impl Into<String>) -> Self {
        Self::InvalidMethod { name: name.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// `true` if the error was raised before any side effect.
    ///
    /// Matches: `Validation`, `InvalidMethod`.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            VoiceError::Validation { .. } | VoiceError::InvalidMethod { .. }
        )
    }

    /// `true` if the request reached the transport and failed there.
    ///
    /// Matches: `Http`, `Timeout`, `Transport`.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            VoiceError::Http { .. } | VoiceError::Timeout { .. } | VoiceError::Transport(_)
        )
    }
}
