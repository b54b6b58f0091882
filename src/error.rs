//! Error type shared by every module of the crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AccessKeyError>;

/// Errors returned by access key helpers and token providers.
#[derive(Error, Debug)]
pub enum AccessKeyError {
    /// A helper was called with a value outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The token endpoint answered with a non-success status.
    #[error("token endpoint returned {status}: {message}")]
    Http { status: u16, message: String },

    /// The token endpoint answered but refused to issue a token.
    #[error("login failed: {0}")]
    LoginFailed(String),

    /// Failure reported by a custom [`TokenProvider`](crate::auth::TokenProvider).
    #[error("token provider error: {0}")]
    Provider(String),

    /// The request could not be sent or the response could not be read.
    #[cfg(feature = "http")]
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL is not a valid URL.
    #[cfg(feature = "http")]
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl AccessKeyError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
