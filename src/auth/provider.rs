//! Token provider abstraction.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// An issued JWT. Opaque to this crate.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Value for an `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens are credentials; keep them out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&"<redacted>").finish()
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Attributes a token is requested for.
///
/// `None` and `Some(vec![])` are different requests: `None` leaves the
/// attribute kind out entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JwtAttributes {
    pub user_attributes: Option<Vec<String>>,
    pub session_attributes: Option<Vec<String>>,
}

/// Source of JWTs for a repository.
///
/// Implementations own the wire protocol. Errors are returned to callers
/// unchanged.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn fetch_token(&self, base_url: &str, attributes: &JwtAttributes) -> Result<Token>;
}

#[async_trait]
impl<T: TokenProvider + ?Sized> TokenProvider for Arc<T> {
    async fn fetch_token(&self, base_url: &str, attributes: &JwtAttributes) -> Result<Token> {
        (**self).fetch_token(base_url, attributes).await
    }
}

#[async_trait]
impl<T: TokenProvider + ?Sized> TokenProvider for Box<T> {
    async fn fetch_token(&self, base_url: &str, attributes: &JwtAttributes) -> Result<Token> {
        (**self).fetch_token(base_url, attributes).await
    }
}
