//! Environment-driven access key settings.

use std::time::Duration;

use crate::error::Result;
use crate::secret::{generate_random_string, MIN_SECRET_LENGTH};

#[cfg(feature = "auth")]
use crate::auth::{fetch_jwt, Token, TokenProvider};
#[cfg(feature = "http")]
use crate::auth::HttpTokenProvider;

const DEFAULT_BASE_URL: &str = "http://localhost:8291/mir/";
const DEFAULT_SECRET_LENGTH: usize = 16;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to a repository about access keys.
///
/// Reads from environment variables with sensible defaults:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `ACCESSKEY_BASE_URL` | `http://localhost:8291/mir/` | Repository base URL |
/// | `ACCESSKEY_SESSION_ENABLED` | `false` | Request session scoped tokens |
/// | `ACCESSKEY_SECRET_LENGTH` | `16` | Length of generated secrets |
/// | `ACCESSKEY_TIMEOUT_SECS` | `30` | HTTP request timeout |
///
/// # Example
///
/// ```rust
/// use accesskey_core::AccessKeyConfig;
///
/// let config = AccessKeyConfig::from_env();
/// let secret = config.generate_secret().unwrap();
/// assert_eq!(secret.len(), config.secret_length);
/// ```
#[derive(Clone, Debug)]
pub struct AccessKeyConfig {
    /// Repository base URL, always ending in `/`
    pub base_url: String,
    /// Whether tokens are also bound to the session
    pub session_enabled: bool,
    /// Length of generated secrets (at least 4)
    pub secret_length: usize,
    /// Timeout for token requests in seconds
    pub timeout_secs: u64,
}

impl AccessKeyConfig {
    /// Create a new config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: normalize_base_url(
                std::env::var("ACCESSKEY_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            ),
            session_enabled: std::env::var("ACCESSKEY_SESSION_ENABLED")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            secret_length: std::env::var("ACCESSKEY_SECRET_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|len| *len >= MIN_SECRET_LENGTH)
                .unwrap_or(DEFAULT_SECRET_LENGTH),
            timeout_secs: std::env::var("ACCESSKEY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Generate a secret of the configured length.
    pub fn generate_secret(&self) -> Result<String> {
        generate_random_string(self.secret_length)
    }

    /// Fetch a token for `reference` using the configured base URL and session flag.
    #[cfg(feature = "auth")]
    pub async fn fetch_jwt<P>(&self, provider: &P, reference: Option<&str>) -> Result<Token>
    where
        P: TokenProvider + ?Sized,
    {
        fetch_jwt(provider, &self.base_url, reference, Some(self.session_enabled)).await
    }

    /// HTTP token provider honouring the configured timeout.
    #[cfg(feature = "http")]
    pub fn http_provider(&self) -> Result<HttpTokenProvider> {
        HttpTokenProvider::with_timeout(self.request_timeout())
    }
}

impl Default for AccessKeyConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
