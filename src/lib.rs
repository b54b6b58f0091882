//! Access key helpers for repository front ends.
//!
//! This crate provides the non-visual building blocks of access key
//! management:
//!
//! - **auth**: JWT acquisition scoped to an access key (`acckey_<reference>`)
//! - **secret**: random secrets for new access keys
//! - **format**: timestamp, reference, URL and i18n key formatting
//! - **components**: names of the exported UI components
//! - **config**: configuration with environment variable support
//! - **bootstrap**: tracing initialization
//!
//! # Features
//!
//! - `auth` - Token provider trait and adapter (enabled by default)
//! - `http` - HTTP token provider for the repository JWT resource (enabled by default)
//! - `config` - Configuration utilities (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,ignore
//! use accesskey_core::{init_tracing, AccessKeyConfig};
//!
//! #[tokio::main]
//! async fn main() -> accesskey_core::Result<()> {
//!     init_tracing("accesskey_core=debug,info");
//!     let config = AccessKeyConfig::from_env();
//!     let provider = config.http_provider()?;
//!
//!     let token = config.fetch_jwt(&provider, Some("mir_mods_00000001")).await?;
//!     let secret = config.generate_secret()?;
//!     Ok(())
//! }
//! ```

pub mod components;
pub mod error;
pub mod format;
pub mod secret;

#[cfg(feature = "auth")]
pub mod auth;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
pub use components::AccessKeyComponent;
pub use error::{AccessKeyError, Result};
pub use format::{
    convert_unix_to_iso, get_i18n_key, get_unix_timestamp, short_reference, url_encode,
};
pub use secret::generate_random_string;

#[cfg(feature = "auth")]
pub use auth::{fetch_jwt, JwtAttributes, Token, TokenProvider};

#[cfg(feature = "http")]
pub use auth::HttpTokenProvider;

#[cfg(feature = "config")]
pub use config::AccessKeyConfig;

#[cfg(feature = "bootstrap")]
pub use bootstrap::init_tracing;
