//! JWT acquisition for access keys.
//!
//! [`fetch_jwt`] derives the `acckey_<reference>` attribute and hands it to an
//! injected [`TokenProvider`]. [`HttpTokenProvider`] talks to a repository's
//! JWT resource directly (feature `http`).

mod fetch;
#[cfg(feature = "http")]
mod http;
mod provider;

pub use fetch::{attribute_name, fetch_jwt, jwt_attributes, ATTRIBUTE_PREFIX};
#[cfg(feature = "http")]
pub use http::{HttpTokenProvider, JWT_PATH};
pub use provider::{JwtAttributes, Token, TokenProvider};
