//! Token provider backed by the repository's JWT resource.
//!
//! Tokens are requested with `GET {base_url}rsc/jwt`, passing each user
//! attribute as `ua` and each session attribute as `sa` query parameter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::provider::{JwtAttributes, Token, TokenProvider};
use crate::error::{AccessKeyError, Result};

/// Path of the JWT resource relative to the repository base URL.
pub const JWT_PATH: &str = "rsc/jwt";

#[derive(Debug, Deserialize)]
struct JwtResponse {
    #[serde(default)]
    login_success: bool,
    access_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
}

/// [`TokenProvider`] talking HTTP to a repository.
#[derive(Clone, Debug)]
pub struct HttpTokenProvider {
    client: Client,
}

impl HttpTokenProvider {
    /// Create a provider with a default client.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(Client::builder().build()?))
    }

    /// Create a provider whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self::with_client(Client::builder().timeout(timeout).build()?))
    }

    /// Create a provider reusing an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Full request URL for `attributes` below `base_url`.
    pub fn jwt_url(base_url: &str, attributes: &JwtAttributes) -> Result<Url> {
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        let mut url = base.join(JWT_PATH)?;
        let pairs: Vec<(&str, &String)> = attributes
            .user_attributes
            .iter()
            .flatten()
            .map(|a| ("ua", a))
            .chain(attributes.session_attributes.iter().flatten().map(|a| ("sa", a)))
            .collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}

#[async_trait]
impl TokenProvider for HttpTokenProvider {
    async fn fetch_token(&self, base_url: &str, attributes: &JwtAttributes) -> Result<Token> {
        let url = Self::jwt_url(base_url, attributes)?;
        debug!(url = %url, "requesting jwt");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "jwt request rejected");
            return Err(AccessKeyError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body: JwtResponse = response.json().await?;
        if !body.login_success {
            return Err(AccessKeyError::LoginFailed(
                "repository did not grant a token".to_string(),
            ));
        }
        match body.access_token {
            Some(token) if !token.is_empty() => {
                debug!(token_type = body.token_type.as_deref(), "received jwt");
                Ok(Token::new(token))
            }
            _ => Err(AccessKeyError::LoginFailed(
                "response did not contain an access token".to_string(),
            )),
        }
    }
}
