//! Access key scoped token acquisition.

use tracing::{debug, warn};

use super::provider::{JwtAttributes, Token, TokenProvider};
use crate::error::Result;

/// Prefix of the attribute naming an access key.
pub const ATTRIBUTE_PREFIX: &str = "acckey_";

/// Attribute name for the access key of `reference`.
///
/// A missing reference yields `acckey_undefined`, the name host pages
/// have always sent in that case.
pub fn attribute_name(reference: Option<&str>) -> String {
    format!("{ATTRIBUTE_PREFIX}{}", reference.unwrap_or("undefined"))
}

/// Attributes requested for the access key of `reference`.
///
/// The attribute is always sent as a user attribute and additionally as a
/// session attribute when `session_enabled` is `Some(true)`.
pub fn jwt_attributes(reference: Option<&str>, session_enabled: Option<bool>) -> JwtAttributes {
    let name = attribute_name(reference);
    JwtAttributes {
        session_attributes: session_enabled
            .unwrap_or(false)
            .then(|| vec![name.clone()]),
        user_attributes: Some(vec![name]),
    }
}

/// Fetch a JWT scoped to the access key of `reference`.
///
/// Provider errors are returned as they are; there is no retry.
///
/// # Example
///
/// ```rust,ignore
/// use accesskey_core::{fetch_jwt, HttpTokenProvider};
///
/// let provider = HttpTokenProvider::new()?;
/// let token = fetch_jwt(&provider, "https://repo.example/mir/", Some("mir_mods_00000001"), None).await?;
/// ```
pub async fn fetch_jwt<P>(
    provider: &P,
    base_url: &str,
    reference: Option<&str>,
    session_enabled: Option<bool>,
) -> Result<Token>
where
    P: TokenProvider + ?Sized,
{
    if reference.is_none() {
        warn!("fetching access key token without a reference");
    }
    let attributes = jwt_attributes(reference, session_enabled);
    debug!(
        base_url,
        user_attributes = ?attributes.user_attributes,
        session = attributes.session_attributes.is_some(),
        "requesting access key token"
    );
    provider.fetch_token(base_url, &attributes).await
}
