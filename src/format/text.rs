//! String helpers for displaying and addressing access keys.

use std::borrow::Cow;

use crate::error::{AccessKeyError, Result};

/// Namespace of the access key translation keys.
pub const I18N_PREFIX: &str = "component.acl.accesskey.frontend.";

/// Maximum displayed length of a reference.
pub const SHORT_REFERENCE_LEN: usize = 20;

const ELLIPSIS: &str = "...";

/// Shorten `input` to at most `len` characters, marking the cut with `...`.
///
/// Strings that already fit are returned unchanged. Lengths are counted in
/// characters, not bytes.
pub fn short_string(input: &str, len: usize) -> Cow<'_, str> {
    if input.chars().count() <= len {
        return Cow::Borrowed(input);
    }
    let keep = len.saturating_sub(ELLIPSIS.len());
    let mut out: String = input.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// Shorten a reference for display in tables and dialogs.
///
/// ```rust
/// use accesskey_core::short_reference;
///
/// assert_eq!(short_reference("short"), "short");
/// assert_eq!(short_reference("mir_mods_00000001_derivate"), "mir_mods_00000001...");
/// ```
pub fn short_reference(reference: &str) -> Cow<'_, str> {
    short_string(reference, SHORT_REFERENCE_LEN)
}

/// Percent-encode a value for use as a single URL component.
pub fn url_encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Decode a percent-encoded URL component.
pub fn url_decode(value: &str) -> Result<Cow<'_, str>> {
    urlencoding::decode(value)
        .map_err(|e| AccessKeyError::invalid_argument(format!("invalid percent-encoding: {e}")))
}

/// Translation key for `value` in the access key namespace.
pub fn get_i18n_key(value: &str) -> String {
    format!("{I18N_PREFIX}{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_reference_truncates_long_values() {
        let short = short_reference("a_very_long_reference_identifier_string");
        assert_eq!(short.chars().count(), 20);
        assert!(short.ends_with("..."));
        assert_eq!(short, "a_very_long_refer...");
    }

    #[test]
    fn test_short_reference_keeps_short_values() {
        assert_eq!(short_reference("short"), "short");
        assert!(matches!(short_reference("short"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_short_reference_boundary() {
        let exact = "a".repeat(20);
        assert_eq!(short_reference(&exact), exact);
        let over = "a".repeat(21);
        assert_eq!(short_reference(&over), format!("{}...", "a".repeat(17)));
    }

    #[test]
    fn test_short_string_counts_characters() {
        assert_eq!(short_string("äöüäöüäöü", 6), "äöü...");
        assert_eq!(short_string("äöü", 3), "äöü");
    }

    #[test]
    fn test_short_string_tiny_limit() {
        assert_eq!(short_string("abcdef", 2), "...");
    }

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("a b/c"), "a%20b%2Fc");
        assert_eq!(url_encode("mir_mods_00000001"), "mir_mods_00000001");
        assert_eq!(url_encode("ä&="), "%C3%A4%26%3D");
    }

    #[test]
    fn test_url_decode() {
        assert_eq!(url_decode("a%20b%2Fc").unwrap(), "a b/c");
        assert!(url_decode("%FF%FE").is_err());
    }

    #[test]
    fn test_i18n_key() {
        assert_eq!(get_i18n_key("title"), "component.acl.accesskey.frontend.title");
        assert_eq!(
            get_i18n_key("label.secret"),
            "component.acl.accesskey.frontend.label.secret"
        );
    }
}
