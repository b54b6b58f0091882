//! Formatting helpers for access key views.
//!
//! Timestamps are Unix milliseconds throughout.

mod text;
mod time;

pub use text::{
    get_i18n_key, short_reference, short_string, url_decode, url_encode, I18N_PREFIX,
    SHORT_REFERENCE_LEN,
};
pub use time::{convert_unix_to_iso, get_unix_timestamp, DateInput};
