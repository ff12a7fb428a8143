//! Shareable quote tokens.
//!
//! A quote is shared as its JSON in the URL-safe base64 alphabet (`-` and
//! `_` in place of `+` and `/`) with no `=` padding. Money is written as JSON
//! numbers, matching the quote schema. Decoding accepts tokens with or
//! without padding and never errors: a token that does not decode to a quote
//! yields `None`.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, NO_PAD, URL_SAFE_NO_PAD};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::QuoteInput;

/// Query parameter that carries the token in a share URL.
pub const SHARE_QUERY_PARAM: &str = "quote";

/// URL-safe decoder that accepts padded and unpadded tokens.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes a quote as a URL-safe token.
///
/// # Errors
///
/// Returns [`EngineError::Encoding`] if the quote cannot be serialized.
pub fn encode_quote(quote: &QuoteInput) -> EngineResult<String> {
    let json = serde_json::to_string(quote).map_err(|e| EngineError::Encoding {
        message: e.to_string(),
    })?;

    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Decodes a token produced by [`encode_quote`].
///
/// # Examples
///
/// ```
/// use novated_lease_engine::import::default_quote;
/// use novated_lease_engine::sharing::{decode_quote, encode_quote};
///
/// let token = encode_quote(&default_quote()).unwrap();
/// assert_eq!(decode_quote(&token), Some(default_quote()));
/// assert_eq!(decode_quote("not a token!"), None);
/// ```
pub fn decode_quote(token: &str) -> Option<QuoteInput> {
    let bytes = match URL_SAFE_LENIENT.decode(token.trim().as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "Share token is not valid base64");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(quote) => Some(quote),
        Err(e) => {
            debug!(error = %e, "Share token does not contain a quote");
            None
        }
    }
}

/// Appends an encoded token to `base_url` as the `quote` query parameter.
pub fn share_link(base_url: &str, token: &str) -> String {
    format!("{}?{}={}", base_url, SHARE_QUERY_PARAM, token)
}

/// Builds a share URL for a quote.
pub fn share_url(base_url: &str, quote: &QuoteInput) -> EngineResult<String> {
    let token = encode_quote(quote)?;
    Ok(share_link(base_url, &token))
}
