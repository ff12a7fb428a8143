//! Request types for the novated lease API.
//!
//! `/calculate` and `/validate` take a bare quote JSON; only `/share` wraps
//! the quote with extra fields.

use serde::{Deserialize, Serialize};

use crate::models::QuoteInput;

/// Base URL used for share links when the request does not give one.
pub const DEFAULT_SHARE_BASE_URL: &str = "/";

/// Request body for the `/share` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    /// The quote to encode.
    pub quote: QuoteInput,
    /// The page the share link should open.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}
