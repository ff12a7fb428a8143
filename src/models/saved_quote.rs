//! Saved quote records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::QuoteInput;

/// A quote saved under a name for later comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuote {
    /// Unique identifier, `quote_<uuid>`.
    pub id: String,
    /// User-chosen name.
    pub name: String,
    /// The quote itself, stored verbatim.
    pub data: QuoteInput,
    /// When the quote was first saved (RFC 3339 on disk).
    pub saved_at: DateTime<Utc>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields of a saved quote that may be replaced. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteUpdate {
    /// New name.
    pub name: Option<String>,
    /// New quote data.
    pub data: Option<QuoteInput>,
    /// New notes.
    pub notes: Option<String>,
}

impl SavedQuote {
    /// Applies an update in place; `id` and `saved_at` never change.
    pub fn apply(&mut self, update: QuoteUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(data) = update.data {
            self.data = data;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
    }
}
