//! Saved quote persistence.
//!
//! Quotes are kept as a single JSON array in one file, read and written
//! wholesale. Read failures are logged and treated as "no saved quotes" so
//! a damaged file never stops a calculation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{QuoteInput, QuoteUpdate, SavedQuote};

/// Storage key; the file is named `<key>.json`.
pub const STORAGE_KEY: &str = "novated_lease_saved_quotes";

/// A file-backed collection of saved quotes.
///
/// # Example
///
/// ```no_run
/// use novated_lease_engine::import::default_quote;
/// use novated_lease_engine::storage::QuoteStore;
///
/// let store = QuoteStore::new("./data");
/// let saved = store.save("RAV4 quote", default_quote(), None).unwrap();
/// assert_eq!(store.get(&saved.id).unwrap().name, "RAV4 quote");
/// ```
#[derive(Debug, Clone)]
pub struct QuoteStore {
    path: PathBuf,
}

impl QuoteStore {
    /// Opens the store kept in `dir`. Nothing is read until first use.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    /// The storage file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved quotes, in the order they were saved.
    pub fn list(&self) -> Vec<SavedQuote> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read saved quotes");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Saved quotes are corrupted");
                Vec::new()
            }
        }
    }

    /// Looks up a saved quote by id.
    pub fn get(&self, id: &str) -> Option<SavedQuote> {
        self.list().into_iter().find(|q| q.id == id)
    }

    /// Saves a quote under a new id and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Storage`] if the file cannot be written.
    pub fn save(
        &self,
        name: &str,
        data: QuoteInput,
        notes: Option<String>,
    ) -> EngineResult<SavedQuote> {
        let saved = SavedQuote {
            id: format!("quote_{}", Uuid::new_v4()),
            name: name.to_string(),
            data,
            saved_at: Utc::now(),
            notes,
        };

        let mut quotes = self.list();
        quotes.push(saved.clone());
        self.write_all(&quotes)?;

        debug!(id = %saved.id, name = %saved.name, "Saved quote");
        Ok(saved)
    }

    /// Applies an update to the quote with `id`.
    ///
    /// Returns `false` if no such quote exists or the file cannot be written.
    pub fn update(&self, id: &str, update: QuoteUpdate) -> bool {
        let mut quotes = self.list();
        let Some(quote) = quotes.iter_mut().find(|q| q.id == id) else {
            return false;
        };
        quote.apply(update);

        self.persist(&quotes, "update", id)
    }

    /// Deletes the quote with `id`.
    ///
    /// Returns `false` if no such quote exists or the file cannot be written.
    pub fn delete(&self, id: &str) -> bool {
        let mut quotes = self.list();
        let before = quotes.len();
        quotes.retain(|q| q.id != id);
        if quotes.len() == before {
            return false;
        }

        self.persist(&quotes, "delete", id)
    }

    fn persist(&self, quotes: &[SavedQuote], operation: &str, id: &str) -> bool {
        match self.write_all(quotes) {
            Ok(()) => {
                debug!(id = %id, operation = %operation, "Saved quotes written");
                true
            }
            Err(e) => {
                warn!(id = %id, operation = %operation, error = %e, "Failed to write saved quotes");
                false
            }
        }
    }

    fn write_all(&self, quotes: &[SavedQuote]) -> EngineResult<()> {
        let storage_error = |message: String| EngineError::Storage {
            path: self.path.display().to_string(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| storage_error(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(quotes).map_err(|e| storage_error(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| storage_error(e.to_string()))
    }
}
