//! Error types for the novated lease engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can reach a caller: configuration loading, quote
//! import and validation, persistence, and share-token encoding.

use thiserror::Error;

/// The main error type for the novated lease engine.
///
/// The calculation functions themselves are total over a validated quote, so
/// these errors only come from the boundaries around them.
///
/// # Example
///
/// ```
/// use novated_lease_engine::error::EngineError;
///
/// let error = EngineError::MissingSection {
///     section: "leaseTerms".to_string(),
/// };
/// assert_eq!(error.to_string(), "Quote is missing required section: leaseTerms");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or describes an unusable policy.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Quote text was not valid JSON or did not match the quote schema.
    #[error("Malformed quote: {message}")]
    MalformedQuote {
        /// A description of what could not be parsed.
        message: String,
    },

    /// One of the top-level quote groups the calculation cannot run without is absent.
    #[error("Quote is missing required section: {section}")]
    MissingSection {
        /// The camelCase name of the missing group.
        section: String,
    },

    /// A quote field holds a value outside its domain.
    #[error("Invalid quote field '{field}': {message}")]
    InvalidQuote {
        /// The dotted path of the offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Saved quotes could not be read or written.
    #[error("Quote storage error at '{path}': {message}")]
    Storage {
        /// The storage file involved.
        path: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// A quote could not be turned into a share token.
    #[error("Failed to encode quote: {message}")]
    Encoding {
        /// A description of the encoding failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
