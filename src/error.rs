//! Error types for contactbook
//!
//! Every failure is a recoverable outcome reported to the caller; none of
//! them leave the book in an inconsistent state.

use thiserror::Error;

use crate::record::Contact;

/// Result type alias using BookError
pub type Result<T> = std::result::Result<T, BookError>;

/// Unified error type for contactbook operations
#[derive(Debug, Error)]
pub enum BookError {
    // -------------------------------------------------------------------------
    // Directory Errors
    // -------------------------------------------------------------------------
    /// Insert rejected, the index is unchanged
    #[error("Duplicate contact ignored: {0}")]
    DuplicateKey(String),

    /// Lookup or removal found no matching phone
    #[error("Contact not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Undo Errors
    // -------------------------------------------------------------------------
    #[error("No recently deleted contacts to undo")]
    NothingToUndo,

    /// The popped contact collides with a live one and was discarded
    #[error("Undo rejected, phone {} is already in use; {} was discarded", .0.phone(), .0.name())]
    Rejected(Contact),

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
