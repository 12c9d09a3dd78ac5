//! # contactbook
//!
//! An in-memory contact directory with:
//! - An ordered index of contacts keyed by phone number
//! - Undo of deletions, most recent first
//! - Batch lookup of queued phone numbers, first in first out
//! - A line-oriented menu shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Shell (menu loop)                        │
//! │                 parse line -> Command                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      ContactBook                             │
//! │          insert / find / remove / undo / batch               │
//! └──────┬──────────────────────┬──────────────────────┬────────┘
//!        │                      │                      │
//!        ▼                      ▼                      ▼
//! ┌─────────────┐  removed ┌─────────────┐      ┌─────────────┐
//! │  Directory  │ ───────► │   UndoLog   │      │ QueryQueue  │
//! │    (BST)    │ ◄─────── │   (LIFO)    │      │   (FIFO)    │
//! └─────────────┘   undo   └─────────────┘      └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod directory;
pub mod undo;
pub mod query;
pub mod protocol;
pub mod book;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BookError, Result};
pub use config::Config;
pub use record::Contact;
pub use book::ContactBook;
pub use query::Lookup;
pub use shell::Shell;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of contactbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
