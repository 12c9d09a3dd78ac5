//! Undo Log Module
//!
//! Last-in-first-out history of contacts removed from the directory.
//!
//! ## Responsibilities
//! - Own every contact that has been removed and not yet restored
//! - Hand back the most recent removal first
//! - Optionally cap its depth, dropping the oldest removal when full

mod log;

pub use log::UndoLog;
