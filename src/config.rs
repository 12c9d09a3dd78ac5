//! Configuration for contactbook
//!
//! Centralized configuration with sensible defaults.

use crate::error::{BookError, Result};

/// Main configuration for a ContactBook and its shell
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Undo Log Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of deletions kept for undo.
    /// `None` keeps every deletion until it is undone.
    pub undo_limit: Option<usize>,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Word that ends interactive batch-search entry
    pub batch_sentinel: String,

    /// Prompt printed before each command
    pub prompt: String,

    /// Print the numbered menu before each prompt
    pub show_menu: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            undo_limit: None,
            batch_sentinel: "done".to_string(),
            prompt: "Enter your choice: ".to_string(),
            show_menu: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.undo_limit == Some(0) {
            return Err(BookError::Config(
                "undo limit must be at least 1 (omit it for unbounded)".to_string(),
            ));
        }

        if self.batch_sentinel.trim().is_empty() {
            return Err(BookError::Config(
                "batch sentinel must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Bound the undo log depth; the oldest deletion is dropped when full
    pub fn undo_limit(mut self, limit: usize) -> Self {
        self.config.undo_limit = Some(limit);
        self
    }

    /// Keep every deletion for undo
    pub fn unbounded_undo(mut self) -> Self {
        self.config.undo_limit = None;
        self
    }

    /// Set the word that ends batch-search entry
    pub fn batch_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.config.batch_sentinel = sentinel.into();
        self
    }

    /// Set the shell prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Show or hide the numbered menu
    pub fn show_menu(mut self, show: bool) -> Self {
        self.config.show_menu = show;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
