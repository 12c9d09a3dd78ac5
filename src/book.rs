//! Book Module
//!
//! The contact book that coordinates all components.
//!
//! ## Responsibilities
//! - Own the directory, the undo log and the query queue
//! - Move removed contacts from the directory onto the undo log
//! - Restore contacts from the undo log on undo
//! - Drain the query queue for batch search

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::directory::Directory;
use crate::error::{BookError, Result};
use crate::protocol::{Command, Response};
use crate::query::{Lookup, QueryQueue};
use crate::record::Contact;
use crate::undo::UndoLog;

/// The contact book
///
/// ## Ownership Model
///
/// A contact lives in exactly one place at a time:
/// - **Directory**: from insert until remove
/// - **UndoLog**: from remove until undo (or eviction)
///
/// `remove` takes the contact out of the directory by value and pushes it
/// onto the log; `undo` pops it and inserts it again. If that insert hits
/// a duplicate phone the popped contact is dropped, never pushed back.
///
/// Everything runs on the caller's thread; operations take `&mut self`.
pub struct ContactBook {
    /// Book configuration
    config: Config,

    /// Live contacts, ordered by phone
    directory: Directory,

    /// Removed contacts awaiting undo
    undo_log: UndoLog,

    /// Pending batch lookups
    queries: QueryQueue,
}

impl ContactBook {
    /// Create an empty book with the given config
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let undo_log = UndoLog::with_limit(config.undo_limit);

        Ok(Self {
            config,
            directory: Directory::new(),
            undo_log,
            queries: QueryQueue::new(),
        })
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        match command {
            Command::Add { name, phone } => {
                let contact = Contact::new(name, phone);
                self.insert_contact(contact.clone())?;
                Ok(Response::Added(contact))
            }
            Command::List => Ok(Response::Contacts(self.list_all())),
            Command::Find { phone } => self.find(&phone).map(Response::Found),
            Command::Delete { phone } => self.remove(&phone).map(Response::Removed),
            Command::Undo => self.undo().map(Response::Restored),
            Command::Deleted => Ok(Response::RecentlyDeleted(self.list_recently_deleted())),
            Command::Queue { phones } => {
                for phone in phones {
                    self.enqueue_search(phone);
                }
                Ok(Response::Queued {
                    pending: self.queries.len(),
                })
            }
            Command::Pending => Ok(Response::Pending(self.pending_searches())),
            Command::Batch { phones } => {
                for phone in phones {
                    self.enqueue_search(phone);
                }
                Ok(Response::BatchResults(self.run_batch_search()))
            }
            Command::SearchByName { .. } => Ok(Response::NotImplemented),
            Command::Help => Ok(Response::Help),
            Command::Exit => Ok(Response::Goodbye),
        }
    }

    /// Add a contact
    ///
    /// Fails with `DuplicateKey` if the phone is taken; the stored contact
    /// is not updated.
    pub fn insert(&mut self, name: impl Into<String>, phone: impl Into<String>) -> Result<()> {
        self.insert_contact(Contact::new(name, phone))
    }

    fn insert_contact(&mut self, contact: Contact) -> Result<()> {
        let phone = contact.phone().to_string();

        match self.directory.insert(contact) {
            Ok(()) => {
                debug!(phone = %phone, size = self.directory.len(), "contact inserted");
                Ok(())
            }
            Err(e) => {
                debug!(phone = %phone, "duplicate phone rejected");
                Err(e)
            }
        }
    }

    /// Look up a contact by phone
    pub fn find(&self, phone: &str) -> Result<Contact> {
        self.directory
            .find(phone)
            .cloned()
            .ok_or_else(|| BookError::NotFound(phone.to_string()))
    }

    /// Remove a contact and record it for undo
    ///
    /// Returns the removed contact. Nothing is recorded when the phone is
    /// not present.
    pub fn remove(&mut self, phone: &str) -> Result<Contact> {
        let removed = self
            .directory
            .remove(phone)
            .ok_or_else(|| BookError::NotFound(phone.to_string()))?;

        if let Some(evicted) = self.undo_log.push(removed.clone()) {
            debug!(phone = %evicted.phone(), "undo log full, oldest deletion dropped");
        }

        info!(phone = %phone, undo_depth = self.undo_log.len(), "contact removed");
        Ok(removed)
    }

    /// Restore the most recently removed contact
    ///
    /// Steps:
    /// 1. Pop the undo log (`NothingToUndo` if empty)
    /// 2. Insert the popped contact into the directory
    /// 3. On a duplicate phone, discard it and report `Rejected`
    pub fn undo(&mut self) -> Result<Contact> {
        let contact = self.undo_log.pop().ok_or(BookError::NothingToUndo)?;

        match self.directory.insert(contact.clone()) {
            Ok(()) => {
                info!(phone = %contact.phone(), "deletion undone");
                Ok(contact)
            }
            Err(BookError::DuplicateKey(_)) => {
                warn!(
                    phone = %contact.phone(),
                    "undo rejected, phone re-added since deletion; contact discarded"
                );
                Err(BookError::Rejected(contact))
            }
            Err(e) => Err(e),
        }
    }

    /// Queue a phone for the next batch search
    pub fn enqueue_search(&mut self, phone: impl Into<String>) {
        self.queries.enqueue(phone);
    }

    /// Drain the query queue, looking up every phone in submission order
    ///
    /// A phone that is not found is reported and the drain continues.
    pub fn run_batch_search(&mut self) -> Vec<Lookup> {
        let mut results = Vec::with_capacity(self.queries.len());

        while let Some(phone) = self.queries.dequeue() {
            let lookup = match self.directory.find(&phone) {
                Some(contact) => Lookup::Found(contact.clone()),
                None => Lookup::NotFound(phone),
            };
            results.push(lookup);
        }

        debug!(
            searched = results.len(),
            found = results.iter().filter(|lookup| lookup.is_found()).count(),
            "batch search drained"
        );
        results
    }

    /// Every contact in ascending phone order
    pub fn list_all(&self) -> Vec<Contact> {
        self.directory.traverse()
    }

    /// Removed contacts awaiting undo, most recent first
    pub fn list_recently_deleted(&self) -> Vec<Contact> {
        self.undo_log.peek_all()
    }

    /// Phones waiting for the next batch search, oldest first
    pub fn pending_searches(&self) -> Vec<String> {
        self.queries.iter().map(str::to_string).collect()
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Read-only view of the directory
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Number of live contacts
    pub fn len(&self) -> usize {
        self.directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Number of deletions that can be undone
    pub fn undo_depth(&self) -> usize {
        self.undo_log.len()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self {
            config: Config::default(),
            directory: Directory::new(),
            undo_log: UndoLog::new(),
            queries: QueryQueue::new(),
        }
    }
}
