//! UndoLog implementation

use std::collections::VecDeque;

use crate::record::Contact;

/// Stack of removed contacts, head = most recent removal
#[derive(Debug, Default)]
pub struct UndoLog {
    entries: VecDeque<Contact>,
    limit: Option<usize>,
}

impl UndoLog {
    /// Create an unbounded log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log holding at most `limit` entries
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Push a removed contact onto the head
    ///
    /// If the log is at its limit the oldest entry is evicted and returned.
    pub fn push(&mut self, contact: Contact) -> Option<Contact> {
        let evicted = match self.limit {
            Some(limit) if self.entries.len() >= limit => self.entries.pop_back(),
            _ => None,
        };
        self.entries.push_front(contact);
        evicted
    }

    /// Pop the most recent removal
    pub fn pop(&mut self) -> Option<Contact> {
        self.entries.pop_front()
    }

    pub fn peek(&self) -> Option<&Contact> {
        self.entries.front()
    }

    /// Entries from most recent to oldest
    pub fn iter(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.entries.iter()
    }

    /// Snapshot of every entry, most recent first
    pub fn peek_all(&self) -> Vec<Contact> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
