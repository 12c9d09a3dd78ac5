//! QueryQueue implementation

use std::collections::VecDeque;

/// Pending phone lookups in submission order
#[derive(Debug, Default)]
pub struct QueryQueue {
    pending: VecDeque<String>,
}

impl QueryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lookup request at the tail
    pub fn enqueue(&mut self, phone: impl Into<String>) {
        self.pending.push_back(phone.into());
    }

    /// Take the oldest request
    pub fn dequeue(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    /// Pending phones, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.pending.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
