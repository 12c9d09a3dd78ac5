//! Response definitions
//!
//! Represents successful results sent back to the shell. Failures travel
//! as `BookError` and are rendered by `write_error`.

use crate::query::Lookup;
use crate::record::Contact;

/// A response to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Contact inserted
    Added(Contact),

    /// Full listing, ascending by phone
    Contacts(Vec<Contact>),

    Found(Contact),

    /// Contact removed and recorded for undo
    Removed(Contact),

    /// Deletion undone
    Restored(Contact),

    /// Undo log contents, most recent first
    RecentlyDeleted(Vec<Contact>),

    /// Phones queued; `pending` is the queue length afterwards
    Queued { pending: usize },

    /// Queued phones, oldest first
    Pending(Vec<String>),

    /// One result per drained phone, in queue order
    BatchResults(Vec<Lookup>),

    NotImplemented,

    Help,

    Goodbye,
}
