//! Query Queue Module
//!
//! First-in-first-out queue of pending phone lookups for batch search.
//! Entries carry only the phone key and never own directory contacts.

mod queue;

pub use queue::QueryQueue;

use crate::record::Contact;

/// Outcome of one lookup in a batch search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The phone is indexed
    Found(Contact),

    /// No contact has this phone
    NotFound(String),
}

impl Lookup {
    /// The phone this lookup was for
    pub fn phone(&self) -> &str {
        match self {
            Lookup::Found(contact) => contact.phone(),
            Lookup::NotFound(phone) => phone,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}
