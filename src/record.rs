//! Contact record
//!
//! The value stored in the directory. The phone number is the index key;
//! the name is payload.

use std::fmt;

/// A single contact: a name and the phone number it is indexed by
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    name: String,
    phone: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The index key
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Phone: {}", self.name, self.phone)
    }
}
