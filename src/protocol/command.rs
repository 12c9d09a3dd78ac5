//! Command definitions
//!
//! Represents requests from the shell.

/// Numbered menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Add = 1,
    Display = 2,
    Search = 3,
    Delete = 4,
    Undo = 5,
    BatchSearch = 6,
    SearchByName = 7,
    Exit = 8,
}

impl MenuChoice {
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Display),
            3 => Some(MenuChoice::Search),
            4 => Some(MenuChoice::Delete),
            5 => Some(MenuChoice::Undo),
            6 => Some(MenuChoice::BatchSearch),
            7 => Some(MenuChoice::SearchByName),
            8 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Contact",
            MenuChoice::Display => "Display Contacts",
            MenuChoice::Search => "Search Contact by Phone Number",
            MenuChoice::Delete => "Delete Contact",
            MenuChoice::Undo => "Undo Last Deletion",
            MenuChoice::BatchSearch => "Batch Search",
            MenuChoice::SearchByName => "Search Contact by Name",
            MenuChoice::Exit => "Exit",
        }
    }

    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Add,
        MenuChoice::Display,
        MenuChoice::Search,
        MenuChoice::Delete,
        MenuChoice::Undo,
        MenuChoice::BatchSearch,
        MenuChoice::SearchByName,
        MenuChoice::Exit,
    ];
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a contact
    Add { name: String, phone: String },

    /// List every contact
    List,

    /// Look up a contact by phone
    Find { phone: String },

    /// Delete a contact
    Delete { phone: String },

    /// Restore the most recent deletion
    Undo,

    /// List deletions awaiting undo
    Deleted,

    /// Queue phones for batch search
    Queue { phones: Vec<String> },

    /// Show queued phones
    Pending,

    /// Queue phones (possibly none) and drain the queue
    Batch { phones: Vec<String> },

    /// Search by name (not indexed)
    SearchByName { name: String },

    Help,

    Exit,
}
