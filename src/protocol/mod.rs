//! Protocol Module
//!
//! Defines the text protocol between the interactive shell and the book.
//!
//! ## Request Format
//! One command per line. Either a menu number or a word command:
//!
//! ```text
//! 1 | add <phone> <name...>      Add a contact
//! 2 | list                       Show all contacts, ascending by phone
//! 3 | find <phone>               Search by phone
//! 4 | delete <phone>             Delete (can be undone)
//! 5 | undo                       Restore the last deletion
//! 6 | batch [<phone>...]         Queue phones and run a batch search
//! 7 | name <name>                Search by name (not supported)
//! 8 | exit | quit                Leave the shell
//!     queue <phone>...           Queue phones without running
//!     pending                    Show queued phones
//!     deleted                    Show recently deleted contacts
//!     help                       Show this list
//! ```
//!
//! A bare menu number asks for its arguments on the following lines.
//!
//! ## Response Format
//! Plain text lines; contacts are rendered as `Name: <name>, Phone: <phone>`.

mod command;
mod response;
mod codec;

pub use command::{Command, MenuChoice};
pub use response::Response;
pub use codec::{parse_command, parse_menu_choice, write_error, write_menu, write_response};
