//! Protocol codec
//!
//! Parsing command lines and rendering responses as text.

use std::io::Write;

use super::{Command, MenuChoice, Response};
use crate::error::{BookError, Result};
use crate::query::Lookup;

const HELP: &str = "\
Commands:
  add <phone> <name...>   Add a contact
  list                    Show all contacts
  find <phone>            Search contact by phone number
  delete <phone>          Delete contact
  undo                    Undo last deletion
  deleted                 Show recently deleted contacts
  queue <phone>...        Queue phones for batch search
  pending                 Show queued phones
  batch [<phone>...]      Queue phones and run the batch search
  exit                    Leave
Menu numbers 1-8 are accepted as well.";

// =============================================================================
// Parsing
// =============================================================================

/// Recognize a bare menu number
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    line.trim().parse::<u8>().ok().and_then(MenuChoice::from_number)
}

/// Parse a word command
///
/// The command word is case-insensitive; arguments are split on
/// whitespace. Everything after the phone in `add` is the name.
pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let verb = words
        .next()
        .ok_or_else(|| BookError::Parse("empty command".to_string()))?
        .to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    match verb.as_str() {
        "add" | "insert" => match args.split_first() {
            Some((phone, name)) if !name.is_empty() => Ok(Command::Add {
                name: name.join(" "),
                phone: phone.to_string(),
            }),
            _ => Err(usage("add <phone> <name>")),
        },
        "list" | "display" | "all" => no_args(&args, "list", Command::List),
        "find" | "search" => single_phone(&args, "find <phone>").map(|phone| Command::Find { phone }),
        "delete" | "del" | "remove" => {
            single_phone(&args, "delete <phone>").map(|phone| Command::Delete { phone })
        }
        "undo" => no_args(&args, "undo", Command::Undo),
        "deleted" | "recent" => no_args(&args, "deleted", Command::Deleted),
        "queue" | "enqueue" => {
            if args.is_empty() {
                return Err(usage("queue <phone>..."));
            }
            Ok(Command::Queue {
                phones: to_owned(&args),
            })
        }
        "pending" => no_args(&args, "pending", Command::Pending),
        "batch" => Ok(Command::Batch {
            phones: to_owned(&args),
        }),
        "name" => {
            if args.is_empty() {
                return Err(usage("name <name>"));
            }
            Ok(Command::SearchByName {
                name: args.join(" "),
            })
        }
        "help" | "?" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Exit),
        _ => Err(BookError::Parse(format!("unknown command '{}'", verb))),
    }
}

fn usage(form: &str) -> BookError {
    BookError::Parse(format!("usage: {}", form))
}

fn no_args(args: &[&str], form: &str, command: Command) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(usage(form))
    }
}

fn single_phone(args: &[&str], form: &str) -> Result<String> {
    match args {
        [phone] => Ok(phone.to_string()),
        _ => Err(usage(form)),
    }
}

fn to_owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

// =============================================================================
// Rendering
// =============================================================================

/// Write the numbered menu
pub fn write_menu<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "\nMenu:")?;
    for choice in MenuChoice::ALL {
        writeln!(writer, "{}. {}", choice as u8, choice.label())?;
    }
    Ok(())
}

/// Render a successful response
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    match response {
        Response::Added(_) => writeln!(writer, "Contact added successfully.")?,
        Response::Contacts(contacts) => {
            if contacts.is_empty() {
                writeln!(writer, "No contacts found.")?;
            } else {
                writeln!(writer, "All Contacts:")?;
                for contact in contacts {
                    writeln!(writer, "{}", contact)?;
                }
            }
        }
        Response::Found(contact) => writeln!(writer, "Contact found: {}", contact)?,
        Response::Removed(contact) => {
            writeln!(writer, "Contact deleted successfully: {}", contact)?
        }
        Response::Restored(contact) => writeln!(
            writer,
            "Undo successful! Contact restored: {}, {}",
            contact.name(),
            contact.phone()
        )?,
        Response::RecentlyDeleted(contacts) => {
            if contacts.is_empty() {
                writeln!(writer, "No recently deleted contacts.")?;
            } else {
                for contact in contacts {
                    writeln!(writer, "{}", contact)?;
                }
            }
        }
        Response::Queued { pending } => {
            writeln!(writer, "Queued for batch search ({} pending).", pending)?
        }
        Response::Pending(phones) => {
            if phones.is_empty() {
                writeln!(writer, "Queue is empty!")?;
            } else {
                for phone in phones {
                    writeln!(writer, "Phone: {}", phone)?;
                }
            }
        }
        Response::BatchResults(results) => {
            if results.is_empty() {
                writeln!(writer, "Queue is empty! No contacts to search.")?;
            }
            for lookup in results {
                match lookup {
                    Lookup::Found(contact) => writeln!(writer, "Contact found: {}", contact)?,
                    Lookup::NotFound(phone) => writeln!(writer, "Contact not found: {}", phone)?,
                }
            }
        }
        Response::NotImplemented => writeln!(writer, "Feature not implemented.")?,
        Response::Help => writeln!(writer, "{}", HELP)?,
        Response::Goodbye => {
            writeln!(writer, "Exiting Contact Management System. Goodbye!")?
        }
    }
    Ok(())
}

/// Render a failed operation
pub fn write_error<W: Write>(writer: &mut W, error: &BookError) -> Result<()> {
    match error {
        BookError::DuplicateKey(phone) => {
            writeln!(writer, "Duplicate contact ignored: {}", phone)?
        }
        BookError::NotFound(_) => writeln!(writer, "Contact not found.")?,
        BookError::NothingToUndo => {
            writeln!(writer, "No recently deleted contacts to undo.")?
        }
        BookError::Rejected(contact) => writeln!(
            writer,
            "Undo rejected: phone {} is already in use. Discarded {}",
            contact.phone(),
            contact.name()
        )?,
        BookError::Parse(message) => {
            writeln!(writer, "Invalid choice. Please try again. ({})", message)?
        }
        other => writeln!(writer, "Error: {}", other)?,
    }
    Ok(())
}
