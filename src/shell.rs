//! Interactive Shell
//!
//! Line-oriented menu loop driving a `ContactBook`. Generic over its input
//! and output so it can run on stdin/stdout or on in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::book::ContactBook;
use crate::error::Result;
use crate::protocol::{
    parse_command, parse_menu_choice, write_error, write_menu, write_response, Command,
    MenuChoice, Response,
};

const BANNER: &str = "*********** Contact Management System ***********";

/// A shell session over one reader/writer pair
pub struct Shell<R, W> {
    /// Source of command lines
    reader: R,

    /// Destination for prompts and results
    writer: W,

    /// The book every command runs against
    book: ContactBook,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a new shell session
    pub fn new(book: ContactBook, reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            book,
        }
    }

    /// Run the session (blocking until `exit` or end of input)
    ///
    /// Failed operations are reported to the writer and the loop goes on.
    /// Only I/O errors end the session early.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.writer, "{}", BANNER)?;

        loop {
            if self.book.config().show_menu {
                write_menu(&mut self.writer)?;
            }

            let prompt = self.book.config().prompt.clone();
            let line = match self.ask(&prompt)? {
                Some(line) => line,
                None => {
                    debug!("end of input, leaving shell");
                    return Ok(());
                }
            };

            if line.is_empty() {
                continue;
            }

            let command = match parse_menu_choice(&line) {
                Some(choice) => match self.prompt_for(choice)? {
                    Some(command) => Ok(command),
                    None => return Ok(()),
                },
                None => parse_command(&line),
            };

            let command = match command {
                Ok(command) => command,
                Err(e) => {
                    write_error(&mut self.writer, &e)?;
                    continue;
                }
            };

            trace!(?command, "executing");

            match self.book.execute(command) {
                Ok(response) => {
                    write_response(&mut self.writer, &response)?;
                    if response == Response::Goodbye {
                        self.writer.flush()?;
                        return Ok(());
                    }
                }
                Err(e) => write_error(&mut self.writer, &e)?,
            }
        }
    }

    /// Collect the arguments a menu choice needs
    ///
    /// Returns `None` if input ends before the command is complete.
    fn prompt_for(&mut self, choice: MenuChoice) -> Result<Option<Command>> {
        let command = match choice {
            MenuChoice::Add => {
                let Some(name) = self.ask("Enter Name: ")? else {
                    return Ok(None);
                };
                let Some(phone) = self.ask("Enter Phone Number: ")? else {
                    return Ok(None);
                };
                Command::Add { name, phone }
            }
            MenuChoice::Display => Command::List,
            MenuChoice::Search => match self.ask("Enter Phone Number to Search: ")? {
                Some(phone) => Command::Find { phone },
                None => return Ok(None),
            },
            MenuChoice::Delete => match self.ask("Enter Phone Number to Delete: ")? {
                Some(phone) => Command::Delete { phone },
                None => return Ok(None),
            },
            MenuChoice::Undo => Command::Undo,
            MenuChoice::BatchSearch => Command::Batch {
                phones: self.collect_batch()?,
            },
            MenuChoice::SearchByName => Command::SearchByName {
                name: String::new(),
            },
            MenuChoice::Exit => Command::Exit,
        };
        Ok(Some(command))
    }

    /// Read phones until the sentinel word (or end of input)
    fn collect_batch(&mut self) -> Result<Vec<String>> {
        let sentinel = self.book.config().batch_sentinel.clone();
        writeln!(
            self.writer,
            "Enter phone numbers to search (type '{}' to finish):",
            sentinel
        )?;

        let mut phones = Vec::new();
        while let Some(line) = self.ask("Phone Number: ")? {
            for word in line.split_whitespace() {
                if word == sentinel {
                    return Ok(phones);
                }
                phones.push(word.to_string());
            }
        }
        Ok(phones)
    }

    /// Write a prompt and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// The book this session runs against
    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// End the session, returning the book
    pub fn into_book(self) -> ContactBook {
        self.book
    }
}
