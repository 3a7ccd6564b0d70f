/// The interactive session
///
/// Owns the address book and the read-eval-print loop. Every line of
/// input becomes exactly one printed reply; handler errors are flattened
/// to their fixed user messages and the loop keeps going. Only console
/// I/O failures end the session early.

use crate::book::AddressBook;
use crate::error::Result;
use crate::repl::command::Command;
use crate::repl::handlers;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const PROMPT: &str = "Enter command: ";

/// What one dispatched line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this and keep looping
    Reply(String),
    /// Print this and stop
    Exit(String),
}

/// One user's session over one address book
#[derive(Debug, Default)]
pub struct Session {
    book: AddressBook,
}

impl Session {
    /// Start with an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing book (handy for tests and future callers)
    pub fn with_book(book: AddressBook) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Route one line of input to its handler and flatten the result
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        let command = Command::parse(line);
        log::debug!("dispatching {:?}", command);

        let result = match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add(args) => handlers::add_contact(&mut self.book, &args),
            Command::Change(args) => handlers::change_contact(&mut self.book, &args),
            Command::Phone(args) => handlers::get_phone(&self.book, &args),
            Command::ShowAll => Ok(handlers::show_all(&self.book)),
            Command::Exit => return Outcome::Exit("Good bye!".to_string()),
            Command::Unknown => Ok("Unknown command".to_string()),
        };

        match result {
            Ok(reply) => Outcome::Reply(reply),
            Err(e) => {
                log::debug!("handler error: {}", e);
                Outcome::Reply(e.user_message())
            }
        }
    }

    /// Run the prompt loop until an exit command or end of input
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            // Prompt on the same line, so flush before blocking on input.
            print!("{}", PROMPT);
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                // stdin closed. Leave quietly.
                log::debug!("stdin closed, ending session");
                break;
            };

            match self.dispatch(&line) {
                Outcome::Reply(reply) => println!("{}", reply),
                Outcome::Exit(farewell) => {
                    println!("{}", farewell);
                    break;
                }
            }
        }

        Ok(())
    }
}
