/// Error types for dialbook
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for dialbook operations
#[derive(Error, Debug)]
pub enum BookError {
    /// No record stored under the requested name
    #[error("contact not found: {0}")]
    ContactNotFound(String),

    /// Input did not split into the expected name/phone pair
    #[error("expected a name and a phone number, got {0} token(s)")]
    MalformedInput(usize),

    /// Command that needs a contact name got nothing at all
    #[error("no contact name given")]
    MissingName,

    /// I/O errors (console reads, flushing, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dialbook operations
pub type Result<T> = std::result::Result<T, BookError>;

/// Convert BookError to the message shown at the prompt
///
/// Handler errors never escape the command loop; each one is flattened
/// into one of these fixed replies.
impl BookError {
    pub fn user_message(&self) -> String {
        match self {
            BookError::ContactNotFound(_) => "Contact not found".to_string(),
            BookError::MalformedInput(_) => {
                "Enter name and phone number separated by a space".to_string()
            }
            BookError::MissingName => "Enter a contact name".to_string(),
            BookError::Io(e) => {
                format!("Console error. Details: {}", e)
            }
        }
    }
}
