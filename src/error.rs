//! Error types for unmark library.

use std::io;
use thiserror::Error;

/// Result type alias for unmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for unmark library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The Markdown source could not be parsed into a document tree.
    #[error("Markdown parse error: {0}")]
    Parse(String),
}

// Note: the markdown crate reports parse failures as message::Message values
impl From<markdown::message::Message> for Error {
    fn from(err: markdown::message::Message) -> Self {
        Error::Parse(err.to_string())
    }
}
