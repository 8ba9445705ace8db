//! Error types for loading word lists.

use std::io;
use std::result;
use thiserror::Error;

/// Result type alias for word list operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while reading a word list.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("missing word count")]
    MissingCount,

    #[error("invalid word count: {0:?}")]
    InvalidCount(String),

    #[error("expected {expected} words, found {found}")]
    WordCountMismatch { expected: usize, found: usize },
}
