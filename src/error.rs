//! Error types for interscan

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a scan before or during rendering.
///
/// Unreadable directories are deliberately absent: the walker absorbs them
/// according to its [`ListingMode`](crate::tree::ListingMode).
#[derive(Debug, Error)]
pub enum Error {
    /// The input line was empty after trimming.
    #[error("No input provided.")]
    EmptyInput,

    /// The sanitized path is empty, missing, or not a directory.
    #[error("Invalid or inaccessible directory path: '{}'", .0.display())]
    InvalidPath(PathBuf),

    /// Recursion went deeper than the configured limit (usually a symlink cycle).
    #[error("maximum depth of {limit} exceeded at '{}'", path.display())]
    DepthLimitExceeded { path: PathBuf, limit: usize },

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Message for errors that end the program normally, before any tree
    /// output. `None` for genuine failures.
    pub fn abort_message(&self) -> Option<&'static str> {
        match self {
            Error::EmptyInput => Some("No input provided. Exiting."),
            Error::InvalidPath(_) => Some("Invalid or inaccessible directory path. Exiting."),
            Error::DepthLimitExceeded { .. } | Error::Io(_) => None,
        }
    }
}
