//! Error types for the watch-list library.
//!
//! Store and selection failures are typed so the UI can report them and
//! keep the menu running. The binary wraps terminal I/O in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for watch-list operations
#[derive(Error, Debug)]
pub enum WatchlistError {
    /// Reading or writing a store file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store exists but does not hold a JSON array of titles
    #[error("{} is corrupt and was left untouched: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a list failed
    #[error("JSON error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A 1-based position outside the list
    #[error("Invalid selection: {position} is not between 1 and {len}")]
    InvalidSelection { position: usize, len: usize },
}

/// Result type alias for watch-list operations
pub type Result<T> = std::result::Result<T, WatchlistError>;

impl WatchlistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error comes from user input rather than storage
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Self::InvalidSelection { .. })
    }
}
