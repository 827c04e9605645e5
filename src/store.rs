//! Persistence adapter for the two watch-list stores.
//!
//! Each store is a pretty-printed JSON array of titles. A load always reads
//! the whole file and a save always replaces it; there is no merging.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::{Result, WatchlistError};

/// Which of the two lists an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unseen,
    Seen,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Unseen => "unseen",
            ListKind::Seen => "seen",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File-backed store for the unseen and seen lists.
#[derive(Debug, Clone)]
pub struct MovieStore {
    config: StoreConfig,
}

impl MovieStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Path of the file backing `kind`.
    pub fn path(&self, kind: ListKind) -> &Path {
        match kind {
            ListKind::Unseen => &self.config.unseen,
            ListKind::Seen => &self.config.seen,
        }
    }

    /// Load a whole list.
    ///
    /// A missing or blank file is an empty list, and so is a literal
    /// `null`. Anything else that is not an array of strings is reported
    /// as [`WatchlistError::CorruptStore`] so callers never overwrite it.
    pub fn load(&self, kind: ListKind) -> Result<Vec<String>> {
        let path = self.path(kind);
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} store {:?} not found, starting empty", kind, path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(WatchlistError::io(path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let titles: Option<Vec<String>> =
            serde_json::from_slice(&bytes).map_err(|source| {
                warn!("{} store {:?} is not a list of titles: {}", kind, path, source);
                WatchlistError::CorruptStore {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        let titles = titles.unwrap_or_default();
        debug!("Loaded {} titles from {:?}", titles.len(), path);
        Ok(titles)
    }

    /// Replace the contents of a list.
    pub fn save(&self, kind: ListKind, titles: &[String]) -> Result<()> {
        let path = self.path(kind);
        let json = to_json(titles)?;
        fs::write(path, json).map_err(|e| WatchlistError::io(path, e))?;
        debug!("Saved {} titles to {:?}", titles.len(), path);
        Ok(())
    }
}

/// JSON with four-space indentation and no trailing newline.
fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
