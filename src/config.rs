// Store configuration: where the two watch-list files live. Built once at
// startup and handed to the persistence adapter, so nothing below `main`
// reads paths from globals.

use std::path::{Path, PathBuf};

/// File name of the unseen store
pub const UNSEEN_FILE: &str = "unseen_movies.json";
/// File name of the seen store
pub const SEEN_FILE: &str = "seen_movies.json";

/// Locations of the unseen and seen stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub unseen: PathBuf,
    pub seen: PathBuf,
}

impl Default for StoreConfig {
    /// Both files relative to the working directory.
    fn default() -> Self {
        Self {
            unseen: PathBuf::from(UNSEEN_FILE),
            seen: PathBuf::from(SEEN_FILE),
        }
    }
}

impl StoreConfig {
    /// Both default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            unseen: dir.join(UNSEEN_FILE),
            seen: dir.join(SEEN_FILE),
        }
    }
}
