//! Session-scoped last-viewed cache
//!
//! Remembers the most recently displayed quote so it can be restored
//! on the next invocation. Unlike the quote collection this is
//! ephemeral state: it lives under the OS temp directory, which is
//! cleared on reboot, and can be cleared explicitly.

use std::fs;
use std::path::PathBuf;

use crate::models::Quote;
use crate::storage::error::{StorageError, StorageResult};

/// File name under the temp directory
const SESSION_FILE: &str = "qotd-last-viewed.json";

/// Cache for the last displayed quote
pub struct SessionCache {
    path: PathBuf,
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCache {
    /// Create a cache at the default session location
    pub fn new() -> Self {
        Self {
            path: std::env::temp_dir().join(SESSION_FILE),
        }
    }

    /// Create a cache at a specific path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the last-viewed quote, if any
    ///
    /// Missing or corrupt cache files read as "nothing viewed yet".
    pub fn load(&self) -> Option<Quote> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Record the last-viewed quote
    pub fn store(&self, quote: &Quote) -> StorageResult<()> {
        let json = serde_json::to_string(quote)?;
        fs::write(&self.path, json).map_err(|e| StorageError::from_io(e, self.path.clone()))
    }

    /// Clear the cache
    pub fn clear(&self) -> StorageResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from_io(e, self.path.clone())),
        }
    }
}
