//! Quote collection persistence
//!
//! Handles saving and loading the quote collection as a pretty-printed
//! JSON array. Uses atomic writes (write to temp file, then rename) to
//! prevent corruption.
//!
//! Storage location: `~/.local/share/qotd/` (configurable via `Config`)
//!
//! Files:
//! - `quotes.json` - The quote collection
//! - `selected_category` - The last chosen category filter
//!
//! Loading never fails: a missing or unparsable quotes file yields the
//! default seed collection, so the application always starts in a
//! usable state.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::config::Config;
use crate::models::{default_quotes, Quote};
use crate::storage::error::{StorageError, StorageResult};

/// Persistence layer for the quote collection
pub struct QuotePersistence {
    config: Config,
}

impl QuotePersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if a quote collection exists on disk
    pub fn exists(&self) -> bool {
        self.config.quotes_path().exists()
    }

    /// Load the quote collection
    ///
    /// Returns the default seed quotes when the file is missing or
    /// cannot be parsed; parse failures are logged and swallowed.
    pub fn load(&self) -> Vec<Quote> {
        let path = self.config.quotes_path();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                // A missing file is a fresh install; anything else
                // (permissions, I/O) deserves a trace before falling back
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Ignoring unreadable quotes file {:?}: {}", path, e);
                }
                return default_quotes();
            }
        };

        match serde_json::from_str(&content) {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("Ignoring unparsable quotes file {:?}: {}", path, e);
                default_quotes()
            }
        }
    }

    /// Save the full quote collection, overwriting prior content
    pub fn save(&self, quotes: &[Quote]) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(quotes)?;
        atomic_write(&self.config.quotes_path(), json.as_bytes())
    }

    /// Load the persisted selected-category filter
    ///
    /// `None` when no filter has been saved. An empty saved value also
    /// maps to `None` ("all categories").
    pub fn load_selected_category(&self) -> Option<String> {
        let content = fs::read_to_string(self.config.selected_category_path()).ok()?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Save the selected-category filter
    ///
    /// Saving `None` clears the filter.
    pub fn save_selected_category(&self, category: Option<&str>) -> StorageResult<()> {
        atomic_write(
            &self.config.selected_category_path(),
            category.unwrap_or("").as_bytes(),
        )
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| StorageError::from_io(e, path.to_path_buf()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = QuotePersistence::new(test_config(&temp_dir));

        assert!(!persistence.exists());
        assert_eq!(persistence.load(), default_quotes());
    }

    #[test]
    fn test_load_unreadable_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        // A directory at the quotes path makes the read fail with
        // something other than NotFound
        fs::create_dir(config.quotes_path()).unwrap();

        let persistence = QuotePersistence::new(config);
        assert_eq!(persistence.load(), default_quotes());
    }

    #[test]
    fn test_load_malformed_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        fs::write(config.quotes_path(), "{not valid json").unwrap();

        let persistence = QuotePersistence::new(config);
        assert_eq!(persistence.load(), default_quotes());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = QuotePersistence::new(test_config(&temp_dir));

        let quotes = vec![
            Quote::new("First", "One"),
            Quote::new("Second", "Two"),
        ];
        persistence.save(&quotes).unwrap();
        assert!(persistence.exists());

        assert_eq!(persistence.load(), quotes);
    }

    #[test]
    fn test_save_overwrites_prior_content() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = QuotePersistence::new(test_config(&temp_dir));

        persistence.save(&[Quote::new("Old", "X")]).unwrap();
        persistence.save(&[Quote::new("New", "Y")]).unwrap();

        let loaded = persistence.load();
        assert_eq!(loaded, vec![Quote::new("New", "Y")]);
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = QuotePersistence::new(test_config(&temp_dir));

        persistence.save(&[Quote::new("A", "X")]).unwrap();

        let raw = fs::read_to_string(persistence.config().quotes_path()).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("\"text\": \"A\""));
    }

    #[test]
    fn test_selected_category_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = QuotePersistence::new(test_config(&temp_dir));

        assert!(persistence.load_selected_category().is_none());

        persistence.save_selected_category(Some("Life")).unwrap();
        assert_eq!(
            persistence.load_selected_category(),
            Some("Life".to_string())
        );

        persistence.save_selected_category(None).unwrap();
        assert!(persistence.load_selected_category().is_none());
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir
            .path()
            .join("a")
            .join("b")
            .join("c")
            .join("file.txt");

        atomic_write(&nested_path, b"test data").unwrap();

        assert!(nested_path.exists());
        let content = fs::read_to_string(&nested_path).unwrap();
        assert_eq!(content, "test data");
    }

    #[test]
    fn test_empty_collection_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = QuotePersistence::new(test_config(&temp_dir));

        persistence.save(&[]).unwrap();
        // An existing empty file is a valid (empty) collection, not "absent"
        assert_eq!(persistence.load(), Vec::<Quote>::new());
    }
}
