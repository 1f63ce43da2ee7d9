//! Unified quote store
//!
//! The `QuoteStore` owns the in-memory quote collection, the derived
//! category index, and the persisted selected-category filter. Every
//! mutation persists the full collection before returning, so the
//! on-disk state always matches memory.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = QuoteStore::open()?;
//!
//! store.add("Stay hungry.", "Motivation")?;
//!
//! if let Some(quote) = store.random_quote(Some("Motivation")) {
//!     println!("{}", quote.text);
//! }
//! ```

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::categories::CategoryIndex;
use crate::config::Config;
use crate::merge;
use crate::models::Quote;
use crate::storage::QuotePersistence;

/// Result of adding a quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// The stored (trimmed) quote
    pub quote: Quote,
    /// Whether the quote introduced a previously unseen category
    pub new_category: bool,
}

/// Counts from applying a merge to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Incoming records appended
    pub added: usize,
    /// Incoming records that replaced a local record
    pub conflicts: usize,
}

/// Counts from an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Records appended to the store
    pub imported: usize,
    /// Records skipped because text or category was missing
    pub skipped: usize,
}

/// A record from an import file
///
/// Both fields are optional so a partially-specified record can be
/// recognized and skipped rather than failing the whole import.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRecord {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Unified storage interface for qotd
pub struct QuoteStore {
    /// The in-memory quote collection, in insertion order
    quotes: Vec<Quote>,
    /// Derived category index
    categories: CategoryIndex,
    /// Persisted category filter, `None` for "all categories"
    selected_category: Option<String>,
    /// Persistence handler
    persistence: QuotePersistence,
    /// Configuration
    config: Config,
}

impl QuoteStore {
    /// Open the store using the default configuration
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Self::open_with_config(config)
    }

    /// Open the store with a specific configuration
    ///
    /// Loads the persisted collection (or the seed defaults when none
    /// exists), derives the category index, and restores the selected
    /// category filter.
    pub fn open_with_config(config: Config) -> Result<Self> {
        let persistence = QuotePersistence::new(config.clone());

        let quotes = persistence.load();
        let categories = CategoryIndex::derive(&quotes);
        let selected_category = persistence.load_selected_category();

        Ok(Self {
            quotes,
            categories,
            selected_category,
            persistence,
            config,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All quotes in insertion order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of stored quotes
    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }

    /// The category index
    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    // ==================== Quote Operations ====================

    /// Add a quote from user input
    ///
    /// Validates and trims both fields; empty input is rejected and the
    /// store is left unchanged. On success the collection is persisted
    /// and the outcome reports whether the category was new.
    pub fn add(&mut self, text: &str, category: &str) -> Result<AddOutcome> {
        let quote = Quote::parse(text, category)?;

        let new_category = self.categories.extend_if_new(&quote.category);
        self.quotes.push(quote.clone());
        self.save().context("Failed to persist quotes after add")?;

        Ok(AddOutcome {
            quote,
            new_category,
        })
    }

    /// Quotes matching a category filter
    ///
    /// `None` means no filter. Matching is exact, like everything else
    /// about category labels.
    pub fn filtered(&self, category: Option<&str>) -> Vec<&Quote> {
        match category {
            Some(c) => self.quotes.iter().filter(|q| q.category == c).collect(),
            None => self.quotes.iter().collect(),
        }
    }

    /// A uniformly random quote, optionally filtered by category
    ///
    /// `None` when no quote matches the filter.
    pub fn random_quote(&self, category: Option<&str>) -> Option<&Quote> {
        let candidates = self.filtered(category);
        candidates.choose(&mut rand::thread_rng()).copied()
    }

    // ==================== Category Filter ====================

    /// The persisted category filter, `None` for "all categories"
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Set and persist the category filter
    pub fn set_selected_category(&mut self, category: Option<String>) -> Result<()> {
        self.persistence
            .save_selected_category(category.as_deref())
            .context("Failed to persist selected category")?;
        self.selected_category = category;
        Ok(())
    }

    // ==================== Merge ====================

    /// Reconcile an incoming batch into the store
    ///
    /// Runs the merge engine (incoming wins on text collision), swaps
    /// in the merged collection, extends the category index with every
    /// incoming category, and persists. Returns the merge counts.
    pub fn apply_merge(&mut self, incoming: &[Quote]) -> Result<MergeOutcome> {
        let result = merge::merge(&self.quotes, incoming);

        for quote in incoming {
            self.categories.extend_if_new(&quote.category);
        }
        self.quotes = result.merged;
        self.save().context("Failed to persist quotes after merge")?;

        Ok(MergeOutcome {
            added: result.added,
            conflicts: result.conflicts,
        })
    }

    // ==================== Import / Export ====================

    /// Append records from an import file
    ///
    /// Records missing text or category (or carrying only whitespace)
    /// are silently skipped; valid records are appended in file order,
    /// not merged. Persists once after the batch.
    pub fn import(&mut self, records: Vec<ImportRecord>) -> Result<ImportOutcome> {
        let mut outcome = ImportOutcome::default();

        for record in records {
            let (Some(text), Some(category)) = (record.text, record.category) else {
                outcome.skipped += 1;
                continue;
            };
            match Quote::parse(&text, &category) {
                Ok(quote) => {
                    self.categories.extend_if_new(&quote.category);
                    self.quotes.push(quote);
                    outcome.imported += 1;
                }
                Err(_) => outcome.skipped += 1,
            }
        }

        if outcome.imported > 0 {
            self.save()
                .context("Failed to persist quotes after import")?;
        }

        Ok(outcome)
    }

    /// The full collection as pretty-printed JSON
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.quotes).context("Failed to serialize quotes")
    }

    // ==================== Persistence ====================

    /// Persist the current collection
    pub fn save(&self) -> Result<()> {
        self.persistence.save(&self.quotes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_quotes;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    fn test_store(temp_dir: &TempDir) -> QuoteStore {
        QuoteStore::open_with_config(test_config(temp_dir)).unwrap()
    }

    #[test]
    fn test_open_seeds_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        assert_eq!(store.quotes(), default_quotes());
        assert_eq!(store.categories().len(), 4);
        assert!(store.categories().contains("Life"));
    }

    #[test]
    fn test_add_persists_and_extends_index() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = QuoteStore::open_with_config(config.clone()).unwrap();
            let outcome = store.add("Fall seven times, stand up eight.", "Resilience").unwrap();
            assert!(outcome.new_category);

            // Same category again is not new
            let outcome = store.add("Storms make trees take deeper roots.", "Resilience").unwrap();
            assert!(!outcome.new_category);
        }

        // Reopen - additions survive
        let store = QuoteStore::open_with_config(config).unwrap();
        assert_eq!(store.quote_count(), 6);
        assert!(store.categories().contains("Resilience"));
    }

    #[test]
    fn test_add_rejects_empty_input() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        assert!(store.add("  ", "Life").is_err());
        assert!(store.add("Something", "").is_err());
        // Failed adds leave the store untouched
        assert_eq!(store.quotes(), default_quotes());
    }

    #[test]
    fn test_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let life = store.filtered(Some("Life"));
        assert_eq!(life.len(), 1);
        assert_eq!(life[0].category, "Life");

        assert_eq!(store.filtered(None).len(), 4);
        assert!(store.filtered(Some("Nope")).is_empty());
    }

    #[test]
    fn test_random_quote_honors_filter() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let quote = store.random_quote(Some("Happiness")).unwrap();
        assert_eq!(quote.category, "Happiness");

        assert!(store.random_quote(Some("Nope")).is_none());
        assert!(store.random_quote(None).is_some());
    }

    #[test]
    fn test_selected_category_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = QuoteStore::open_with_config(config.clone()).unwrap();
            assert!(store.selected_category().is_none());
            store.set_selected_category(Some("Life".to_string())).unwrap();
        }

        let store = QuoteStore::open_with_config(config).unwrap();
        assert_eq!(store.selected_category(), Some("Life"));
    }

    #[test]
    fn test_apply_merge_server_wins() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let incoming = vec![
            Quote::new("Happiness depends upon ourselves.", "Server"),
            Quote::new("Brand new from the server.", "Server"),
        ];

        let outcome = store.apply_merge(&incoming).unwrap();
        assert_eq!(outcome.conflicts, 1);
        assert_eq!(outcome.added, 1);

        // Replacement kept its positional slot
        assert_eq!(store.quotes()[3].category, "Server");
        assert_eq!(store.quote_count(), 5);
    }

    #[test]
    fn test_apply_merge_updates_category_index() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        store
            .apply_merge(&[Quote::new("From afar.", "Server")])
            .unwrap();

        // Superset invariant: every merged category is indexed
        for quote in store.quotes() {
            assert!(store.categories().contains(&quote.category));
        }
        assert!(store.categories().contains("Server"));
    }

    #[test]
    fn test_apply_merge_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = QuoteStore::open_with_config(config.clone()).unwrap();
            store
                .apply_merge(&[Quote::new("From afar.", "Server")])
                .unwrap();
        }

        let store = QuoteStore::open_with_config(config).unwrap();
        assert_eq!(store.quote_count(), 5);
        assert!(store.categories().contains("Server"));
    }

    #[test]
    fn test_import_skips_partial_records() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let records: Vec<ImportRecord> = serde_json::from_str(
            r#"[{"text":"Q1"},{"text":"Q2","category":"C"}]"#,
        )
        .unwrap();

        let outcome = store.import(records).unwrap();
        assert_eq!(outcome.imported, 1);
        assert_eq!(outcome.skipped, 1);

        let last = store.quotes().last().unwrap();
        assert_eq!(last.text, "Q2");
        assert_eq!(last.category, "C");
        assert!(store.categories().contains("C"));
    }

    #[test]
    fn test_import_appends_rather_than_merges() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        // Same text as an existing quote still appends
        let records: Vec<ImportRecord> = serde_json::from_str(
            r#"[{"text":"Happiness depends upon ourselves.","category":"Imported"}]"#,
        )
        .unwrap();

        let outcome = store.import(records).unwrap();
        assert_eq!(outcome.imported, 1);
        assert_eq!(store.quote_count(), 5);
    }

    #[test]
    fn test_export_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let json = store.export_json().unwrap();
        let parsed: Vec<Quote> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, store.quotes());
    }
}
