//! Category index
//!
//! A derived set of the distinct category labels across the stored
//! quotes. The index is never persisted on its own; it is rebuilt from
//! the quote list at startup and extended incrementally as quotes are
//! added or merged in.

use std::collections::BTreeSet;

use crate::models::Quote;

/// Distinct category labels over a quote collection
///
/// Iteration order is alphabetical, which keeps listings stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex(BTreeSet<String>);

impl CategoryIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the index from a quote collection
    pub fn derive(quotes: &[Quote]) -> Self {
        Self(quotes.iter().map(|q| q.category.clone()).collect())
    }

    /// Add a category if absent
    ///
    /// Returns `true` when the category was newly added, which callers
    /// use to decide whether a category selector needs rebuilding.
    pub fn extend_if_new(&mut self, category: &str) -> bool {
        self.0.insert(category.to_string())
    }

    /// Check whether a category is present
    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }

    /// Iterate categories in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
