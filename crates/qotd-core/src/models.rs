//! Data models for qotd
//!
//! Defines the `Quote` record, the atomic unit of stored data.
//! A quote has no identifier beyond its text: exact text equality is
//! the matching key during merges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from quote validation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuoteError {
    /// Quote text was empty after trimming
    #[error("Quote text cannot be empty")]
    EmptyText,
    /// Category was empty after trimming
    #[error("Quote category cannot be empty")]
    EmptyCategory,
}

/// A stored quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    /// The quote text, also its natural key during merges
    pub text: String,
    /// Category label for filtering
    pub category: String,
}

impl Quote {
    /// Create a quote without validation
    ///
    /// Used for records whose shape is already trusted (persisted data,
    /// mapped server records). User input goes through [`Quote::parse`].
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Parse user input into a quote
    ///
    /// Trims both fields and rejects empty values. The returned quote
    /// stores the trimmed text.
    pub fn parse(text: &str, category: &str) -> Result<Self, QuoteError> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(QuoteError::EmptyText);
        }
        if category.is_empty() {
            return Err(QuoteError::EmptyCategory);
        }

        Ok(Self::new(text, category))
    }
}

/// The seed quotes used when no persisted collection exists
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only way to do great work is to love what you do.",
            "Motivation",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
        Quote::new(
            "Success is not final, failure is not fatal: It is the courage to continue that counts.",
            "Success",
        ),
        Quote::new("Happiness depends upon ourselves.", "Happiness"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_input() {
        let quote = Quote::parse("  Stay hungry.  ", " Motivation ").unwrap();
        assert_eq!(quote.text, "Stay hungry.");
        assert_eq!(quote.category, "Motivation");
    }

    #[test]
    fn test_parse_rejects_empty_text() {
        assert_eq!(Quote::parse("   ", "Life"), Err(QuoteError::EmptyText));
        assert_eq!(Quote::parse("", "Life"), Err(QuoteError::EmptyText));
    }

    #[test]
    fn test_parse_rejects_empty_category() {
        assert_eq!(
            Quote::parse("Something", "  "),
            Err(QuoteError::EmptyCategory)
        );
    }

    #[test]
    fn test_default_quotes() {
        let quotes = default_quotes();
        assert_eq!(quotes.len(), 4);
        assert_eq!(quotes[1].category, "Life");
    }

    #[test]
    fn test_quote_serialization() {
        let quote = Quote::new("Happiness depends upon ourselves.", "Happiness");
        let json = serde_json::to_string(&quote).unwrap();
        let deserialized: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(quote, deserialized);
    }
}
