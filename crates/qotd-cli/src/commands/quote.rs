//! Quote command handlers

use anyhow::{Context, Result};

use qotd_core::{Quote, QuoteStore, SessionCache};

use crate::output::Output;

/// Show a quote
///
/// Picks a random quote by default, recording it in the session cache.
/// `--last` replays the cached quote instead of picking a new one. An
/// explicit `--category` flag overrides the persisted filter; otherwise
/// the filter set by `qotd filter` applies.
pub fn show(store: &QuoteStore, category: Option<String>, last: bool, output: &Output) -> Result<()> {
    let cache = SessionCache::new();

    let Some(quote) = resolve_quote(store, &cache, category.as_deref(), last) else {
        if last {
            output.message("No quote viewed yet this session.");
        } else {
            output.message("No quotes available for this category.");
        }
        return Ok(());
    };

    output.print_quote(&quote);

    // Remember what was shown; losing this is not worth failing the command
    if !last {
        if let Err(e) = cache.store(&quote) {
            tracing::debug!("Could not record last-viewed quote: {}", e);
        }
    }

    Ok(())
}

/// Pick the quote to display
///
/// `last` restores the session cache entry; otherwise a random quote is
/// drawn under the effective category filter.
fn resolve_quote(
    store: &QuoteStore,
    cache: &SessionCache,
    category: Option<&str>,
    last: bool,
) -> Option<Quote> {
    if last {
        return cache.load();
    }

    let filter = category
        .map(String::from)
        .or_else(|| store.selected_category().map(String::from));
    store.random_quote(filter.as_deref()).cloned()
}

/// Add a new quote
pub fn add(store: &mut QuoteStore, text: String, category: String, output: &Output) -> Result<()> {
    let outcome = store
        .add(&text, &category)
        .context("Failed to add quote")?;

    output.success(&format!("Added quote under '{}'", outcome.quote.category));
    if outcome.new_category {
        output.message(&format!("New category: {}", outcome.quote.category));
    }

    Ok(())
}

/// List quotes, optionally filtered by category
pub fn list(store: &QuoteStore, category: Option<String>, output: &Output) -> Result<()> {
    let quotes = store.filtered(category.as_deref());
    output.print_quotes(&quotes);
    Ok(())
}
