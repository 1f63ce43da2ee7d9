//! Category command handlers

use anyhow::Result;

use qotd_core::QuoteStore;

use crate::output::Output;

/// List all categories
pub fn list(store: &QuoteStore, output: &Output) -> Result<()> {
    let categories: Vec<&str> = store.categories().iter().collect();
    output.print_categories(&categories);
    Ok(())
}

/// Set the persisted category filter
///
/// `all` clears the filter. Setting a category no stored quote uses is
/// allowed but warned about, since `qotd show` will find nothing.
pub fn set_filter(store: &mut QuoteStore, category: String, output: &Output) -> Result<()> {
    if category.eq_ignore_ascii_case("all") {
        store.set_selected_category(None)?;
        output.success("Cleared category filter");
        return Ok(());
    }

    if !store.categories().contains(&category) {
        output.warn(&format!("No stored quote has category '{}'", category));
    }

    store.set_selected_category(Some(category.clone()))?;
    output.success(&format!("Filtering by '{}'", category));

    Ok(())
}
