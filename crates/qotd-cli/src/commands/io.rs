//! Import and export command handlers

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use qotd_core::{ImportRecord, QuoteStore};

use crate::output::Output;

/// Import quotes from a JSON file
///
/// The file must hold a top-level array; a file that cannot be read or
/// parsed aborts the import. Individual records missing text or
/// category are skipped silently, per-record errors never abort the
/// batch.
pub fn import(store: &mut QuoteStore, file: PathBuf, output: &Output) -> Result<()> {
    let content =
        fs::read_to_string(&file).with_context(|| format!("Failed to read {:?}", file))?;

    let records: Vec<ImportRecord> = serde_json::from_str(&content)
        .with_context(|| format!("{:?} is not a JSON array of quotes", file))?;

    let outcome = store.import(records).context("Failed to import quotes")?;

    output.success(&format!(
        "Imported {} quote(s), skipped {}",
        outcome.imported, outcome.skipped
    ));

    Ok(())
}

/// Export the full collection to a JSON file
pub fn export(store: &QuoteStore, file: PathBuf, output: &Output) -> Result<()> {
    let json = store.export_json()?;

    fs::write(&file, json).with_context(|| format!("Failed to write {:?}", file))?;

    output.success(&format!(
        "Exported {} quote(s) to {}",
        store.quote_count(),
        file.display()
    ));

    Ok(())
}
