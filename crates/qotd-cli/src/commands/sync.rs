//! Sync command handler

use anyhow::{bail, Result};

use qotd_core::sync::{SyncClient, SyncState};
use qotd_core::QuoteStore;

use crate::output::Output;

/// Run one sync cycle against the remote quote source
pub async fn sync(store: &mut QuoteStore, output: &Output) -> Result<()> {
    let config = store.config();

    if !config.sync_enabled {
        bail!(
            "Sync is not enabled. Enable it with:\n  \
             qotd config set sync_enabled true\n  \
             qotd config set server_url https://your-server"
        );
    }

    let Some(server_url) = config.server_url.clone() else {
        bail!(
            "Server URL not configured. Set it with:\n  \
             qotd config set server_url https://your-server"
        );
    };

    let sync_state_path = config.sync_state_path();
    let fetch_limit = config.fetch_limit;

    output.message(&format!("Syncing with {}...", server_url));

    let client = SyncClient::new(&server_url, fetch_limit)?;
    let report = match client.sync_once(store).await {
        Ok(report) => report,
        Err(e) => {
            output.message(&format!("Sync failed: {}", e));
            return Err(e);
        }
    };

    // Record the cycle for the status command
    let mut sync_state = SyncState::with_path(sync_state_path).unwrap_or_else(|_| SyncState::new());
    sync_state.record(&report);
    if let Err(e) = sync_state.save() {
        output.warn(&format!("Could not record sync state: {}", e));
    }

    if output.is_json() {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output.success(&format!(
        "Sync complete - {} fetched, {} added, {} conflict(s) resolved from server",
        report.fetched, report.added, report.conflicts
    ));
    output.message(&format!("  Quotes: {}", store.quote_count()));

    if let Some(ref push_error) = report.push_error {
        // Merge already applied and persisted; only the upload leg failed
        output.warn(&format!("Upload to server failed: {}", push_error));
    }

    Ok(())
}
