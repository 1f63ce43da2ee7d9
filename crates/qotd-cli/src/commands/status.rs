//! Status command handler

use anyhow::Result;

use qotd_core::sync::SyncState;
use qotd_core::QuoteStore;

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &QuoteStore, output: &Output) -> Result<()> {
    let config = store.config();
    let sync_state =
        SyncState::with_path(config.sync_state_path()).unwrap_or_else(|_| SyncState::new());
    let last_sync = sync_state.last();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "sync_enabled": config.sync_enabled,
                    "server_url": config.server_url,
                    "fetch_limit": config.fetch_limit,
                    "selected_category": store.selected_category(),
                    "counts": {
                        "quotes": store.quote_count(),
                        "categories": store.categories().len()
                    },
                    "last_sync": last_sync
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", store.quote_count());
        }
        OutputFormat::Human => {
            println!("qotd Status");
            println!("===========");
            println!();
            println!("Storage:");
            println!("  Location: {}", config.data_dir.display());
            println!();
            println!("Contents:");
            println!("  Quotes:     {}", store.quote_count());
            println!("  Categories: {}", store.categories().len());
            println!(
                "  Filter:     {}",
                store.selected_category().unwrap_or("(all categories)")
            );
            println!();
            println!("Sync:");
            println!(
                "  Status: {}",
                if config.sync_enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            if let Some(ref url) = config.server_url {
                println!("  Server: {}", url);
            }
            match last_sync {
                Some(last) => {
                    println!(
                        "  Last:   {} ({} fetched, {} added, {} conflict(s){})",
                        last.at.format("%Y-%m-%d %H:%M"),
                        last.fetched,
                        last.added,
                        last.conflicts,
                        if last.pushed { "" } else { ", push failed" }
                    );
                }
                None => println!("  Last:   never"),
            }
        }
    }

    Ok(())
}
