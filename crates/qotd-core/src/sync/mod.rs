//! Sync with the remote quote source
//!
//! One-shot HTTP reconciliation, server wins on text collision:
//! 1. GET a bounded batch of records (`_limit` query parameter)
//! 2. Map each record's `title` into a quote under the fixed
//!    `"Server"` category
//! 3. Merge into the local store and persist
//! 4. POST the full local collection back
//!
//! ## Usage
//!
//! ```ignore
//! let client = SyncClient::new("https://jsonplaceholder.typicode.com", 5)?;
//! let report = client.sync_once(&mut store).await?;
//! println!("{} added, {} conflicts", report.added, report.conflicts);
//! ```

mod client;
mod state;

pub use client::{RemotePost, SyncClient, SyncReport, SERVER_CATEGORY};
pub use state::{LastSync, SyncState};
