//! Sync client implementation
//!
//! HTTP client for one-shot reconciliation with the remote quote
//! source. A sync cycle has two independent legs run in sequence:
//!
//! 1. Fetch a bounded batch of remote records, map them into quotes,
//!    and merge them into the store (server wins on text collision).
//! 2. Push the full local collection back to the server.
//!
//! A fetch failure aborts the cycle before any local mutation. A push
//! failure is reported but does not roll back the merge already
//! applied and persisted by the first leg.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::Quote;
use crate::store::QuoteStore;

/// Category assigned to every record mapped from the server
pub const SERVER_CATEGORY: &str = "Server";

/// Request timeout in seconds
const REQUEST_TIMEOUT: u64 = 10;

/// Outcome of one sync cycle
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SyncReport {
    /// Remote records fetched
    pub fetched: usize,
    /// Records appended by the merge
    pub added: usize,
    /// Records that replaced a local quote
    pub conflicts: usize,
    /// Error from the push leg, `None` when the push succeeded
    pub push_error: Option<String>,
}

impl SyncReport {
    /// Whether the push leg completed
    pub fn pushed(&self) -> bool {
        self.push_error.is_none()
    }
}

/// A record as served by the remote source
///
/// Only the title matters; everything else the server sends is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePost {
    pub title: String,
}

/// Sync client for the remote quote source
pub struct SyncClient {
    /// Server base URL
    base_url: String,
    /// Records fetched per cycle
    fetch_limit: usize,
    /// HTTP client
    http: reqwest::Client,
}

impl SyncClient {
    /// Create a new sync client
    pub fn new(base_url: &str, fetch_limit: usize) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT))
            .user_agent("qotd/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fetch_limit,
            http,
        })
    }

    /// The collection endpoint
    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    /// Fetch a bounded batch of remote records mapped into quotes
    ///
    /// Each record's `title` becomes the quote text; the category is
    /// the fixed [`SERVER_CATEGORY`] label.
    pub async fn fetch_remote(&self) -> Result<Vec<Quote>> {
        let response = self
            .http
            .get(self.posts_url())
            .query(&[("_limit", self.fetch_limit)])
            .send()
            .await
            .context("Failed to reach quote server")?;

        if !response.status().is_success() {
            bail!("Quote server returned {}", response.status());
        }

        let posts: Vec<RemotePost> = response
            .json()
            .await
            .context("Failed to parse server response")?;

        debug!("Fetched {} remote records", posts.len());
        Ok(posts_to_quotes(posts))
    }

    /// Push the full local collection to the server
    ///
    /// Any response body is ignored; a non-success status is an error.
    pub async fn push_local(&self, quotes: &[Quote]) -> Result<()> {
        let response = self
            .http
            .post(self.posts_url())
            .json(quotes)
            .send()
            .await
            .context("Failed to reach quote server")?;

        if !response.status().is_success() {
            bail!("Quote server rejected upload: {}", response.status());
        }

        debug!("Pushed {} quotes", quotes.len());
        Ok(())
    }

    /// Run one full sync cycle against the store
    ///
    /// Fetches, merges (the store persists the merged collection), then
    /// pushes. Taking `&mut QuoteStore` means a second cycle cannot
    /// start while one is in flight.
    pub async fn sync_once(&self, store: &mut QuoteStore) -> Result<SyncReport> {
        let incoming = self.fetch_remote().await?;
        let fetched = incoming.len();

        let outcome = store.apply_merge(&incoming)?;
        info!(
            "Merged {} remote records: {} added, {} conflicts",
            fetched, outcome.added, outcome.conflicts
        );

        let push_error = match self.push_local(store.quotes()).await {
            Ok(()) => None,
            Err(e) => {
                warn!("Push failed after merge: {:#}", e);
                Some(format!("{:#}", e))
            }
        };

        Ok(SyncReport {
            fetched,
            added: outcome.added,
            conflicts: outcome.conflicts,
            push_error,
        })
    }
}

/// Map server records into quotes
fn posts_to_quotes(posts: Vec<RemotePost>) -> Vec<Quote> {
    posts
        .into_iter()
        .map(|p| Quote::new(p.title, SERVER_CATEGORY))
        .collect()
}
