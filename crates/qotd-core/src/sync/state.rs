//! Sync state persistence
//!
//! Records when the last sync cycle ran and what it did, so the status
//! command can report it across sessions.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sync::client::SyncReport;

/// Snapshot of the most recent sync cycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastSync {
    /// When the cycle completed
    pub at: DateTime<Utc>,
    /// Remote records fetched
    pub fetched: usize,
    /// Records appended by the merge
    pub added: usize,
    /// Records that replaced a local quote
    pub conflicts: usize,
    /// Whether the push leg succeeded
    pub pushed: bool,
}

/// Persistent sync state
#[derive(Debug, Default)]
pub struct SyncState {
    /// The most recent cycle, if any
    last: Option<LastSync>,
    /// Path to persist state
    path: Option<PathBuf>,
}

impl SyncState {
    /// Create a new sync state (in-memory only)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sync state that persists to disk
    pub fn with_path(path: PathBuf) -> Result<Self> {
        let mut state = Self {
            last: None,
            path: Some(path.clone()),
        };

        // Load existing state if available
        if path.exists() {
            state.load()?;
        }

        Ok(state)
    }

    /// The most recent sync, if one has run
    pub fn last(&self) -> Option<&LastSync> {
        self.last.as_ref()
    }

    /// Record a completed sync cycle
    pub fn record(&mut self, report: &SyncReport) {
        self.last = Some(LastSync {
            at: Utc::now(),
            fetched: report.fetched,
            added: report.added,
            conflicts: report.conflicts,
            pushed: report.pushed(),
        });
    }

    /// Save state to disk
    pub fn save(&self) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        let json = serde_json::to_string(&self.last)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, json).context("Failed to save sync state")?;
        Ok(())
    }

    /// Load state from disk
    fn load(&mut self) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        let json = fs::read_to_string(path).context("Failed to read sync state")?;
        self.last = serde_json::from_str(&json)?;

        Ok(())
    }

    /// Clear recorded state
    pub fn clear(&mut self) {
        self.last = None;
    }
}
