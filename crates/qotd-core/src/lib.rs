//! qotd Core Library
//!
//! This crate provides the core functionality for qotd, a local-first
//! quote collection manager with remote sync.
//!
//! # Architecture
//!
//! The store is a plain ordered collection of `{text, category}`
//! records persisted as a JSON array. Quote text doubles as the
//! natural key: the merge engine reconciles remote batches by exact
//! text equality, incoming wins.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = QuoteStore::open()?;
//!
//! // Add a quote
//! store.add("Stay hungry.", "Motivation")?;
//!
//! // Display one
//! let quote = store.random_quote(None);
//! ```
//!
//! # Modules
//!
//! - `store`: Unified quote store (main entry point)
//! - `models`: The `Quote` record and seed defaults
//! - `categories`: Derived category index
//! - `merge`: Text-keyed merge engine
//! - `storage`: Durable and session-scoped persistence
//! - `sync`: HTTP sync client and sync state
//! - `config`: Application configuration

pub mod categories;
pub mod config;
pub mod merge;
pub mod models;
pub mod storage;
pub mod store;
pub mod sync;

pub use categories::CategoryIndex;
pub use config::Config;
pub use merge::{merge, MergeResult};
pub use models::{default_quotes, Quote, QuoteError};
pub use storage::{QuotePersistence, SessionCache, StorageError};
pub use store::{AddOutcome, ImportOutcome, ImportRecord, MergeOutcome, QuoteStore};
pub use sync::{SyncClient, SyncReport, SyncState};
