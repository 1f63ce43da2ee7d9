//! Storage layer
//!
//! Two kinds of persistence with different lifetimes:
//!
//! - **Durable**: the quote collection and the selected-category
//!   filter, stored under the data directory and reloaded at startup.
//! - **Session-scoped**: the last-viewed quote, stored under the temp
//!   directory and gone after a reboot.

pub mod error;
pub mod persistence;
pub mod session;

pub use error::{StorageError, StorageResult};
pub use persistence::QuotePersistence;
pub use session::SessionCache;
