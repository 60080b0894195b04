//! SQLite backend for the TAS candidate store.
//!
//! The database file holds a single key-value collection, `Candidates`,
//! mapping email addresses to JSON-encoded candidate records. Wraps
//! [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
