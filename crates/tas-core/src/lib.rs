//! Core types and trait definitions for the TAS candidate service.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! store backend, the identity client, and the server all depend on it.

pub mod candidate;
pub mod error;
pub mod listing;
pub mod store;

pub use candidate::Candidate;
pub use error::{Error, Result};
pub use store::{CandidateStore, Entry};
