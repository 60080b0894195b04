//! The `CandidateStore` trait.
//!
//! Implemented by storage backends (e.g. `tas-store-sqlite`). The server
//! depends on this abstraction, not on any concrete backend.
//!
//! Every method maps to exactly one backend transaction over a single key, or
//! one read-only scan for the listing methods. There is no caching layer, so
//! every read reflects the latest committed write.

use std::future::Future;

use crate::candidate::Candidate;

/// A raw key/value pair as held by the store, value uninspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  pub key:   String,
  pub value: Vec<u8>,
}

/// Abstraction over a key-value store of candidate records keyed by email.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait CandidateStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch and decode the record stored under `email`. Returns `None` if the
  /// key is absent; a malformed stored value is an error.
  fn get<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Candidate>, Self::Error>> + Send + 'a;

  /// Fetch the stored bytes under `email` without decoding them.
  fn get_raw<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Vec<u8>>, Self::Error>> + Send + 'a;

  /// Build `{email, first_name, last_name}`, encode it and write it under
  /// `email`, replacing any prior value. Returns the written record.
  fn put<'a>(
    &'a self,
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
  ) -> impl Future<Output = Result<Candidate, Self::Error>> + Send + 'a;

  /// Remove `email`. Removing an absent key is not an error.
  fn delete<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Every record in ascending key order. Fails on the first malformed value.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Candidate>, Self::Error>> + Send + '_;

  /// Every stored entry in ascending key order, values uninspected.
  fn list_raw(
    &self,
  ) -> impl Future<Output = Result<Vec<Entry>, Self::Error>> + Send + '_;
}
