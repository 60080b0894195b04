//! Error types for `tas-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The bytes stored under `key` are not a candidate record.
  #[error("cannot decode candidate stored under {key:?}: {source}")]
  Decode {
    key:    String,
    #[source]
    source: serde_json::Error,
  },

  #[error("cannot encode candidate: {0}")]
  Encode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
