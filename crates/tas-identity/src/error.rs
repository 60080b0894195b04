//! Error type for `tas-identity`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  #[error("assertion request failed: {0}")]
  Request(#[source] reqwest::Error),

  #[error("assertion lookup returned {0}")]
  Status(reqwest::StatusCode),

  #[error("cannot decode assertion attributes: {0}")]
  Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
