//! Error type for `tas-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] tas_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl Error {
  /// `true` when the stored bytes could not be decoded into a candidate.
  pub fn is_decode(&self) -> bool {
    matches!(self, Error::Core(tas_core::Error::Decode { .. }))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
