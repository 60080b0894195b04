//! [`SqliteStore`]: the SQLite implementation of [`CandidateStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use tas_core::{Candidate, CandidateStore, Entry};

use crate::{schema::SCHEMA, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A candidate store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted. Every
/// operation is one statement, so each runs in its own implicit transaction.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store: useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection. Clones still held elsewhere fail on
  /// their next call.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Write pre-encoded bytes under `key` verbatim, replacing any prior value.
  ///
  /// The value is not inspected; use [`CandidateStore::put`] to write a
  /// well-formed record.
  pub async fn put_raw(&self, key: &str, value: Vec<u8>) -> Result<()> {
    let key = key.to_owned();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO Candidates (key, value) VALUES (?1, ?2)
           ON CONFLICT(key) DO UPDATE SET value = excluded.value",
          rusqlite::params![key, value],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── CandidateStore impl ─────────────────────────────────────────────────────

impl CandidateStore for SqliteStore {
  type Error = crate::Error;

  async fn get(&self, email: &str) -> Result<Option<Candidate>> {
    let raw = self.get_raw(email).await?;
    let candidate = raw
      .map(|bytes| Candidate::decode(email, &bytes))
      .transpose()?;
    Ok(candidate)
  }

  async fn get_raw(&self, email: &str) -> Result<Option<Vec<u8>>> {
    let key = email.to_owned();

    let raw: Option<Vec<u8>> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT value FROM Candidates WHERE key = ?1",
              rusqlite::params![key],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(raw)
  }

  async fn put(
    &self,
    email: &str,
    first_name: &str,
    last_name: &str,
  ) -> Result<Candidate> {
    let candidate = Candidate::new(email, first_name, last_name);
    let value = candidate.encode()?;
    self.put_raw(email, value).await?;
    Ok(candidate)
  }

  async fn delete(&self, email: &str) -> Result<()> {
    let key = email.to_owned();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM Candidates WHERE key = ?1",
          rusqlite::params![key],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list(&self) -> Result<Vec<Candidate>> {
    let entries = self.list_raw().await?;
    let candidates = entries
      .iter()
      .map(|e| Candidate::decode(&e.key, &e.value))
      .collect::<tas_core::Result<Vec<_>>>()?;
    Ok(candidates)
  }

  async fn list_raw(&self) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT key, value FROM Candidates ORDER BY key ASC")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Entry {
              key:   row.get(0)?,
              value: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(entries)
  }
}
