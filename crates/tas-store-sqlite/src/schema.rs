//! SQL schema for the candidate store.
//!
//! One table per named collection. Keys compare with SQLite's default
//! `BINARY` collation, so `ORDER BY key` is ascending byte order.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS Candidates (
    key   TEXT PRIMARY KEY NOT NULL,   -- email address
    value BLOB NOT NULL                -- JSON-encoded candidate
) WITHOUT ROWID;

PRAGMA user_version = 1;
";
