//! Database connection management
//!
//! Utilities for opening and configuring SQLite connections

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open the catalog database at the given path
///
/// # Errors
/// Returns `Persistence` if the file cannot be opened.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory database (for testing)
///
/// # Errors
/// Returns `Persistence` if the connection cannot be created.
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection with the settings the catalog expects
///
/// # Errors
/// Returns `Persistence` if a pragma cannot be applied.
pub fn configure(conn: &Connection) -> Result<()> {
    // WAL for better concurrency; both pragmas are idempotent
    conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL;")
        .map_err(from_rusqlite)
}
