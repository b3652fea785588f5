//! Error helpers for wares-store
//!
//! Maps rusqlite and std::io failures into the core taxonomy

use wares_core::errors::WaresError;

pub use wares_core::errors::Result;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> WaresError {
    WaresError::Persistence {
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> WaresError {
    WaresError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create an IO error
pub fn io_error(op: &str, err: std::io::Error) -> WaresError {
    WaresError::Io {
        op: op.to_string(),
        message: err.to_string(),
    }
}
