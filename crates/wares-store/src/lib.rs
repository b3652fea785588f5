//! wares-store - Persistence layer for the wares catalog
//!
//! Provides:
//! - Filesystem asset store for product image blobs
//! - SQLite catalog repository with an embedded migrations framework
//! - Connection management helpers

pub mod assets;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use assets::{AssetKey, AssetStore};
pub use repo::SqliteCatalog;
