//! CLI commands

pub mod add;
pub mod edit;
pub mod list;
pub mod remove;
pub mod show;

use std::path::{Path, PathBuf};

use wares_catalog::{CatalogService, FailurePolicy};
use wares_store::{AssetStore, SqliteCatalog};

/// Shared command context from the global CLI options
pub struct Context {
    pub db: PathBuf,
    pub assets: PathBuf,
    pub strict: bool,
}

impl Context {
    /// Open the database, apply migrations, and build the catalog service
    pub fn open_service(
        &self,
    ) -> Result<CatalogService<SqliteCatalog>, Box<dyn std::error::Error>> {
        if let Some(parent) = self.db.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut conn = wares_store::db::open(&self.db)?;
        wares_store::db::configure(&conn)?;
        wares_store::migrations::apply_migrations(&mut conn)?;

        let policy = if self.strict {
            FailurePolicy::Strict
        } else {
            FailurePolicy::Lenient
        };

        Ok(CatalogService::with_policy(
            SqliteCatalog::new(conn),
            AssetStore::new(self.assets.clone()),
            policy,
        ))
    }
}

/// Read an image file into an upload, keeping its filename
pub fn read_image(path: &Path) -> Result<wares_core::model::ImageUpload, std::io::Error> {
    let bytes = std::fs::read(path)?;
    let original_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    Ok(wares_core::model::ImageUpload {
        bytes,
        original_name,
    })
}
