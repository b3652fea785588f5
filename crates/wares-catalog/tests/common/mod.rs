use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use tempfile::TempDir;

use wares_catalog::CatalogService;
use wares_core::model::{ImageUpload, ProductDraft};
use wares_core::MemoryCatalog;
use wares_store::AssetStore;

/// Service over an in-memory catalog and a content root inside `dir`
#[allow(dead_code)]
pub fn new_service(dir: &TempDir) -> CatalogService<MemoryCatalog> {
    CatalogService::new(MemoryCatalog::new(), AssetStore::new(images_root(dir)))
}

#[allow(dead_code)]
pub fn images_root(dir: &TempDir) -> PathBuf {
    dir.path().join("images")
}

/// A content root that can never be created: its parent is a regular file
#[allow(dead_code)]
pub fn blocked_root(dir: &TempDir) -> PathBuf {
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, b"file").unwrap();
    blocker.join("images")
}

#[allow(dead_code)]
pub fn draft(name: &str, price: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        brand: "Acme".to_string(),
        category: "Furniture".to_string(),
        price: Decimal::from_str(price).unwrap(),
        description: format!("{name} description"),
        image: None,
    }
}

#[allow(dead_code)]
pub fn draft_with_image(name: &str, price: &str, bytes: &[u8], image_name: &str) -> ProductDraft {
    let mut d = draft(name, price);
    d.image = Some(ImageUpload {
        bytes: bytes.to_vec(),
        original_name: image_name.to_string(),
    });
    d
}

/// Asset store view over an existing content root (for assertions)
#[allow(dead_code)]
pub fn assets_at(root: &Path) -> AssetStore {
    AssetStore::new(root)
}
