//! Persistence round-trip tests
//!
//! Records and blobs written through one connection must be readable
//! through a fresh one over the same files.

use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use tempfile::TempDir;

use wares_core::catalog::{CatalogStore, ListOrder};
use wares_core::model::NewProduct;
use wares_store::{db, migrations, AssetStore, SqliteCatalog};

fn draft_record(name: &str, price: &str, image_key: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        brand: "Acme".to_string(),
        category: "Furniture".to_string(),
        price: Decimal::from_str(price).unwrap(),
        description: format!("{name} description"),
        created_at: Utc::now(),
        image_key: image_key.to_string(),
    }
}

#[test]
fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("catalog.db");

    let id = {
        let mut conn = db::open(&db_path).unwrap();
        db::configure(&conn).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();

        let mut catalog = SqliteCatalog::new(conn);
        let product = catalog
            .insert(draft_record("Chair", "49.99", "key_a.png"))
            .unwrap();
        product.id
    };

    // Fresh connection over the same file
    let mut conn = db::open(&db_path).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    let catalog = SqliteCatalog::new(conn);

    let found = catalog.find_by_id(id).unwrap();
    assert_eq!(found.name, "Chair");
    assert_eq!(found.price, Decimal::from_str("49.99").unwrap());
    assert_eq!(found.image_key, "key_a.png");
}

#[test]
fn test_blobs_survive_new_store_handle() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("images");

    let key = {
        let assets = AssetStore::new(&root);
        assets.store(b"PNG bytes", "chair.png").unwrap()
    };

    let assets = AssetStore::new(&root);
    assert!(assets.contains(&key));
    assert_eq!(assets.read(&key).unwrap(), b"PNG bytes");
}

#[test]
fn test_listing_order_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("catalog.db");

    {
        let mut conn = db::open(&db_path).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        let mut catalog = SqliteCatalog::new(conn);
        for name in ["a", "b", "c"] {
            catalog
                .insert(draft_record(name, "1.00", &format!("key_{name}")))
                .unwrap();
        }
    }

    let mut conn = db::open(&db_path).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    let catalog = SqliteCatalog::new(conn);

    let listed = catalog.list_all(ListOrder::newest_first()).unwrap();
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["c", "b", "a"]);
}
