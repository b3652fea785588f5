//! SQLite catalog repository
//!
//! Implements the `CatalogStore` contract over rusqlite. Callers open a
//! connection via `db::open` and apply migrations before constructing the
//! repository.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

use wares_core::catalog::{CatalogStore, Direction, ListOrder, OrderField};
use wares_core::errors::{Result, WaresError};
use wares_core::model::{NewProduct, Product, ProductId};

use crate::errors::from_rusqlite;

const SELECT_COLUMNS: &str = "id, name, brand, category, price, description, created_at, image_key";

/// SQLite-backed catalog store
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    fn map_row(row: &Row) -> rusqlite::Result<Product> {
        let id: i64 = row.get(0)?;
        let name: String = row.get(1)?;
        let brand: String = row.get(2)?;
        let category: String = row.get(3)?;
        let price_text: String = row.get(4)?;
        let description: String = row.get(5)?;
        let created_at_ms: i64 = row.get(6)?;
        let image_key: String = row.get(7)?;

        Ok(Product {
            id: ProductId(id),
            name,
            brand,
            category,
            price: Decimal::from_str(&price_text).unwrap_or_default(),
            description,
            created_at: DateTime::from_timestamp_millis(created_at_ms).unwrap_or_else(Utc::now),
            image_key,
        })
    }
}

impl CatalogStore for SqliteCatalog {
    fn insert(&mut self, new: NewProduct) -> Result<Product> {
        self.conn
            .execute(
                "INSERT INTO products (name, brand, category, price, description, created_at, image_key)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    new.name,
                    new.brand,
                    new.category,
                    new.price.to_string(),
                    new.description,
                    new.created_at.timestamp_millis(),
                    new.image_key,
                ],
            )
            .map_err(from_rusqlite)?;

        let id = ProductId(self.conn.last_insert_rowid());
        Ok(new.into_product(id))
    }

    fn find_by_id(&self, id: ProductId) -> Result<Product> {
        self.conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM products WHERE id = ?1"),
                [id.as_i64()],
                Self::map_row,
            )
            .optional()
            .map_err(from_rusqlite)?
            .ok_or(WaresError::ProductNotFound { id })
    }

    fn update(&mut self, product: &Product) -> Result<()> {
        // created_at is immutable and deliberately absent from the SET list
        let changed = self
            .conn
            .execute(
                "UPDATE products
                 SET name = ?1, brand = ?2, category = ?3, price = ?4,
                     description = ?5, image_key = ?6
                 WHERE id = ?7",
                rusqlite::params![
                    product.name,
                    product.brand,
                    product.category,
                    product.price.to_string(),
                    product.description,
                    product.image_key,
                    product.id.as_i64(),
                ],
            )
            .map_err(from_rusqlite)?;

        if changed == 0 {
            return Err(WaresError::ProductNotFound { id: product.id });
        }
        Ok(())
    }

    fn delete(&mut self, id: ProductId) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1", [id.as_i64()])
            .map_err(from_rusqlite)?;

        if changed == 0 {
            return Err(WaresError::ProductNotFound { id });
        }
        Ok(())
    }

    fn list_all(&self, order: ListOrder) -> Result<Vec<Product>> {
        let dir = match order.direction {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };
        let order_clause = match order.field {
            OrderField::Id => format!("id {dir}"),
            // id as tiebreaker keeps the order deterministic
            OrderField::CreatedAt => format!("created_at {dir}, id {dir}"),
        };

        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM products ORDER BY {order_clause}"
            ))
            .map_err(from_rusqlite)?;

        let products = stmt
            .query_map([], Self::map_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(products)
    }
}
