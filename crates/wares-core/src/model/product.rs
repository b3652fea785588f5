use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a catalog record
///
/// Assigned by the catalog store on insert (SQLite rowid, memory counter)
/// and immutable afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product - one catalog entry owning a single image asset
///
/// The record and its blob live in different stores; `image_key` is the
/// coupling point. It is replaced on image updates and never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier (immutable)
    pub id: ProductId,

    /// Display name
    pub name: String,

    pub brand: String,

    pub category: String,

    /// Non-negative price
    pub price: Decimal,

    pub description: String,

    /// Timestamp when this product was created (set once, immutable)
    pub created_at: DateTime<Utc>,

    /// Asset store key of the current image blob (mutable on update)
    pub image_key: String,
}

/// A product record ready for insertion, before the store assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: Decimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub image_key: String,
}

impl NewProduct {
    /// Attach the store-assigned id, completing the record
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            brand: self.brand,
            category: self.category,
            price: self.price,
            description: self.description,
            created_at: self.created_at,
            image_key: self.image_key,
        }
    }
}
