//! In-memory catalog store
//!
//! HashMap-based implementation of the `CatalogStore` contract. Not
//! thread-safe; intended for tests and short-lived tooling, not durability.

use std::collections::HashMap;

use crate::catalog::{CatalogStore, Direction, ListOrder, OrderField};
use crate::errors::{Result, WaresError};
use crate::model::{NewProduct, Product, ProductId};

/// In-memory catalog keyed by product id
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: HashMap<i64, Product>,
    next_id: i64,
}

impl MemoryCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogStore for MemoryCatalog {
    fn insert(&mut self, new: NewProduct) -> Result<Product> {
        self.next_id += 1;
        let product = new.into_product(ProductId(self.next_id));
        self.products.insert(product.id.as_i64(), product.clone());
        Ok(product)
    }

    fn find_by_id(&self, id: ProductId) -> Result<Product> {
        self.products
            .get(&id.as_i64())
            .cloned()
            .ok_or(WaresError::ProductNotFound { id })
    }

    fn update(&mut self, product: &Product) -> Result<()> {
        match self.products.get_mut(&product.id.as_i64()) {
            Some(slot) => {
                let created_at = slot.created_at;
                *slot = product.clone();
                // created_at is immutable once a record exists
                slot.created_at = created_at;
                Ok(())
            }
            None => Err(WaresError::ProductNotFound { id: product.id }),
        }
    }

    fn delete(&mut self, id: ProductId) -> Result<()> {
        self.products
            .remove(&id.as_i64())
            .map(|_| ())
            .ok_or(WaresError::ProductNotFound { id })
    }

    fn list_all(&self, order: ListOrder) -> Result<Vec<Product>> {
        let mut items: Vec<Product> = self.products.values().cloned().collect();
        match order.field {
            OrderField::Id => items.sort_by_key(|p| p.id),
            // id as tiebreaker keeps the order deterministic
            OrderField::CreatedAt => items.sort_by_key(|p| (p.created_at, p.id)),
        }
        if order.direction == Direction::Desc {
            items.reverse();
        }
        Ok(items)
    }
}
