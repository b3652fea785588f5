//! Catalog store contract
//!
//! The record side of the product lifecycle: durability and lookup of
//! structured metadata, keyed by a store-assigned id. The asset side lives
//! in `wares-store::assets`; the service in `wares-catalog` couples the two.

use crate::errors::Result;
use crate::model::{NewProduct, Product, ProductId};

/// Column a listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    CreatedAt,
}

/// Listing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Ordering for catalog listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOrder {
    pub field: OrderField,
    pub direction: Direction,
}

impl ListOrder {
    /// Descending by id - the catalog's default "recent first" listing
    pub fn newest_first() -> Self {
        Self {
            field: OrderField::Id,
            direction: Direction::Desc,
        }
    }

    /// Ascending by id
    pub fn oldest_first() -> Self {
        Self {
            field: OrderField::Id,
            direction: Direction::Asc,
        }
    }
}

impl Default for ListOrder {
    fn default() -> Self {
        Self::newest_first()
    }
}

/// Contract for the product record store
///
/// Implemented by [`MemoryCatalog`](crate::memory::MemoryCatalog) for tests
/// and tooling, and by the SQLite repository in `wares-store` for real use.
/// Implementations persist records only; they know nothing about blobs.
pub trait CatalogStore {
    /// Insert a new record, assigning its id
    ///
    /// # Errors
    /// Returns `Persistence` if the record could not be written.
    fn insert(&mut self, new: NewProduct) -> Result<Product>;

    /// Fetch a record by id
    ///
    /// # Errors
    /// Returns `ProductNotFound` if no record has the given id.
    fn find_by_id(&self, id: ProductId) -> Result<Product>;

    /// Overwrite an existing record, matched by id
    ///
    /// `created_at` is immutable and must not change, whatever the caller
    /// passes.
    ///
    /// # Errors
    /// Returns `ProductNotFound` if no record has the product's id.
    fn update(&mut self, product: &Product) -> Result<()>;

    /// Remove a record
    ///
    /// # Errors
    /// Returns `ProductNotFound` if no record has the given id.
    fn delete(&mut self, id: ProductId) -> Result<()>;

    /// All records in the given order
    ///
    /// # Errors
    /// Returns `Persistence` if the listing query fails.
    fn list_all(&self, order: ListOrder) -> Result<Vec<Product>>;
}
