//! Catalog service
//!
//! One-shot create/update/delete/get/list operations over a catalog whose
//! records each own a single image blob. The blob write and the record
//! write are not transactional with each other; the orderings here keep a
//! committed record pointing at a written blob wherever the policy allows:
//! a replacement image is written before the record changes, and blobs are
//! only deleted after the record mutation has committed.

use chrono::Utc;
use tracing::{info, warn};

use wares_core::catalog::{CatalogStore, ListOrder};
use wares_core::errors::{Result, WaresError};
use wares_core::model::{NewProduct, Product, ProductDraft, ProductId};
use wares_store::assets::{AssetKey, AssetStore};

use crate::policy::FailurePolicy;

/// Orchestrates the record store and the asset store
pub struct CatalogService<C: CatalogStore> {
    catalog: C,
    assets: AssetStore,
    policy: FailurePolicy,
}

impl<C: CatalogStore> CatalogService<C> {
    /// Create a service with the default (lenient) failure policy
    pub fn new(catalog: C, assets: AssetStore) -> Self {
        Self::with_policy(catalog, assets, FailurePolicy::default())
    }

    pub fn with_policy(catalog: C, assets: AssetStore, policy: FailurePolicy) -> Self {
        Self {
            catalog,
            assets,
            policy,
        }
    }

    /// Direct access to the record store (listing views, tests)
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Direct access to the asset store
    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// Decompose the service, handing back its stores
    ///
    /// Used when a boundary reconfigures the service (different content
    /// root or policy) without reopening the record store.
    pub fn into_parts(self) -> (C, AssetStore) {
        (self.catalog, self.assets)
    }

    /// Create a product with its image
    ///
    /// Writes the blob first, then inserts the record. Under the lenient
    /// policy a failed blob write is logged and the record is inserted
    /// anyway, keeping the generated key.
    ///
    /// # Errors
    /// * `MissingImage` - the draft carries no image upload
    /// * `InvalidName` / `InvalidPrice` - field validation failed
    /// * `AssetWrite` - blob write failed and the policy is strict
    /// * `Persistence` - the record could not be inserted
    pub fn create(&mut self, mut draft: ProductDraft) -> Result<Product> {
        validate(&draft)?;
        let image = draft.image.take().ok_or(WaresError::MissingImage)?;

        let key = self.assets.generate_key(&image.original_name);
        if let Err(e) = self.assets.write(&key, &image.bytes) {
            match self.policy {
                FailurePolicy::Strict => return Err(e),
                FailurePolicy::Lenient => {
                    warn!(key = %key, error = %e, "image write failed; creating record anyway");
                }
            }
        }

        let product = self.catalog.insert(NewProduct {
            name: draft.name,
            brand: draft.brand,
            category: draft.category,
            price: draft.price,
            description: draft.description,
            created_at: Utc::now(),
            image_key: key.into_string(),
        })?;

        info!(id = %product.id, "product created");
        Ok(product)
    }

    /// Update a product's fields and optionally replace its image
    ///
    /// Non-image fields always apply in full. A replacement image is
    /// written under a fresh key before the record changes; the superseded
    /// blob is deleted only after the record update commits. Under the
    /// lenient policy a failed replacement write keeps the current image
    /// key, and the current blob is left untouched.
    ///
    /// # Errors
    /// * `ProductNotFound` - no record has the given id (terminal)
    /// * `InvalidName` / `InvalidPrice` - field validation failed
    /// * `AssetWrite` - replacement write failed and the policy is strict
    /// * `Persistence` - the record could not be updated
    pub fn update(&mut self, id: ProductId, mut draft: ProductDraft) -> Result<Product> {
        validate(&draft)?;
        let mut product = self.catalog.find_by_id(id)?;

        let mut superseded: Option<AssetKey> = None;
        if let Some(image) = draft.image.take() {
            let key = self.assets.generate_key(&image.original_name);
            match self.assets.write(&key, &image.bytes) {
                Ok(()) => {
                    let old = std::mem::replace(&mut product.image_key, key.into_string());
                    superseded = Some(AssetKey::from(old));
                }
                Err(e) => match self.policy {
                    FailurePolicy::Strict => return Err(e),
                    FailurePolicy::Lenient => {
                        warn!(
                            id = %id,
                            key = %key,
                            error = %e,
                            "replacement image write failed; keeping current image"
                        );
                    }
                },
            }
        }

        product.name = draft.name;
        product.brand = draft.brand;
        product.category = draft.category;
        product.price = draft.price;
        product.description = draft.description;

        self.catalog.update(&product)?;

        if let Some(old) = superseded {
            self.discard_asset(&old);
        }

        info!(id = %product.id, "product updated");
        Ok(product)
    }

    /// Delete a product and its image
    ///
    /// Removes the record first; the blob deletion afterwards is
    /// best-effort, so a failure orphans the blob rather than leaving a
    /// record behind pointing at nothing.
    ///
    /// # Errors
    /// * `ProductNotFound` - no record has the given id; callers treat a
    ///   repeat delete as a no-op
    /// * `Persistence` - the record could not be removed
    pub fn delete(&mut self, id: ProductId) -> Result<()> {
        let product = self.catalog.find_by_id(id)?;

        self.catalog.delete(id)?;
        self.discard_asset(&AssetKey::from(product.image_key));

        info!(id = %id, "product deleted");
        Ok(())
    }

    /// Fetch one product
    ///
    /// # Errors
    /// Returns `ProductNotFound` if no record has the given id.
    pub fn get(&self, id: ProductId) -> Result<Product> {
        self.catalog.find_by_id(id)
    }

    /// List products in the given order
    ///
    /// # Errors
    /// Returns `Persistence` if the listing query fails.
    pub fn list(&self, order: ListOrder) -> Result<Vec<Product>> {
        self.catalog.list_all(order)
    }

    /// Best-effort blob removal; failures are logged, never propagated
    fn discard_asset(&self, key: &AssetKey) {
        if let Err(e) = self.assets.delete(key) {
            warn!(key = %key, error = %e, "asset delete failed; blob orphaned");
        }
    }
}

/// Field validation shared by create and update
fn validate(draft: &ProductDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(WaresError::InvalidName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }
    if draft.price.is_sign_negative() {
        return Err(WaresError::InvalidPrice {
            reason: format!("Price cannot be negative: {}", draft.price),
        });
    }
    Ok(())
}
