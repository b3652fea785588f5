use thiserror::Error;

use crate::model::ProductId;

/// Result type alias using WaresError
pub type Result<T> = std::result::Result<T, WaresError>;

/// Error taxonomy for catalog operations
///
/// Everything that crosses the service boundary is one of these variants;
/// raw `rusqlite` or `std::io` errors never leave the persistence layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaresError {
    // ===== Lookup =====
    /// Product not found in the catalog
    #[error("Product not found: {id}")]
    ProductNotFound { id: ProductId },

    // ===== Validation =====
    /// Invalid product name (empty or whitespace-only)
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// Invalid price (negative)
    #[error("Invalid price: {reason}")]
    InvalidPrice { reason: String },

    /// Create requires an image upload
    #[error("An image upload is required")]
    MissingImage,

    // ===== Asset store =====
    /// Image blob could not be written under the content root
    #[error("Failed to write asset {key}: {message}")]
    AssetWrite { key: String, message: String },

    /// Image blob could not be deleted, for a reason other than not-found
    #[error("Failed to delete asset {key}: {message}")]
    AssetDelete { key: String, message: String },

    // ===== Integration =====
    /// Database error
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Filesystem error outside the asset write/delete paths
    #[error("I/O error in {op}: {message}")]
    Io { op: String, message: String },
}

impl WaresError {
    /// Whether this error is a definite missing-record condition
    ///
    /// Boundaries use this to decide between a no-op message and a failure
    /// exit (a repeat delete of the same id is a no-op, not an error).
    pub fn is_not_found(&self) -> bool {
        matches!(self, WaresError::ProductNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_id() {
        let err = WaresError::ProductNotFound {
            id: ProductId::from(42),
        };
        assert_eq!(err.to_string(), "Product not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_asset_errors_are_not_not_found() {
        let err = WaresError::AssetWrite {
            key: "k".to_string(),
            message: "disk full".to_string(),
        };
        assert!(!err.is_not_found());
    }
}
