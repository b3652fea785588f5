use rust_decimal::Decimal;

/// Raw image bytes plus the uploader's original filename
///
/// The filename is untrusted input; the asset store sanitizes it before it
/// becomes part of an on-disk name.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub original_name: String,
}

/// Incoming field values for a create or update operation
///
/// On create the image is mandatory; on update a `None` image means "keep
/// the current one". Non-image fields always apply in full.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: Decimal,
    pub description: String,
    pub image: Option<ImageUpload>,
}

impl ProductDraft {
    /// Whether this draft carries a replacement image
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
