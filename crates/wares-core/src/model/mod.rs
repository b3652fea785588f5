pub mod draft;
pub mod product;

pub use draft::{ImageUpload, ProductDraft};
pub use product::{NewProduct, Product, ProductId};
