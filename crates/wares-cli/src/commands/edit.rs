//! Edit command
//!
//! Usage: wares edit <ID> [--name ..] [--price ..] [--image <FILE>] [...]
//!
//! Unspecified fields keep their current values; the draft sent to the
//! service is prefilled from the existing record.

use std::path::PathBuf;

use clap::Args;
use rust_decimal::Decimal;

use wares_core::model::{ProductDraft, ProductId};

use super::{read_image, Context};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Product id
    pub id: i64,

    /// New product name
    #[arg(long)]
    pub name: Option<String>,

    /// New brand
    #[arg(long)]
    pub brand: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Path to a replacement image file
    #[arg(long)]
    pub image: Option<PathBuf>,
}

/// Execute edit
pub fn execute(ctx: &Context, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut service = ctx.open_service()?;
    let id = ProductId(args.id);

    let current = match service.get(id) {
        Ok(product) => product,
        Err(e) if e.is_not_found() => {
            println!("Product {} not found; nothing to edit", args.id);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let image = match &args.image {
        Some(path) => Some(read_image(path)?),
        None => None,
    };

    let draft = ProductDraft {
        name: args.name.unwrap_or(current.name),
        brand: args.brand.unwrap_or(current.brand),
        category: args.category.unwrap_or(current.category),
        price: args.price.unwrap_or(current.price),
        description: args.description.unwrap_or(current.description),
        image,
    };

    let product = service.update(id, draft)?;
    println!("Updated product {} ({})", product.id, product.name);
    Ok(())
}
