//! Add command
//!
//! Usage: wares add --name <NAME> --price <PRICE> --image <FILE> [...]

use std::path::PathBuf;

use clap::Args;
use rust_decimal::Decimal;

use wares_core::model::ProductDraft;

use super::{read_image, Context};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Brand
    #[arg(long, default_value = "")]
    pub brand: String,

    /// Category
    #[arg(long, default_value = "")]
    pub category: String,

    /// Price, e.g. 49.99
    #[arg(long)]
    pub price: Decimal,

    /// Description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Path to the image file
    #[arg(long)]
    pub image: PathBuf,
}

/// Execute add
pub fn execute(ctx: &Context, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let image = read_image(&args.image)?;

    let mut service = ctx.open_service()?;
    let product = service.create(ProductDraft {
        name: args.name,
        brand: args.brand,
        category: args.category,
        price: args.price,
        description: args.description,
        image: Some(image),
    })?;

    println!("Added product {} ({})", product.id, product.name);
    Ok(())
}
