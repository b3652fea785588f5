//! Show command
//!
//! Usage: wares show <ID> [--json]

use clap::Args;

use wares_core::model::ProductId;
use wares_store::AssetKey;

use super::Context;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Product id
    pub id: i64,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute show
pub fn execute(ctx: &Context, args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = ctx.open_service()?;
    let product = service.get(ProductId(args.id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&product)?);
        return Ok(());
    }

    let image_state = if service
        .assets()
        .contains(&AssetKey::from(product.image_key.clone()))
    {
        "present"
    } else {
        "missing"
    };

    println!("Product {}", product.id);
    println!("  name:        {}", product.name);
    println!("  brand:       {}", product.brand);
    println!("  category:    {}", product.category);
    println!("  price:       {}", product.price);
    println!("  description: {}", product.description);
    println!("  created:     {}", product.created_at.format("%Y-%m-%d"));
    println!("  image:       {} ({})", product.image_key, image_state);
    Ok(())
}
