//! List command
//!
//! Usage: wares list [--oldest-first] [--json]

use clap::Args;

use wares_core::catalog::ListOrder;

use super::Context;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// List oldest products first (default is newest first)
    #[arg(long)]
    pub oldest_first: bool,

    /// Print the records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute list
pub fn execute(ctx: &Context, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = ctx.open_service()?;

    let order = if args.oldest_first {
        ListOrder::oldest_first()
    } else {
        ListOrder::newest_first()
    };
    let products = service.list(order)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!("No products");
        return Ok(());
    }

    for product in products {
        println!(
            "{:>5}  {:<28} {:>12}  {}",
            product.id.to_string(),
            product.name,
            product.price.to_string(),
            product.created_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}
