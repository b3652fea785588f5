//! Remove command
//!
//! Usage: wares remove <ID>

use clap::Args;

use wares_core::model::ProductId;

use super::Context;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Product id
    pub id: i64,
}

/// Execute remove
pub fn execute(ctx: &Context, args: RemoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut service = ctx.open_service()?;

    match service.delete(ProductId(args.id)) {
        Ok(()) => {
            println!("Removed product {}", args.id);
            Ok(())
        }
        // Removing a missing product is a no-op, not a failure
        Err(e) if e.is_not_found() => {
            println!("Product {} not found; nothing to remove", args.id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
