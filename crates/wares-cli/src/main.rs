//! wares CLI
//!
//! Command-line boundary for the wares product catalog

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "wares")]
#[command(about = "Product catalog with coupled image assets", long_about = None)]
struct Cli {
    /// Path to the catalog database
    #[arg(long, global = true, default_value = ".wares/catalog.db")]
    db: PathBuf,

    /// Content root directory for image assets
    #[arg(long, global = true, default_value = ".wares/images")]
    assets: PathBuf,

    /// Abort catalog mutations when an image write fails
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a product with its image
    Add(commands::add::AddArgs),
    /// Edit a product's fields or replace its image
    Edit(commands::edit::EditArgs),
    /// Remove a product and its image
    Remove(commands::remove::RemoveArgs),
    /// Show one product
    Show(commands::show::ShowArgs),
    /// List products
    List(commands::list::ListArgs),
}

fn main() {
    wares_core::logging::init(wares_core::logging::Profile::Development);

    let cli = Cli::parse();
    let ctx = commands::Context {
        db: cli.db,
        assets: cli.assets,
        strict: cli.strict,
    };

    let result = match cli.command {
        Commands::Add(args) => commands::add::execute(&ctx, args),
        Commands::Edit(args) => commands::edit::execute(&ctx, args),
        Commands::Remove(args) => commands::remove::execute(&ctx, args),
        Commands::Show(args) => commands::show::execute(&ctx, args),
        Commands::List(args) => commands::list::execute(&ctx, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
