//! Orchard CLI - Terminal storefront for the Mường Khương orchard.
//!
//! Commands:
//! - `orchard catalog` - List or search products
//! - `orchard contact` - Show the seller's contact and bank details
//! - `orchard order` - Build an order from the command line and send it
//! - `orchard quick-order` - Send the contact form without a cart
//! - `orchard shop` - Interactive shopping session
//! - `orchard config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod mail;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, OrderArgs, QuickOrderArgs, ShopArgs};

/// Orchard CLI - Browse the catalog and send orders to the farm
#[derive(Parser)]
#[command(name = "orchard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or search products
    Catalog(CatalogArgs),

    /// Show contact and bank details
    Contact,

    /// Build an order and hand it to the mail client
    Order(OrderArgs),

    /// Send the quick contact-form order
    QuickOrder(QuickOrderArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Contact => commands::contact::run(&ctx),
        Commands::Order(args) => commands::order::run(args, &ctx),
        Commands::QuickOrder(args) => commands::quick_order::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
