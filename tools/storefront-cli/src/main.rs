//! Storefront CLI - Terminal front end for the storefront.
//!
//! Commands:
//! - `storefront browse` - List products for a tab, filters and sort
//! - `storefront show` - Quick view of one product
//! - `storefront cart` - Replay cart actions and print the cart
//! - `storefront admin` - Dashboard, orders, products, categories, brands
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{AdminArgs, BrowseArgs, CartArgs, ConfigArgs, ShowArgs};

/// Storefront CLI - Browse the catalog, simulate a cart, run the admin console
#[derive(Parser)]
#[command(name = "storefront")]
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
    /// List visible products
    Browse(BrowseArgs),

    /// Show product details
    Show(ShowArgs),

    /// Simulate cart actions
    Cart(CartArgs),

    /// Admin console
    Admin(AdminArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    // Keep the raw matches: cart actions replay in argv order.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

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

    init_tracing(cli.verbose, ctx.config.logging.level.as_deref());

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Cart(args) => {
            commands::cart::run(args, matches.subcommand_matches("cart"), &ctx)
        }
        Commands::Admin(args) => commands::admin::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins, then `-v`, then the config's `[logging] level`.
fn init_tracing(verbose: bool, configured: Option<&str>) {
    let fallback = if verbose {
        "debug"
    } else {
        configured.unwrap_or("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .init();
}
