//! Repairzon CLI - a terminal storefront over the demo service catalog.
//!
//! Commands:
//! - `repairzon categories` - List service categories
//! - `repairzon services` - List and filter services
//! - `repairzon show` - Show one service with variants and reviews
//! - `repairzon home` - Show the featured service strips
//! - `repairzon session` - Run a cart session and check out
//! - `repairzon catalog` - Validate catalog data
//! - `repairzon config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, ServicesArgs, SessionArgs, ShowArgs};

/// Repairzon - browse home services and book them from the terminal
#[derive(Parser)]
#[command(name = "repairzon")]
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
    /// List service categories
    Categories,

    /// List services, optionally filtered
    Services(ServicesArgs),

    /// Show a service with its variants and reviews
    Show(ShowArgs),

    /// Show popular, trending and recent services
    Home,

    /// Run an interactive or scripted cart session
    Session(SessionArgs),

    /// Work with catalog data
    Catalog(CatalogArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and catalog
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.log, cli.verbose);
    tracing::debug!(catalog = %ctx.catalog_source, "context loaded");

    // Execute command
    let result = match cli.command {
        Commands::Categories => commands::catalog::categories(&ctx),
        Commands::Services(args) => commands::catalog::services(args, &ctx),
        Commands::Show(args) => commands::catalog::show(args, &ctx),
        Commands::Home => commands::catalog::home(&ctx),
        Commands::Session(args) => commands::session::run(args, &ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
