//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the services command.
#[derive(Args)]
pub struct ServicesArgs {
    /// Category id ("all" for every category).
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Case-insensitive text to look for in service titles.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only services with a variant priced at or below this many Taka.
    #[arg(long, value_name = "TAKA")]
    pub max_price: Option<u64>,

    /// Only services with a discounted variant.
    #[arg(long)]
    pub on_sale: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Service id, or a category id to open its default service.
    pub id: String,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Read cart commands from a file instead of stdin.
    #[arg(short, long)]
    pub script: Option<String>,

    /// Place the order at checkout without asking.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Check catalog data for authoring mistakes.
    Validate {
        /// Catalog JSON file (default: the configured catalog).
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Print the catalog as JSON.
    Export,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
