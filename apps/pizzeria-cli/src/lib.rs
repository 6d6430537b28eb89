//! # pizzeria-cli
//!
//! Thin command-line front end over `pizzeria-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Parse arguments (clap)                                              │
//! │  2. Initialize logging (tracing-subscriber, stderr, RUST_LOG)           │
//! │  3. Load configuration (defaults ◄ PIZZERIA_* ◄ flags)                  │
//! │  4. Build the catalog and run the command                              │
//! │  5. Print output to stdout, errors to stderr with an exit code          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;

use clap::{Args, Parser, Subcommand};
use pizzeria_core::{Catalog, CrustType, PizzaSize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::OrderRequest;
use config::AppConfig;
use error::AppError;

/// Pizza order entry from the command line.
#[derive(Debug, Parser)]
#[command(name = "pizzeria", version, about)]
pub struct Cli {
    /// Store name printed on summaries [env: PIZZERIA_STORE_NAME]
    #[arg(long, global = true)]
    pub store_name: Option<String>,

    /// Currency symbol [env: PIZZERIA_CURRENCY_SYMBOL]
    #[arg(long, global = true)]
    pub currency_symbol: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available extras
    Catalog,
    /// Build and submit an order, then print its summary
    Order(OrderArgs),
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Customer name
    #[arg(long, default_value = "")]
    pub name: String,

    /// small | medium | large (default: medium)
    #[arg(long, conflicts_with = "no_size")]
    pub size: Option<PizzaSize>,

    /// Leave the size unselected
    #[arg(long)]
    pub no_size: bool,

    /// thin | regular | cheese-stuffed
    #[arg(long, default_value = "regular")]
    pub crust: CrustType,

    /// Extra to add, by id or name; repeat to add more units
    #[arg(long = "add", value_name = "PRODUCT")]
    pub products: Vec<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<OrderArgs> for OrderRequest {
    fn from(args: OrderArgs) -> Self {
        OrderRequest {
            customer_name: args.name,
            size: args.size,
            clear_size: args.no_size,
            crust: args.crust,
            products: args.products,
            json: args.json,
        }
    }
}

impl Cli {
    /// Whether failures should be reported as JSON.
    pub fn wants_json(&self) -> bool {
        matches!(&self.command, Command::Order(args) if args.json)
    }
}

/// Runs one CLI invocation and returns what to print.
pub fn run(cli: Cli) -> Result<String, AppError> {
    let config = AppConfig::from_env().with_overrides(cli.store_name, cli.currency_symbol);
    info!(store = %config.store_name, "configuration loaded");

    let catalog = Catalog::extras();
    match cli.command {
        Command::Catalog => Ok(commands::list_catalog(&config, &catalog)),
        Command::Order(args) => commands::place_order(&config, catalog, &args.into()),
    }
}

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,pizzeria_core=debug,pizzeria_cli=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=warn` - Quiet: rejections and bad config only
/// - `RUST_LOG=pizzeria_core=trace` - Trace the core only
/// - Default: [`DEFAULT_LOG_FILTER`], info everywhere, debug from the pizzeria crates
///
/// Logs go to stderr so stdout stays clean for `--json`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
