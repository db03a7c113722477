//! Vitrine CLI - inspect carts, discounts and addresses against mock data.
//!
//! # Usage
//!
//! ```bash
//! # Render the cart drawer from the bundled fixture
//! vitrine cart show
//!
//! # Apply quantity changes in order, then render
//! vitrine cart apply increase:p-1 decrease:p-2 remove:p-3
//!
//! # Render the order summary
//! vitrine summary
//!
//! # Compute the discount badge for a price pair
//! vitrine discount --price 799.90 --old-price 999.90
//!
//! # Validate an address
//! vitrine address validate --label Casa --street "Rua das Flores" --number 123 \
//!     --neighborhood Centro --city "João Monlevade" --state MG --zip 35930000
//!
//! # List states, or the cities of one state
//! vitrine address options --state MG
//! ```
//!
//! # Commands
//!
//! - `cart show` / `cart apply` - Cart drawer (or card) view
//! - `summary` - Order summary view
//! - `favorites` - Favorite cards
//! - `product` - Product detail view
//! - `discount` - Discount normalization
//! - `address validate` / `address options` - Address form helpers
//!
//! Output is JSON on stdout. Logs go to stderr; see `RUST_LOG` / `VITRINE_LOG`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_storefront::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine storefront tools")]
struct Cli {
    /// Fixture to load instead of `VITRINE_FIXTURE`
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the cart
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
    /// Render the order summary
    Summary,
    /// Render the favorite cards
    Favorites,
    /// Render the product detail page
    Product,
    /// Normalize a discount
    Discount {
        /// Current price
        #[arg(long)]
        price: Decimal,

        /// Price before the markdown
        #[arg(long)]
        old_price: Option<Decimal>,

        /// Explicit discount, as a fraction (0.15) or percentage (15)
        #[arg(long)]
        discount: Option<Decimal>,
    },
    /// Address form helpers
    Address {
        #[command(subcommand)]
        action: AddressCommand,
    },
}

#[derive(Subcommand)]
enum CartCommand {
    /// Render the cart as mounted
    Show {
        /// Render the compact card instead of the drawer
        #[arg(long)]
        card: bool,
    },
    /// Apply `increase:<id>`, `decrease:<id>` or `remove:<id>` actions in order
    Apply {
        #[arg(required = true)]
        actions: Vec<String>,
    },
}

#[derive(Subcommand)]
enum AddressCommand {
    /// Validate address fields
    Validate(commands::address::AddressArgs),
    /// List state options, or city options for a state
    Options {
        /// Two-letter state code
        #[arg(long)]
        state: Option<String>,
    },
}

fn main() {
    let config = StorefrontConfig::from_env();

    // RUST_LOG wins; otherwise VITRINE_LOG, otherwise info
    let default_filter = config
        .as_ref()
        .map_or("info", |config| config.log_filter.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> =
        config.map_err(Into::into).and_then(|config| run(cli, config));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, mut config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = cli.fixture {
        config.fixture_path = path;
    }

    match cli.command {
        Commands::Cart { action } => match action {
            CartCommand::Show { card } => commands::cart::show(&config, card)?,
            CartCommand::Apply { actions } => commands::cart::apply(&config, &actions)?,
        },
        Commands::Summary => commands::cart::summary(&config)?,
        Commands::Favorites => commands::catalog::favorites(&config)?,
        Commands::Product => commands::catalog::product(&config)?,
        Commands::Discount {
            price,
            old_price,
            discount,
        } => commands::discount::run(&config, price, old_price, discount)?,
        Commands::Address { action } => match action {
            AddressCommand::Validate(args) => commands::address::validate(args)?,
            AddressCommand::Options { state } => commands::address::options(state.as_deref())?,
        },
    }
    Ok(())
}
