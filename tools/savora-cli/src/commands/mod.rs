//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod menu;
pub mod offers;
pub mod profile;
pub mod theme;
pub mod track;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use savora_commerce::catalog::Product;

/// Resolve a menu item from an id or (partial) name.
pub(crate) fn find_product(query: &str) -> Result<Product> {
    let menu = savora_backend::data::menu();
    if let Some(product) = menu.iter().find(|p| p.id.as_str() == query) {
        return Ok(product.clone());
    }

    let lowered = query.to_lowercase();
    let mut matches = menu
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&lowered));
    match (matches.next(), matches.next()) {
        (Some(product), None) => Ok(product.clone()),
        (Some(_), Some(_)) => bail!("More than one menu item matches '{}'", query),
        _ => bail!("No menu item matches '{}'", query),
    }
}

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Search the menu by name.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Filter by category slug.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order.
    #[arg(short, long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Only show items in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Show full details for each item.
    #[arg(long)]
    pub detailed: bool,
}

/// Menu sort order.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a menu item to the cart.
    Add {
        /// Product id or name.
        product: String,
        /// How many times to add it.
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Remove an item from the cart.
    Remove {
        /// Product id or name.
        product: String,
    },
    /// Set an item's quantity (0 removes it).
    Set {
        /// Product id or name.
        product: String,
        /// New quantity.
        quantity: u32,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Special instructions for the kitchen.
    #[arg(long)]
    pub instructions: Option<String>,
}

/// Arguments for the track command.
#[derive(Args)]
pub struct TrackArgs {
    /// Order id (e.g. ORD7G2KX91QM). Defaults to the most recent order.
    pub order_id: Option<String>,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Account email.
    #[arg(short, long)]
    pub email: Option<String>,

    /// Account password (prompted when omitted).
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: Option<ProfileCommand>,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show account details.
    Show,
    /// Add a product to favorites.
    Favorite {
        /// Product id or name.
        product: String,
    },
    /// Remove a product from favorites.
    Unfavorite {
        /// Product id or name.
        product: String,
    },
}

/// Arguments for the offers command.
#[derive(Args)]
pub struct OffersArgs {
    /// Apply a discount code.
    #[arg(short, long)]
    pub apply: Option<String>,
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
    /// Write a default savora.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
