//! Savora CLI - the food-delivery storefront in your terminal.
//!
//! Commands:
//! - `savora menu` - Browse the menu
//! - `savora cart` - Manage the cart
//! - `savora checkout` - Walk through checkout and place an order
//! - `savora track` - Track an order
//! - `savora login` / `savora logout` - Manage the session
//! - `savora profile` - Account details and favorites
//! - `savora offers` - List and apply discount codes
//! - `savora theme` - Toggle light/dark theme
//! - `savora config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CartArgs, CheckoutArgs, ConfigArgs, LoginArgs, MenuArgs, OffersArgs, ProfileArgs, TrackArgs,
};

/// Savora - browse, order and track food delivery from the terminal
#[derive(Parser)]
#[command(name = "savora")]
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
    /// Browse the menu
    Menu(MenuArgs),

    /// Show and manage the cart
    Cart(CartArgs),

    /// Walk through checkout and place an order
    Checkout(CheckoutArgs),

    /// Track an order
    Track(TrackArgs),

    /// Sign in
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Account details and favorites
    Profile(ProfileArgs),

    /// List and apply discount codes
    Offers(OffersArgs),

    /// Toggle light/dark theme
    Theme,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "savora_store=debug,savora_backend=debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let mut ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Menu(args) => commands::menu::run(args, &mut ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &mut ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &mut ctx).await,
        Commands::Track(args) => commands::track::run(args, &mut ctx).await,
        Commands::Login(args) => commands::auth::login(args, &mut ctx).await,
        Commands::Logout => commands::auth::logout(&mut ctx).await,
        Commands::Profile(args) => commands::profile::run(args, &mut ctx).await,
        Commands::Offers(args) => commands::offers::run(args, &mut ctx).await,
        Commands::Theme => commands::theme::run(&mut ctx).await,
        Commands::Config(args) => commands::config::run(args, &mut ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
