//! lightbnb CLI - LightBnB data gateway from the command line
//!
//! Each subcommand maps onto one gateway operation and prints JSON:
//! - `user show|add`
//! - `reservations`
//! - `properties search|add`
//! - `seed` to load users and properties from a fixture file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{create_pool, Gateway, LightbnbConfig};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and seed the LightBnB rental database",
    long_about = "Look up users, list reservations, and search or add properties in the \
                  LightBnB PostgreSQL database. Output is JSON on stdout; logs go to stderr."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    /// Config file (default: ~/.lightbnb/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so DATABASE_URL from .env reaches clap
    let loaded_from = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    config::report_dotenv(&loaded_from);

    let cfg = LightbnbConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let database = cfg.database.clone().with_url_override(cli.database_url);

    let pool = create_pool(&database)
        .await
        .context("Failed to create database pool")?;
    let gateway = Gateway::new(pool);

    let mut stdout = std::io::stdout();
    let result = commands::run(
        cli.command,
        &gateway,
        cfg.search.default_limit(),
        &mut stdout,
    )
    .await;

    gateway.close().await;
    result
}
