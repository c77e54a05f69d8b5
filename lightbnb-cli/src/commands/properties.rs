//! `lightbnb properties` - search and insert listings

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lightbnb_db::{Limit, NewProperty, SearchOptions, Store};
use tracing::{info, warn};

use super::{emit, read_json};

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommands,
}

#[derive(Subcommand, Debug)]
pub enum PropertiesCommands {
    /// Search properties (owner listing, or filtered by city/price/rating)
    Search(SearchArgs),
    /// Add a property from a JSON document
    Add(AddArgs),
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// List this owner's properties; all other filters are ignored
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// City substring to match
    #[arg(long)]
    pub city: Option<String>,

    /// Minimum nightly price in dollars (needs --max-price)
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum nightly price in dollars (needs --min-price)
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Minimum average review rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum properties to return (1-100, default from config)
    #[arg(long)]
    pub limit: Option<u32>,
}

impl SearchArgs {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            owner_id: self.owner_id,
            city: self.city.clone(),
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        }
    }

    fn warn_ignored_filters(&self) {
        let has_filters = self.city.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.min_rating.is_some();

        if self.owner_id.is_some() && has_filters {
            warn!("--owner-id lists every property of that owner; other filters are ignored");
        } else if self.min_price.is_some() != self.max_price.is_some() {
            warn!("price range needs both --min-price and --max-price; ignoring it");
        }
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Path to a JSON property document ("-" for stdin); cost_per_night in cents
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,
}

pub async fn run(
    args: PropertiesArgs,
    store: &dyn Store,
    default_limit: Limit,
    out: &mut dyn Write,
) -> Result<()> {
    match args.command {
        PropertiesCommands::Search(search) => {
            search.warn_ignored_filters();
            let limit = search.limit.map(Limit::new).unwrap_or(default_limit);
            let rows = store
                .search_properties(&search.options(), limit)
                .await
                .context("Property search failed")?;
            emit(out, &rows)
        }
        PropertiesCommands::Add(add) => {
            let property: NewProperty = read_json(&add.file)?;
            let rows = store
                .add_property(&property)
                .await
                .context("Failed to add property")?;
            info!(count = rows.len(), "property added");
            emit(out, &rows)
        }
    }
}
