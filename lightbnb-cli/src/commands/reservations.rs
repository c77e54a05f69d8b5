//! `lightbnb reservations` - a guest's bookings

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{Limit, Store};

use super::emit;

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest (user) id
    #[arg(long)]
    pub guest_id: i32,

    /// Maximum reservations to return (1-100, default from config)
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run(
    args: ReservationsArgs,
    store: &dyn Store,
    default_limit: Limit,
    out: &mut dyn Write,
) -> Result<()> {
    let limit = args.limit.map(Limit::new).unwrap_or(default_limit);
    let rows = store
        .reservations_for_guest(args.guest_id, limit)
        .await
        .with_context(|| format!("Failed to list reservations for guest {}", args.guest_id))?;

    emit(out, &rows)
}
