//! `lightbnb seed` - load fixture users and properties
//!
//! Fixture format:
//!
//! ```json
//! { "users": [NewUser, ...], "properties": [NewProperty, ...] }
//! ```
//!
//! Users go in first so properties can reference them by id. Each record is
//! its own statement; a failure stops the run and earlier rows stay.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{NewProperty, NewUser, Store};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{emit, read_json};

#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Fixture file ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub users: Vec<NewUser>,
    #[serde(default)]
    pub properties: Vec<NewProperty>,
}

/// Ids assigned to the inserted rows, in fixture order
#[derive(Debug, Default, Serialize)]
pub struct SeedReport {
    pub users: Vec<i32>,
    pub properties: Vec<i32>,
}

pub async fn run(args: SeedArgs, store: &dyn Store, out: &mut dyn Write) -> Result<()> {
    let fixture: SeedFile = read_json(&args.file)?;
    let report = seed(&fixture, store).await?;
    info!(
        users = report.users.len(),
        properties = report.properties.len(),
        "seed complete"
    );
    emit(out, &report)
}

pub async fn seed(fixture: &SeedFile, store: &dyn Store) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for (i, user) in fixture.users.iter().enumerate() {
        let created = store
            .add_user(user)
            .await
            .with_context(|| format!("Failed to insert user #{} ({})", i, user.email))?;
        report.users.push(created.id);
    }

    for (i, property) in fixture.properties.iter().enumerate() {
        let rows = store
            .add_property(property)
            .await
            .with_context(|| format!("Failed to insert property #{} ({})", i, property.title))?;
        report.properties.extend(rows.iter().map(|p| p.id));
    }

    Ok(report)
}
