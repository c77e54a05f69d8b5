//! Subcommands - one per gateway operation, plus fixture seeding
//!
//! Commands talk to `&dyn Store` and write JSON to the writer they are
//! given, so they run the same against PostgreSQL or a test double.

pub mod properties;
pub mod reservations;
pub mod seed;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use lightbnb_db::{Limit, Store};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up or create users
    User(user::UserArgs),
    /// List a guest's reservations with their properties
    Reservations(reservations::ReservationsArgs),
    /// Search or add properties
    Properties(properties::PropertiesArgs),
    /// Load users and properties from a JSON fixture file
    Seed(seed::SeedArgs),
}

pub async fn run(
    command: Commands,
    store: &dyn Store,
    default_limit: Limit,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::User(args) => user::run(args, store, out).await,
        Commands::Reservations(args) => reservations::run(args, store, default_limit, out).await,
        Commands::Properties(args) => properties::run(args, store, default_limit, out).await,
        Commands::Seed(args) => seed::run(args, store, out).await,
    }
}

/// Pretty-print `value` as JSON followed by a newline.
pub(crate) fn emit<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Read a JSON document from `path`, or stdin when `path` is `-`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_writes_pretty_json_line() {
        let mut out = Vec::new();
        emit(&mut out, &serde_json::json!({"id": 1})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"id\": 1\n}\n");
    }

    #[test]
    fn read_json_reports_path_on_bad_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = read_json::<serde_json::Value>(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn read_json_missing_file() {
        let err = read_json::<serde_json::Value>(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
