//! Database connection pool management
//!
//! One `PgPool` per process, built from `DatabaseConfig` and handed to the
//! gateway. Each operation holds a connection for a single statement.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::DbResult;

/// Build connect options from a URL if configured, else from discrete fields.
pub fn connect_options(config: &DatabaseConfig) -> DbResult<PgConnectOptions> {
    let options = match &config.url {
        Some(url) => PgConnectOptions::from_str(url)?,
        None => PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database),
    };
    Ok(options.application_name("lightbnb"))
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns `DbError::Connection` if the options are invalid or the first
/// connection cannot be established.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> DbResult<PgPool> {
    let options = connect_options(config)?;
    let host = options.get_host().to_owned();
    let port = options.get_port();
    let database = options.get_database().unwrap_or("<default>").to_owned();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(options)
        .await?;

    info!(%database, %host, port, "connected to database");
    Ok(pool)
}
