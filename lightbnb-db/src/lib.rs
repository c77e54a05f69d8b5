//! lightbnb-db: PostgreSQL data gateway for the LightBnB rental app
//!
//! Users, reservations and property search/insert, each a single
//! parameterized statement issued through a shared `PgPool`.
//!
//! ```ignore
//! let config = LightbnbConfig::load(None)?;
//! let gateway = Gateway::new(create_pool(&config.database).await?);
//! let cheap = gateway
//!     .search_properties(
//!         &SearchOptions {
//!             city: Some("Vancouver".into()),
//!             minimum_price_per_night: Some(50),
//!             maximum_price_per_night: Some(150),
//!             ..Default::default()
//!         },
//!         Limit::default(),
//!     )
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod models;
pub mod search;

pub use config::{ConfigError, DatabaseConfig, LightbnbConfig, SearchConfig};
pub use db::create_pool;
pub use error::{DbError, DbResult};
pub use gateway::{Gateway, Store};
pub use models::{
    Email, GuestReservation, Limit, NewProperty, NewUser, Property, PropertyListing, User,
    ValidationError,
};
pub use search::{Predicate, PropertySearch, SearchOptions};
