//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One statement per operation, no multi-statement transactions
//! - Every value reaches SQL as a bind parameter
//! - Rely on DB constraints and surface violations as typed errors

pub mod pool;
pub mod repos;

pub use pool::{connect_options, create_pool};
pub use repos::*;
