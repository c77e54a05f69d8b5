//! Query gateway - the six operations behind one injected pool
//!
//! `Gateway` owns the pool handle it was built with; there is no global
//! connection state. Callers that want to swap in a test double depend on
//! the `Store` trait instead.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{PropertyRepo, ReservationRepo, UserRepo};
use crate::error::{DbError, DbResult};
use crate::models::{GuestReservation, Limit, NewProperty, NewUser, Property, PropertyListing, User};
use crate::search::{PropertySearch, SearchOptions};

/// The gateway's public operations
#[async_trait]
pub trait Store: Send + Sync {
    /// Case-insensitive email lookup
    async fn user_with_email(&self, email: &str) -> DbResult<Option<User>>;

    async fn user_with_id(&self, id: i32) -> DbResult<Option<User>>;

    /// `user_with_id` for callers that need the row to exist
    async fn require_user(&self, id: i32) -> DbResult<User> {
        self.user_with_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Insert a user whose password is already hashed
    async fn add_user(&self, user: &NewUser) -> DbResult<User>;

    async fn reservations_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> DbResult<Vec<GuestReservation>>;

    /// Owner listing when `owner_id` is set, filtered search otherwise
    async fn search_properties(
        &self,
        options: &SearchOptions,
        limit: Limit,
    ) -> DbResult<Vec<PropertyListing>>;

    async fn add_property(&self, property: &NewProperty) -> DbResult<Vec<Property>>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct Gateway {
    pool: PgPool,
}

impl Gateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    pub fn reservations(&self) -> ReservationRepo<'_> {
        ReservationRepo::new(&self.pool)
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(&self.pool)
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Store for Gateway {
    async fn user_with_email(&self, email: &str) -> DbResult<Option<User>> {
        self.users().find_by_email(email).await
    }

    async fn user_with_id(&self, id: i32) -> DbResult<Option<User>> {
        self.users().find_by_id(id).await
    }

    async fn require_user(&self, id: i32) -> DbResult<User> {
        self.users().get(id).await
    }

    async fn add_user(&self, user: &NewUser) -> DbResult<User> {
        self.users().create(user).await
    }

    async fn reservations_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> DbResult<Vec<GuestReservation>> {
        self.reservations().list_for_guest(guest_id, limit).await
    }

    async fn search_properties(
        &self,
        options: &SearchOptions,
        limit: Limit,
    ) -> DbResult<Vec<PropertyListing>> {
        let plan = PropertySearch::plan(options, limit);
        self.properties().search(&plan).await
    }

    async fn add_property(&self, property: &NewProperty) -> DbResult<Vec<Property>> {
        self.properties().create(property).await
    }
}
