//! User repository
//!
//! - lookup by email folds case on both sides
//! - create relies on the unique email index for duplicates

use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::{DbError, DbResult};
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by email, ignoring case on both the input and the stored value.
    #[instrument(skip_all, err)]
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE lower(email) = lower($1)
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        debug!(found = user.is_some(), "user lookup by email");
        Ok(user)
    }

    #[instrument(skip(self), err)]
    pub async fn find_by_id(&self, id: i32) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Like `find_by_id`, but a missing row is `DbError::NotFound`.
    pub async fn get(&self, id: i32) -> DbResult<User> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Insert a user and return the stored row with its generated id.
    ///
    /// A duplicate email surfaces as `DbError::ConstraintViolation`.
    #[instrument(skip_all, err)]
    pub async fn create(&self, user: &NewUser) -> DbResult<User> {
        user.validate()?;

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(&user.password)
        .fetch_one(self.pool)
        .await?;

        debug!(id = created.id, "user created");
        Ok(created)
    }
}
