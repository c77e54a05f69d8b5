//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::require_text;
use super::{Email, ValidationError};

const MAX_NAME_LEN: usize = 255;
const MAX_PASSWORD_LEN: usize = 255;

/// Row from `users`
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored credential, never echoed back out
    #[serde(skip_serializing)]
    pub password: String,
}

/// Insert payload for `users`.
///
/// `password` must already be hashed by the caller; it is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password: String,
}

impl NewUser {
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        let user = Self {
            name: name.to_owned(),
            email: Email::new(email)?,
            password: password.to_owned(),
        };
        user.validate()?;
        Ok(user)
    }

    /// Check field lengths; `email` is already valid by construction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        require_text("password", &self.password, MAX_PASSWORD_LEN)?;
        Ok(())
    }
}
