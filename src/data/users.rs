//! User accounts. Passwords are hashed inside PostgreSQL with `pgcrypto`
//! and never leave the database.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{ModelError, bounded};
use crate::validator::{Validator, looks_like_email};

/// Unique constraint guarding `users.email`.
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct User {
    /// Row identifier.
    pub id: i64,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Display name.
    pub name: String,
    /// Login address, unique across users.
    pub email: String,
    /// Whether the account has been activated.
    pub activated: bool,
    /// Concurrency token.
    #[serde(skip)]
    pub version: Uuid,
}

impl User {
    /// Builds an unsaved, inactive user.
    #[must_use]
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: 0,
            created_at: DateTime::<Utc>::default(),
            name,
            email,
            activated: false,
            version: Uuid::nil(),
        }
    }
}

/// Records every rule the user (and the plaintext password, when one is
/// being set) breaks.
pub fn validate_user(v: &mut Validator, user: &User, password: Option<&str>) {
    v.check(!user.name.is_empty(), "name", "must be provided");
    v.check(
        user.name.len() <= 500,
        "name",
        "must not be more than 500 bytes long",
    );

    v.check(!user.email.is_empty(), "email", "must be provided");
    v.check(
        looks_like_email(&user.email),
        "email",
        "must be a valid email address",
    );

    if let Some(password) = password {
        v.check(!password.is_empty(), "password", "must be provided");
        v.check(
            password.len() >= 8,
            "password",
            "must be at least 8 bytes long",
        );
        v.check(
            password.len() <= 72,
            "password",
            "must not be more than 72 bytes long",
        );
    }
}

/// Maps a unique violation on the email column to
/// [`ModelError::DuplicateEmail`].
fn map_duplicate_email(err: ModelError) -> ModelError {
    match err {
        ModelError::Database(sqlx::Error::Database(ref db))
            if db.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
        {
            ModelError::DuplicateEmail
        }
        other => other,
    }
}

/// User table access.
#[derive(Debug, Clone)]
pub struct UserModel {
    pool: PgPool,
    timeout: Duration,
}

impl UserModel {
    /// Creates a model over `pool`, bounding each call by `timeout`.
    #[must_use]
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Inserts `user` with a bcrypt hash of `password` and fills in its id,
    /// creation time, and version.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateEmail`] if the email is taken, or any
    /// other store error.
    pub async fn insert(&self, user: &mut User, password: &str) -> Result<(), ModelError> {
        let (id, created_at, version) = bounded(
            self.timeout,
            sqlx::query_as::<_, (i64, DateTime<Utc>, Uuid)>(
                "INSERT INTO users (name, email, password_hash, activated) \
                 VALUES ($1, $2, crypt($3, gen_salt('bf')), $4) \
                 RETURNING id, created_at, version",
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(password)
            .bind(user.activated)
            .fetch_one(&self.pool),
        )
        .await
        .map_err(map_duplicate_email)?;

        user.id = id;
        user.created_at = created_at;
        user.version = version;
        Ok(())
    }

    /// Fetches the user registered under `email`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no user has that address.
    pub async fn get_by_email(&self, email: &str) -> Result<User, ModelError> {
        bounded(
            self.timeout,
            sqlx::query_as::<_, User>(
                "SELECT id, created_at, name, email, activated, version \
                 FROM users \
                 WHERE email = $1",
            )
            .bind(email)
            .fetch_optional(&self.pool),
        )
        .await?
        .ok_or(ModelError::NotFound)
    }

    /// Writes `user` back if its version still matches, storing the new
    /// version in `user.version`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EditConflict`] if no row matches the id and
    /// version, or [`ModelError::DuplicateEmail`] if the new email is taken.
    pub async fn update(&self, user: &mut User) -> Result<(), ModelError> {
        let version = bounded(
            self.timeout,
            sqlx::query_scalar::<_, Uuid>(
                "UPDATE users \
                 SET name = $1, email = $2, activated = $3, version = gen_random_uuid() \
                 WHERE id = $4 AND version = $5 \
                 RETURNING version",
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.activated)
            .bind(user.id)
            .bind(user.version)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(map_duplicate_email)?;

        user.version = version.ok_or(ModelError::EditConflict)?;
        Ok(())
    }
}
