//! User DTOs for registration.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::User;

/// Request body for `POST /v1/users`.
#[derive(Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterUserRequest {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login address.
    #[serde(default)]
    pub email: String,
    /// Plaintext password, 8 to 72 bytes.
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Single-user envelope: `{"user": {...}}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    /// The user.
    pub user: User,
}
