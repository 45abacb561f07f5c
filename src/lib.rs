//! # spotlight-api
//!
//! REST API for a catalog of games and users, backed by PostgreSQL.
//!
//! The core is a thin data layer: parameterized SQL per operation, field
//! validation, optimistic-concurrency updates keyed on a version token,
//! and pagination metadata computed from a window count.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── Validator (validator)
//!     ├── Models: GameModel, UserModel (data/)
//!     │
//!     └── PostgreSQL (sqlx::PgPool)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod data;
pub mod error;
pub mod validator;
