//! Data Transfer Objects for REST request/response serialization.
//!
//! Request bodies reject unknown fields so that typos surface as 400s
//! instead of being silently ignored.

pub mod common_dto;
pub mod game_dto;
pub mod user_dto;

pub use common_dto::*;
pub use game_dto::*;
pub use user_dto::*;
