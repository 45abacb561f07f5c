//! Data access layer: entity definitions, validation rules, and the
//! PostgreSQL-backed models.
//!
//! Every model holds a cloned `sqlx::PgPool` handle and bounds each
//! database call by a per-call timeout. "No rows" results are translated
//! into [`ModelError::NotFound`] or [`ModelError::EditConflict`]; every
//! other store error is passed through untouched.

pub mod filters;
pub mod games;
pub mod users;

use std::future::Future;
use std::time::Duration;

use sqlx::PgPool;

pub use filters::{Filters, Metadata, calculate_metadata, validate_filters};
pub use games::{Game, GameModel, validate_game};
pub use users::{User, UserModel, validate_user};

/// Default bound on a single database call.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Failure kinds surfaced by the data layer.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No row matched the requested id (or the id was not positive).
    #[error("record not found")]
    NotFound,

    /// The update matched no row: the version was stale or the row is gone.
    #[error("edit conflict")]
    EditConflict,

    /// Another user already registered this email address.
    #[error("duplicate email")]
    DuplicateEmail,

    /// The requested sort value is not in the safelist.
    #[error("unsafe sort parameter: {0}")]
    UnsafeSort(String),

    /// The database call did not finish within the configured bound.
    #[error("database call timed out after {0:?}")]
    Timeout(Duration),

    /// Any other store or transport error, passed through.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Runs a database future, failing with [`ModelError::Timeout`] if it does
/// not complete within `limit`.
pub(crate) async fn bounded<T, F>(limit: Duration, fut: F) -> Result<T, ModelError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(ModelError::from),
        Err(_) => Err(ModelError::Timeout(limit)),
    }
}

/// Aggregate of every model, built from one shared connection pool.
#[derive(Debug, Clone)]
pub struct Models {
    /// Game catalog access.
    pub games: GameModel,
    /// User account access.
    pub users: UserModel,
}

impl Models {
    /// Creates all models over `pool`, bounding each call by `query_timeout`.
    #[must_use]
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            games: GameModel::new(pool.clone(), query_timeout),
            users: UserModel::new(pool, query_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bounded_passes_through_success() {
        let result = bounded(Duration::from_secs(1), async { Ok::<_, sqlx::Error>(7) }).await;
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn bounded_passes_through_store_error() {
        let result: Result<(), _> = bounded(Duration::from_secs(1), async {
            Err(sqlx::Error::PoolTimedOut)
        })
        .await;
        assert!(matches!(
            result,
            Err(ModelError::Database(sqlx::Error::PoolTimedOut))
        ));
    }

    #[tokio::test]
    async fn bounded_times_out_slow_calls() {
        let limit = Duration::from_millis(20);
        let result: Result<(), _> = bounded(limit, async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(ModelError::Timeout(d)) if d == limit));
    }
}
