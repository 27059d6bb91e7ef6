//! Commit-or-rollback wrapper around a unit of work.
//!
//! ```ignore
//! let saved = in_transaction(&pool, move |tx| {
//!     Box::pin(async move { repository.save(tx, category).await.map_err(Into::into) })
//! })
//! .await?;
//! ```
//!
//! The transaction handle is passed explicitly to every repository call. If the
//! surrounding request future is dropped before the wrapper finishes, the
//! uncommitted `sqlx::Transaction` is dropped too and the driver rolls it back.

use futures::future::BoxFuture;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, error};

use crate::database::manager::DatabaseError;

/// Transaction handle threaded through repository calls
pub type Tx = Transaction<'static, Sqlite>;

/// Run `work` inside a fresh transaction.
///
/// `Ok` commits and returns the value. `Err` rolls back and returns the original
/// error unchanged. A failure to commit or roll back is reported as
/// [`DatabaseError::Commit`] / [`DatabaseError::Rollback`].
pub async fn in_transaction<T, E, F>(pool: &SqlitePool, work: F) -> Result<T, E>
where
    F: for<'c> FnOnce(&'c mut Tx) -> BoxFuture<'c, Result<T, E>>,
    E: From<DatabaseError> + std::fmt::Display,
{
    let mut tx = pool.begin().await.map_err(DatabaseError::Begin)?;

    match work(&mut tx).await {
        Ok(value) => {
            if let Err(e) = tx.commit().await {
                error!("Transaction commit failed: {}", e);
                return Err(DatabaseError::Commit(e).into());
            }
            debug!("Transaction committed");
            Ok(value)
        }
        Err(err) => {
            if let Err(e) = tx.rollback().await {
                error!("Transaction rollback failed: {} (original failure: {})", e, err);
                return Err(DatabaseError::Rollback(e).into());
            }
            debug!("Transaction rolled back: {}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::database::manager::DatabaseManager;

    #[derive(Debug, thiserror::Error)]
    enum WorkError {
        #[error("work failed: {0}")]
        Failed(&'static str),
        #[error(transparent)]
        Database(#[from] DatabaseError),
    }

    async fn memory_pool() -> SqlitePool {
        let mut config = AppConfig::development().database;
        config.url = "sqlite::memory:".to_string();
        let pool = DatabaseManager::connect(&config).await.unwrap();
        DatabaseManager::migrate(&pool).await.unwrap();
        pool
    }

    async fn count(pool: &SqlitePool) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await
            .unwrap();
        count
    }

    #[tokio::test]
    async fn commits_on_success() {
        let pool = memory_pool().await;

        let id = in_transaction(&pool, |tx| {
            Box::pin(async move {
                let result = sqlx::query("INSERT INTO categories(name) VALUES (?)")
                    .bind("Gadget")
                    .execute(&mut **tx)
                    .await
                    .map_err(DatabaseError::from)?;
                Ok::<_, WorkError>(result.last_insert_rowid())
            })
        })
        .await
        .unwrap();

        assert!(id > 0);
        assert_eq!(count(&pool).await, 1);
    }

    #[tokio::test]
    async fn rolls_back_and_preserves_original_error() {
        let pool = memory_pool().await;

        let result: Result<(), WorkError> = in_transaction(&pool, |tx| {
            Box::pin(async move {
                sqlx::query("INSERT INTO categories(name) VALUES (?)")
                    .bind("Fashion")
                    .execute(&mut **tx)
                    .await
                    .map_err(DatabaseError::from)?;
                Err::<(), _>(WorkError::Failed("after insert"))
            })
        })
        .await;

        assert!(matches!(result, Err(WorkError::Failed("after insert"))));
        assert_eq!(count(&pool).await, 0);
    }

    #[tokio::test]
    async fn store_errors_propagate_after_rollback() {
        let pool = memory_pool().await;

        let result: Result<(), WorkError> = in_transaction(&pool, |tx| {
            Box::pin(async move {
                sqlx::query("INSERT INTO categories(name) VALUES (?)")
                    .bind("Fashion")
                    .execute(&mut **tx)
                    .await
                    .map_err(DatabaseError::from)?;
                // NOT NULL constraint violation
                sqlx::query("INSERT INTO categories(name) VALUES (NULL)")
                    .execute(&mut **tx)
                    .await
                    .map_err(DatabaseError::from)?;
                Ok::<_, WorkError>(())
            })
        })
        .await;

        assert!(matches!(
            result,
            Err(WorkError::Database(DatabaseError::Sqlx(_)))
        ));
        assert_eq!(count(&pool).await, 0);
    }

    #[tokio::test]
    async fn dropped_unit_of_work_rolls_back() {
        let pool = memory_pool().await;

        let work = in_transaction(&pool, |tx| {
            Box::pin(async move {
                sqlx::query("INSERT INTO categories(name) VALUES (?)")
                    .bind("Abandoned")
                    .execute(&mut **tx)
                    .await
                    .map_err(DatabaseError::from)?;
                std::future::pending::<()>().await;
                Ok::<_, WorkError>(())
            })
        });
        let timed_out = tokio::time::timeout(std::time::Duration::from_millis(100), work).await;

        assert!(timed_out.is_err());
        assert_eq!(count(&pool).await, 0);
    }
}
