use std::sync::Arc;

use sqlx::SqlitePool;
use thiserror::Error;

use crate::api::category::{to_category_responses, CategoryRequest, CategoryResponse};
use crate::database::manager::DatabaseError;
use crate::database::models::Category;
use crate::database::repository::{CategoryRepository, SqlCategoryRepository};
use crate::database::transaction::in_transaction;
use crate::services::validation::{validate_category_request, ValidationErrors};

pub const CATEGORY_NOT_FOUND: &str = "category is not found";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ServiceError {
    fn category_not_found() -> Self {
        ServiceError::NotFound(CATEGORY_NOT_FOUND.to_string())
    }
}

/// Category use cases. Each call is one unit of work inside one transaction.
#[derive(Clone)]
pub struct CategoryService {
    pool: SqlitePool,
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(pool: SqlitePool, repository: Arc<dyn CategoryRepository>) -> Self {
        Self { pool, repository }
    }

    pub fn with_sql_repository(pool: SqlitePool) -> Self {
        Self::new(pool, Arc::new(SqlCategoryRepository::new()))
    }

    pub async fn create(&self, request: CategoryRequest) -> Result<CategoryResponse, ServiceError> {
        validate_category_request(&request)?;

        let repository = Arc::clone(&self.repository);
        let category = in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let saved = repository.save(tx, Category::unsaved(request.name)).await?;
                Ok::<_, ServiceError>(saved)
            })
        })
        .await?;

        tracing::info!("Created category {}", category.id);
        Ok(category.into())
    }

    /// Rename category `id`. Fails with `NotFound` when no such category exists.
    pub async fn update(
        &self,
        id: i64,
        request: CategoryRequest,
    ) -> Result<CategoryResponse, ServiceError> {
        validate_category_request(&request)?;

        let repository = Arc::clone(&self.repository);
        let category = in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                if repository.find_by_id(tx, id).await?.is_none() {
                    return Err(ServiceError::category_not_found());
                }
                let updated = repository
                    .update(tx, Category { id, name: request.name })
                    .await?;
                Ok::<_, ServiceError>(updated)
            })
        })
        .await?;

        Ok(category.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let repository = Arc::clone(&self.repository);
        in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let category = repository
                    .find_by_id(tx, id)
                    .await?
                    .ok_or_else(ServiceError::category_not_found)?;
                repository.delete(tx, &category).await?;
                Ok::<_, ServiceError>(())
            })
        })
        .await?;

        tracing::info!("Deleted category {}", id);
        Ok(())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<CategoryResponse, ServiceError> {
        let repository = Arc::clone(&self.repository);
        let category = in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                repository
                    .find_by_id(tx, id)
                    .await?
                    .ok_or_else(ServiceError::category_not_found)
            })
        })
        .await?;

        Ok(category.into())
    }

    pub async fn find_all(&self) -> Result<Vec<CategoryResponse>, ServiceError> {
        let repository = Arc::clone(&self.repository);
        let categories = in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let categories = repository.find_all(tx).await?;
                Ok::<_, ServiceError>(categories)
            })
        })
        .await?;

        Ok(to_category_responses(categories))
    }
}
