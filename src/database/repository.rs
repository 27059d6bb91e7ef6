use async_trait::async_trait;
use tracing::debug;

use crate::database::manager::DatabaseError;
use crate::database::models::Category;
use crate::database::transaction::Tx;

/// CRUD access to the `categories` table. Every call runs on a transaction the
/// caller has already opened; commit and rollback belong to the caller.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert one row and return the category with its generated `id`
    async fn save(&self, tx: &mut Tx, category: Category) -> Result<Category, DatabaseError>;

    /// Rename the row matching `category.id`. A missing row is not an error here.
    async fn update(&self, tx: &mut Tx, category: Category) -> Result<Category, DatabaseError>;

    /// Delete the row matching `category.id`. A missing row is not an error here.
    async fn delete(&self, tx: &mut Tx, category: &Category) -> Result<(), DatabaseError>;

    async fn find_by_id(&self, tx: &mut Tx, id: i64) -> Result<Option<Category>, DatabaseError>;

    /// All rows in store order
    async fn find_all(&self, tx: &mut Tx) -> Result<Vec<Category>, DatabaseError>;
}

/// SQL implementation of [`CategoryRepository`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlCategoryRepository;

impl SqlCategoryRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CategoryRepository for SqlCategoryRepository {
    async fn save(&self, tx: &mut Tx, mut category: Category) -> Result<Category, DatabaseError> {
        let result = sqlx::query("INSERT INTO categories(name) VALUES (?)")
            .bind(&category.name)
            .execute(&mut **tx)
            .await?;

        category.id = result.last_insert_rowid();
        debug!("Inserted category {}", category.id);
        Ok(category)
    }

    async fn update(&self, tx: &mut Tx, category: Category) -> Result<Category, DatabaseError> {
        let result = sqlx::query("UPDATE categories SET name = ? WHERE id = ?")
            .bind(&category.name)
            .bind(category.id)
            .execute(&mut **tx)
            .await?;

        debug!("Updated category {} ({} rows)", category.id, result.rows_affected());
        Ok(category)
    }

    async fn delete(&self, tx: &mut Tx, category: &Category) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(category.id)
            .execute(&mut **tx)
            .await?;

        debug!("Deleted category {} ({} rows)", category.id, result.rows_affected());
        Ok(())
    }

    async fn find_by_id(&self, tx: &mut Tx, id: i64) -> Result<Option<Category>, DatabaseError> {
        let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(category)
    }

    async fn find_all(&self, tx: &mut Tx) -> Result<Vec<Category>, DatabaseError> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories")
            .fetch_all(&mut **tx)
            .await?;

        Ok(categories)
    }
}
