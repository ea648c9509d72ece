use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::{Category, UpdateCategory};

/// Errors surfaced by repository implementations. Store-specific error types
/// stay below this boundary; anything that is not a missing row crosses it as
/// an opaque boxed error.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            other => RepositoryError::Storage(Box::new(other)),
        }
    }
}

/// Persistence contract for categories. The service layer only ever sees this
/// trait, so store backends and test doubles are interchangeable.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persist a new category and return it with the store-assigned id.
    async fn create(&self, category: Category) -> Result<Category, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError>;

    /// All categories in store order; an empty store yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Overwrite the mutable fields of the category with the given id.
    /// A missing id is `NotFound`, symmetric with `get_by_id`.
    async fn update(&self, id: i64, data: UpdateCategory) -> Result<(), RepositoryError>;

    /// Hard delete. A missing id is `NotFound`.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, RepositoryError> {
        let created = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, created_at)
            VALUES ($1, $2)
            RETURNING id, name, created_at
            "#,
        )
        .bind(&category.name)
        .bind(category.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, created_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        category.ok_or(RepositoryError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name, created_at FROM categories")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    async fn update(&self, id: i64, data: UpdateCategory) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE categories SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(&data.name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
