use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repositories::{CategoryRepository, RepositoryError};

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    InvalidName,
    #[error("category not found")]
    NotFound,
    #[error("repository error: {0}")]
    Repository(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<RepositoryError> for CategoryError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => CategoryError::NotFound,
            RepositoryError::Storage(e) => CategoryError::Repository(e),
        }
    }
}

/// Business-rule layer for categories. Owns validation and entity
/// construction; persistence goes through the repository trait.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Create a category. The creation timestamp is stamped here, the id is
    /// assigned by the store.
    pub async fn create(&self, data: CreateCategory) -> Result<Category, CategoryError> {
        if data.name.is_empty() {
            return Err(CategoryError::InvalidName);
        }

        let category = Category {
            id: 0,
            name: data.name,
            created_at: Utc::now(),
        };

        Ok(self.repo.create(category).await?)
    }

    pub async fn list(&self) -> Result<Vec<Category>, CategoryError> {
        Ok(self.repo.list_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Category, CategoryError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    /// Rename a category. Only the name is mutable through this path; the
    /// creation timestamp is left untouched by the repository.
    pub async fn update(&self, id: i64, data: UpdateCategory) -> Result<(), CategoryError> {
        if data.name.is_empty() {
            return Err(CategoryError::InvalidName);
        }

        Ok(self.repo.update(id, data).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), CategoryError> {
        Ok(self.repo.delete(id).await?)
    }
}
