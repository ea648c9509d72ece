use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::{Category, UpdateCategory};
use crate::repositories::{CategoryRepository, RepositoryError};

/// In-memory category store. Exists to prove the repository seam: the service
/// and handlers run against it unchanged, which is how the test suites avoid a
/// live database.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    categories: Vec<Category>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, mut category: Category) -> Result<Category, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        category.id = inner.next_id;
        inner.categories.push(category.clone());
        Ok(category)
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        inner
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.categories.clone())
    }

    async fn update(&self, id: i64, data: UpdateCategory) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let category = inner
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        category.name = data.name;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.categories.len();
        inner.categories.retain(|c| c.id != id);
        if inner.categories.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
