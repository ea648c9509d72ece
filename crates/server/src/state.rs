use std::sync::Arc;

use crate::repositories::CategoryRepository;
use crate::services::CategoryService;

#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService>,
}

impl AppState {
    /// Wire the service layer over whichever repository backend the caller
    /// provides (Postgres in production, in-memory in tests).
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(category_repo)),
        }
    }
}
