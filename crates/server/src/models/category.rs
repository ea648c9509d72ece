use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category entity, the unit of product classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Store-assigned identifier, immutable after creation
    pub id: i64,
    pub name: String,
    /// Stamped by the service at creation time, not by the store
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategory {
    pub name: String,
}

/// Request body for updating a category; only the name is mutable
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCategory {
    pub name: String,
}
