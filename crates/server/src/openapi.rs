use utoipa::OpenApi;

use crate::api::handlers::HealthResponse;
use crate::error::ErrorResponse;
use crate::models::{Category, CreateCategory, UpdateCategory};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock Service API",
        description = "Inventory management microservice",
        version = "1.0.0"
    ),
    tags(
        (name = "categories", description = "Category management endpoints"),
        (name = "health", description = "Service health endpoints")
    ),
    components(schemas(
        Category,
        CreateCategory,
        UpdateCategory,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;
