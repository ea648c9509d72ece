use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::state::AppState;

/// Decode a request body, rejecting anything malformed before the service
/// layer is involved.
fn decode_payload<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejected category payload");
            Err(AppError::BadRequest("Invalid request payload".to_string()))
        }
    }
}

/// Parse the path identifier, rejecting non-integers before the service layer
/// is involved.
fn parse_id(id: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejected category id");
            Err(AppError::BadRequest("Invalid ID format".to_string()))
        }
    }
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid payload or empty name", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategory>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let payload = decode_payload(payload)?;
    let category = state.categories.create(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories, store order", body = Vec<Category>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.categories.list().await?;
    Ok(Json(categories))
}

/// Get a category by its identifier
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 400, description = "Invalid ID format", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Category>> {
    let id = parse_id(id)?;
    let category = state.categories.get(id).await?;
    Ok(Json(category))
}

/// Rename an existing category
#[utoipa::path(
    patch,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category identifier")),
    request_body = UpdateCategory,
    responses(
        (status = 204, description = "Category updated"),
        (status = 400, description = "Invalid ID, payload or name", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateCategory>, JsonRejection>,
) -> AppResult<StatusCode> {
    let id = parse_id(id)?;
    let payload = decode_payload(payload)?;
    state.categories.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Invalid ID format", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = parse_id(id)?;
    state.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
