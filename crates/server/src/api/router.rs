use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{openapi::ApiDoc, state::AppState};

use super::handlers;

pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            handlers::create_category,
            handlers::list_categories
        ))
        .routes(routes!(
            handlers::get_category_by_id,
            handlers::update_category,
            handlers::delete_category
        ))
        .routes(routes!(handlers::health_check))
        .with_state(state)
        .split_for_parts();

    (router, api)
}
