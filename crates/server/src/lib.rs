pub mod api;
pub mod banner;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use utoipa_scalar::{Scalar, Servable};

pub use api::create_router;
pub use banner::print_banner;
pub use config::Config;
pub use db::create_pool;
pub use error::{AppError, AppResult};
pub use repositories::{CategoryRepository, PostgresCategoryRepository};
pub use services::CategoryService;
pub use state::AppState;

pub async fn run_server(addr: SocketAddr, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let pool = create_pool(&config.database_url()).await?;

    let state = AppState::new(Arc::new(PostgresCategoryRepository::new(pool)));

    let (router, api) = create_router(state);

    // Serve the generated OpenAPI document alongside the API
    let app = router.merge(Scalar::with_url("/docs", api));

    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
