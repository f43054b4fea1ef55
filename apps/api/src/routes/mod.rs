pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeFile;

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let landing_page = ServeFile::new(&state.config.index_path);
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route_service("/", landing_page)
        .route("/upload", post(handlers::handle_upload))
        .route("/resume", get(handlers::handle_get_resume))
        .layer(body_limit)
        .with_state(state)
}
