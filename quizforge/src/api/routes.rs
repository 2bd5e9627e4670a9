use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Body limit covers the whole multipart payload: a full batch of
    // max-size files plus form overhead.
    let body_limit =
        DefaultBodyLimit::max(state.config.upload.max_file_size * state.config.upload.max_files);

    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/files:upload", post(handlers::upload_files))
        .route("/files", delete(handlers::clear_files))
        .route("/files/{index}", delete(handlers::remove_file))
        .route("/corpus", get(handlers::get_corpus))
        .route("/questions:generate", post(handlers::generate_questions));

    Router::new()
        .nest("/api/v1", api)
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
