use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{TextExtractor, TokenVerifier};
use crate::domain::MAX_DOCUMENT_BYTES;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{categories_handler, classify_handler, status_handler};
use crate::presentation::state::AppState;

pub fn create_router<E, T>(state: AppState<E, T>) -> Router
where
    E: TextExtractor + 'static,
    T: TokenVerifier + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/status", get(status_handler))
        .route("/categories", get(categories_handler))
        .route("/classify", post(classify_handler::<E, T>))
        // Twice the document cap so oversized uploads reach the gateway's
        // own size check and get a 413 instead of a transport error.
        .layer(DefaultBodyLimit::max(MAX_DOCUMENT_BYTES * 2))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
