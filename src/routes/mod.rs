//! Router assembly: HTTP endpoints, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - catalog and question API under `/api/...`
/// - answer grading at `/api/check-answer`
/// - static SPA from `./static` with index fallback
/// - CORS from config (any origin when none are configured)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    let cors = cors_layer(&state.server.cors_origins);

    Router::new()
        .route("/", get(http::http_root))
        .route("/api/v1/health", get(http::http_health))
        // Catalog
        .route("/api/grades", get(http::http_get_grades))
        .route("/api/hanja/:grade", get(http::http_get_hanja_by_grade))
        .route("/api/hanja/character/:character", get(http::http_get_hanja_by_character))
        // Questions
        .route("/api/questions/multiple-choice/:grade", post(http::http_post_multiple_choice))
        .route("/api/questions/subjective/:grade", post(http::http_post_subjective))
        .route("/api/questions/hanja-word/:grade", post(http::http_post_word_multiple_choice))
        .route("/api/questions/hanja-word-subjective/:grade", post(http::http_post_word_subjective))
        // Grading
        .route("/api/check-answer", post(http::http_post_check_answer))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() || origins.iter().any(|o| o.trim() == "*") {
        return layer.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(target: "hanja_quiz", origin = %o, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
