use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers;
use crate::shared::config::Config;
use crate::shared::request_logger::request_logger;

/// Неизменяемое состояние приложения, общее для всех запросов
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let body_limit = state.config.upload.max_body_bytes();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_DISPOSITION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // U508 BENEFICIARY REPORTS
        // ========================================
        .route("/", get(handlers::u508_beneficiary_reports::upload_form))
        .route(
            "/generate_pdfs",
            post(handlers::u508_beneficiary_reports::generate_pdfs),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
