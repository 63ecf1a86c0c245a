use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::{self, handlers};
use crate::shared::app_state::AppState;

/// Configuration of every application route
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D402 SALES OVERVIEW
        // ========================================
        .route(
            "/api/d402/options",
            get(handlers::d402_sales_overview::get_options),
        )
        .route(
            "/api/d402/report",
            post(handlers::d402_sales_overview::post_report),
        )
        .route(
            "/api/d402/report/default",
            get(handlers::d402_sales_overview::get_default_report),
        )
        // ========================================
        // INDICATORS CATALOGUE
        // ========================================
        .route(
            "/api/indicators/meta",
            get(handlers::indicators::get_indicator_catalog),
        )
        .layer(middleware::from_fn(api::middleware::request_logger))
        .with_state(state)
}
