//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use crate::error::{ServiceError, ServiceResult};
use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, server: &ServerConfig) -> ServiceResult<Router> {
    let cors = cors_layer(&server.allowed_origins)?;

    Ok(Router::new()
        .route("/analyze_plot/:plot_id", get(handlers::analyze_plot))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

/// CORS policy for a fixed origin allow-list with credentials.
///
/// Credentialed responses cannot use `*`, so methods and headers are mirrored
/// from the preflight request instead.
pub fn cors_layer(origins: &[String]) -> ServiceResult<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                ServiceError::Config(format!("Invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
