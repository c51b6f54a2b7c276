//! Router de la API
//!
//! Monta las rutas del catálogo bajo `/api/cars` junto al health check.

pub mod car_routes;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_layer;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Construir la aplicación completa con sus capas
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/cars", car_routes::create_car_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check con el tamaño actual del catálogo
async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let cars = state.store.count().await?;
    Ok(Json(json!({
        "status": "ok",
        "cars": cars,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
