//! Liveness and queue depth routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::{HealthResponse, MetricsResponse};
use crate::infrastructure::state::AppState;

/// Liveness probe; never touches the queue
pub async fn health_check() -> Json<HealthResponse> {
    tracing::debug!("Health check requested");
    Json(HealthResponse::healthy())
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
    let queue_size = state.user_queue_service.queue_size();
    tracing::info!("Metrics requested, queue size: {}", queue_size);
    Json(MetricsResponse { queue_size })
}
