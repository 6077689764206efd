//! User queue API routes

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{AddUserRequest, AddUserResponse, GetUserResponse};
use crate::application::services::AddUserError;
use crate::infrastructure::state::AppState;

/// Enqueue a user record
///
/// Body extraction failures (bad JSON, wrong content type) are folded into
/// the same 400 response as a missing or empty `data` field.
pub async fn add_user(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AddUserRequest>, JsonRejection>,
) -> (StatusCode, Json<AddUserResponse>) {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Invalid request body: {}", rejection.body_text());
            return (StatusCode::BAD_REQUEST, Json(AddUserResponse::rejected()));
        }
    };
    tracing::info!("Received request to add user: {:?}", request.data);

    match state.user_queue_service.add_user(request.data) {
        Ok(payload) => {
            tracing::info!("User added to the queue: {:?}", payload.as_str());
            (StatusCode::CREATED, Json(AddUserResponse::added()))
        }
        Err(AddUserError::InvalidPayload(e)) => {
            tracing::warn!("Invalid request payload: {}", e);
            (StatusCode::BAD_REQUEST, Json(AddUserResponse::rejected()))
        }
        Err(e @ AddUserError::QueueFull { .. }) => {
            tracing::warn!("Unable to add user: {}", e);
            (StatusCode::TOO_MANY_REQUESTS, Json(AddUserResponse::rejected()))
        }
    }
}

/// Dequeue the next user record; 204 when nothing is waiting
pub async fn get_user(State(state): State<Arc<AppState>>) -> (StatusCode, Json<GetUserResponse>) {
    tracing::info!("Received request to fetch next user");

    match state.user_queue_service.next_user() {
        Some(payload) => {
            tracing::info!("User fetched from queue: {:?}", payload.as_str());
            (
                StatusCode::OK,
                Json(GetUserResponse::found(payload.into_inner())),
            )
        }
        None => {
            tracing::warn!("Queue is empty, no users to fetch");
            (StatusCode::NO_CONTENT, Json(GetUserResponse::empty()))
        }
    }
}
