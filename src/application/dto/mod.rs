//! Data transfer objects for the HTTP API

mod user;

pub use user::{AddUserRequest, AddUserResponse, GetUserResponse, HealthResponse, MetricsResponse};
