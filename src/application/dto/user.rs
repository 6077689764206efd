//! Request and response bodies for the queue endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of POST /add-user.
///
/// `data` is kept as a raw JSON value so that a missing field, a non-string
/// and an empty string are all validated in one place.
#[derive(Debug, Default, Deserialize)]
pub struct AddUserRequest {
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddUserResponse {
    pub error: bool,
    pub is_added: bool,
}

impl AddUserResponse {
    pub fn added() -> Self {
        Self {
            error: false,
            is_added: true,
        }
    }

    /// Shared by invalid input and a full queue; the status code tells them apart
    pub fn rejected() -> Self {
        Self {
            error: true,
            is_added: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub error: bool,
    pub data: Option<String>,
}

impl GetUserResponse {
    pub fn found(data: String) -> Self {
        Self {
            error: false,
            data: Some(data),
        }
    }

    pub fn empty() -> Self {
        Self {
            error: false,
            data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub queue_size: usize,
}
