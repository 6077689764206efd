//! User Queue Service - validates producer input and drives the queue
//!
//! Handlers never reach the queue directly; they go through this service,
//! which owns a handle to the injected `UserQueuePort`.

use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::outbound::UserQueuePort;
use crate::domain::value_objects::{PayloadError, UserPayload};

/// Errors that can occur when adding a user record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddUserError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] PayloadError),

    #[error("Queue is full ({capacity} elements)")]
    QueueFull { capacity: usize },
}

/// Service fronting the shared user queue
#[derive(Clone)]
pub struct UserQueueService {
    queue: Arc<dyn UserQueuePort<UserPayload>>,
}

impl UserQueueService {
    pub fn new(queue: Arc<dyn UserQueuePort<UserPayload>>) -> Self {
        Self { queue }
    }

    /// Validate the raw `data` field and enqueue it.
    ///
    /// An invalid payload never touches the queue.
    pub fn add_user(&self, data: Option<Value>) -> Result<UserPayload, AddUserError> {
        let payload = UserPayload::from_json(data)?;
        if !self.queue.enqueue(payload.clone()) {
            return Err(AddUserError::QueueFull {
                capacity: self.queue.capacity(),
            });
        }
        Ok(payload)
    }

    /// Take the next user record, if any
    pub fn next_user(&self) -> Option<UserPayload> {
        self.queue.dequeue()
    }

    /// Current queue depth, for reporting only
    pub fn queue_size(&self) -> usize {
        self.queue.size()
    }
}
