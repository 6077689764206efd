//! Shared application state

use std::sync::Arc;

use crate::application::services::UserQueueService;
use crate::domain::value_objects::UserPayload;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::queues::BoundedQueue;

/// Shared application state, handed to every handler through axum's `State`
pub struct AppState {
    pub config: AppConfig,
    pub user_queue_service: UserQueueService,
}

impl AppState {
    /// Build the state with a fresh queue sized from the configuration
    pub fn new(config: AppConfig) -> Self {
        let queue: Arc<BoundedQueue<UserPayload>> =
            Arc::new(BoundedQueue::new(config.queue_capacity));
        let user_queue_service = UserQueueService::new(queue);

        Self {
            config,
            user_queue_service,
        }
    }
}
