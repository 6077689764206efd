//! Application services

mod user_queue_service;

pub use user_queue_service::{AddUserError, UserQueueService};
