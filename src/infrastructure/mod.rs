//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Queues: the in-memory bounded queue behind `UserQueuePort`
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - State: Shared application state
//! - Shutdown: Termination signal handling

pub mod config;
pub mod http;
pub mod queues;
pub mod shutdown;
pub mod state;
