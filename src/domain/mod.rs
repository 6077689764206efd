//! Domain layer - Core types with no transport or storage concerns
//!
//! This layer contains:
//! - Value Objects: the validated user payload carried by the queue

pub mod value_objects;
