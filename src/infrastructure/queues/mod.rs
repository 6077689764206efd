//! Queue implementations - Infrastructure adapters for queue ports

mod memory_queue;

pub use memory_queue::{BoundedQueue, DEFAULT_QUEUE_CAPACITY};
