//! In-memory bounded queue
//!
//! A single mutex guards the backing `VecDeque`; the length check and the
//! mutation happen under the same guard, so every operation is linearizable
//! and the capacity bound holds at all times.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::application::ports::outbound::UserQueuePort;

/// Default maximum number of queued elements
pub const DEFAULT_QUEUE_CAPACITY: usize = 10_000;

#[derive(Debug)]
pub struct BoundedQueue<T> {
    items: Mutex<VecDeque<T>>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` elements
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    pub fn enqueue(&self, item: T) -> bool {
        let mut items = self.lock();
        if items.len() >= self.capacity {
            return false;
        }
        items.push_back(item);
        true
    }

    pub fn dequeue(&self) -> Option<T> {
        self.lock().pop_front()
    }

    pub fn size(&self) -> usize {
        self.lock().len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // Every critical section is a single push/pop/len, so a panicking holder
    // cannot leave the deque half-updated.
    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }
}

impl<T: Send> UserQueuePort<T> for BoundedQueue<T> {
    fn enqueue(&self, item: T) -> bool {
        BoundedQueue::enqueue(self, item)
    }

    fn dequeue(&self) -> Option<T> {
        BoundedQueue::dequeue(self)
    }

    fn size(&self) -> usize {
        BoundedQueue::size(self)
    }

    fn capacity(&self) -> usize {
        BoundedQueue::capacity(self)
    }
}
