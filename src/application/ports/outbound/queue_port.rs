//! Queue port - the narrow interface request handling uses to reach the queue

/// Bounded FIFO of elements shared by every request-handling thread.
///
/// None of the operations may block waiting for space or for an element:
/// a full queue and an empty queue are ordinary outcomes, reported through
/// the return values.
pub trait UserQueuePort<T>: Send + Sync {
    /// Append `item` at the tail. Returns `false` without touching the queue
    /// when it already holds `capacity()` elements.
    #[must_use]
    fn enqueue(&self, item: T) -> bool;

    /// Remove and return the head element, or `None` when empty.
    fn dequeue(&self) -> Option<T>;

    /// Length at some instant during the call. Reporting only.
    fn size(&self) -> usize;

    /// Maximum number of elements held at once
    fn capacity(&self) -> usize;
}
