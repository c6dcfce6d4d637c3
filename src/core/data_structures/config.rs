/*!
 * Priority Queue Configuration
 *
 * Construction-time sizing for priority queues
 */

use crate::core::limits::{DEFAULT_QUEUE_CAPACITY, LARGE_QUEUE_CAPACITY, SMALL_QUEUE_CAPACITY};

/// Priority queue configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Slots reserved up front in the heap storage and item table
    pub initial_capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl QueueConfig {
    /// Configuration for queues that stay tiny
    pub const fn small() -> Self {
        Self {
            initial_capacity: SMALL_QUEUE_CAPACITY,
        }
    }

    /// Configuration for queues expected to hold thousands of items
    pub const fn large() -> Self {
        Self {
            initial_capacity: LARGE_QUEUE_CAPACITY,
        }
    }

    /// Configuration with an explicit initial capacity
    pub const fn with_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}
