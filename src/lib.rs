/*!
 * OS Primitives Library
 * Exclusive try-lock and indexed priority queue building blocks
 */

pub mod core;
pub mod monitoring;

// Re-exports
pub use crate::core::data_structures::{heap, Heap, Item, ItemId, PriorityQueue, QueueConfig};
pub use crate::core::errors::*;
pub use crate::core::sync::{new_try_locker, ChannelLock, ChannelLockGuard, Locker, TryLocker};
pub use monitoring::{init_tracing, try_init_tracing};
