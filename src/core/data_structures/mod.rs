/*!
 * Data Structures
 *
 * - Binary heap algorithms over a pluggable storage trait
 * - Indexed priority queue with in-place priority updates
 *
 * # Performance
 *
 * - Insert / extract-min / update: O(log n)
 * - Heapify: O(n)
 *
 * The queue is not synchronized. Share it between threads only behind an
 * external lock.
 */

mod config;
pub mod heap;
mod priority_queue;

pub use config::QueueConfig;
pub use heap::Heap;
pub use priority_queue::{Item, ItemId, PriorityQueue};
