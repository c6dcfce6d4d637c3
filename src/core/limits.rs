/*!
 * Limits and Constants
 *
 * Centralized location for sizing defaults used by the primitives.
 */

// =============================================================================
// LOCK
// =============================================================================

/// Capacity of the lock's token channel
/// A single slot is what makes the channel a binary flag
pub const LOCK_TOKEN_SLOTS: usize = 1;

// =============================================================================
// PRIORITY QUEUE
// =============================================================================

/// Default initial capacity of a priority queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

/// Initial capacity for queues expected to stay tiny
pub const SMALL_QUEUE_CAPACITY: usize = 4;

/// Initial capacity for queues expected to hold many items
/// [PERF] Avoids repeated reallocation of the heap storage and item table
pub const LARGE_QUEUE_CAPACITY: usize = 4096;
