/*!
 * Synchronization Primitives
 *
 * Binary exclusive lock with blocking and non-blocking acquisition.
 *
 * # Architecture
 *
 * The lock is a single-slot channel: acquiring sends a token into the slot,
 * releasing takes it back out. Blocking `lock` and non-blocking `try_lock`
 * are the blocking and non-blocking forms of the same send, so there is no
 * separate condvar bookkeeping.
 *
 * # Semantics
 *
 * - No owner identity: any thread may release a lock another thread holds
 * - No fairness among waiters
 * - Releasing a free lock is a programming error and panics
 */

mod locks;

pub use locks::{new_try_locker, ChannelLock, ChannelLockGuard, Locker, TryLocker};
