/*!
 * Lock-Based Synchronization Primitives
 *
 * - Locker / TryLocker traits (blocking and non-blocking acquisition)
 * - Channel-backed exclusive lock
 * - Scoped guard that releases on drop
 */

mod channel;
mod guard;
mod traits;

// Re-export public API
pub use channel::{new_try_locker, ChannelLock};
pub use guard::ChannelLockGuard;
pub use traits::{Locker, TryLocker};
