/*!
 * Locking Traits
 *
 * Object-safe abstractions over exclusive locks, so callers can hold an
 * `Arc<dyn TryLocker>` without naming the concrete lock.
 */

use std::sync::Arc;

/// An object that can be locked and unlocked
///
/// Implementations must be safe to share between threads. Unlocking is not
/// tied to the locking thread.
pub trait Locker: Send + Sync {
    /// Acquire the lock, blocking the calling thread until it is available
    fn lock(&self);

    /// Release the lock
    ///
    /// # Panics
    ///
    /// Panics if the lock is not held.
    fn unlock(&self);
}

/// A [`Locker`] that also supports non-blocking acquisition
pub trait TryLocker: Locker {
    /// Acquire the lock only if it is free
    ///
    /// Returns `true` if the lock was acquired, `false` immediately otherwise.
    fn try_lock(&self) -> bool;
}

impl<L: Locker + ?Sized> Locker for Arc<L> {
    #[inline]
    fn lock(&self) {
        (**self).lock()
    }

    #[inline]
    fn unlock(&self) {
        (**self).unlock()
    }
}

impl<L: TryLocker + ?Sized> TryLocker for Arc<L> {
    #[inline]
    fn try_lock(&self) -> bool {
        (**self).try_lock()
    }
}
