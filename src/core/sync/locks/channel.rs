/*!
 * Channel Lock
 * Exclusive lock built on a single-slot flume channel
 */

use super::guard::ChannelLockGuard;
use super::traits::{Locker, TryLocker};
use crate::core::errors::{LockError, LockResult};
use crate::core::limits::LOCK_TOKEN_SLOTS;
use flume::{Receiver, Sender, TryRecvError, TrySendError};
use std::fmt;
use std::sync::Arc;
use tracing::{error, trace};

/// Exclusive lock with blocking and non-blocking acquisition
///
/// The lock is held exactly when the token slot is occupied. It records no
/// owner, so a lock taken on one thread may be released on another.
///
/// # Example
///
/// ```
/// use os_primitives::ChannelLock;
///
/// let lock = ChannelLock::new();
/// lock.lock();
/// assert!(!lock.try_lock());
/// lock.unlock();
/// assert!(lock.try_lock());
/// lock.unlock();
/// ```
pub struct ChannelLock {
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl ChannelLock {
    /// Create a new lock in the free state
    pub fn new() -> Self {
        let (tx, rx) = flume::bounded(LOCK_TOKEN_SLOTS);
        Self { tx, rx }
    }

    /// Acquire the lock, blocking until it is free
    ///
    /// Waiters are not queued in any particular order.
    pub fn lock(&self) {
        // Both ends are owned by self, so the channel cannot disconnect.
        if self.tx.send(()).is_err() {
            unreachable!("lock channel disconnected");
        }
        trace!("lock acquired");
    }

    /// Acquire the lock only if it is free, without blocking
    #[inline]
    pub fn try_lock(&self) -> bool {
        match self.tx.try_send(()) {
            Ok(()) => {
                trace!("lock acquired without waiting");
                true
            }
            Err(TrySendError::Full(())) => false,
            Err(TrySendError::Disconnected(())) => unreachable!("lock channel disconnected"),
        }
    }

    /// Release the lock
    ///
    /// # Panics
    ///
    /// Panics if the lock is free. Use [`ChannelLock::try_unlock`] to get an
    /// error value instead.
    pub fn unlock(&self) {
        if let Err(e) = self.try_unlock() {
            error!(error = %e, "unlock of unlocked mutex");
            panic!("sync: unlock of unlocked mutex");
        }
    }

    /// Release the lock, reporting a free lock as [`LockError::NotLocked`]
    pub fn try_unlock(&self) -> LockResult<()> {
        match self.rx.try_recv() {
            Ok(()) => {
                trace!("lock released");
                Ok(())
            }
            Err(TryRecvError::Empty) => Err(LockError::NotLocked),
            Err(TryRecvError::Disconnected) => unreachable!("lock channel disconnected"),
        }
    }

    /// Whether the lock is currently held
    ///
    /// Only a snapshot: another thread may change it right after.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.tx.is_full()
    }

    /// Acquire the lock and return a guard that releases it on drop
    pub fn guard(&self) -> ChannelLockGuard<'_> {
        self.lock();
        ChannelLockGuard::new(self)
    }

    /// Non-blocking form of [`ChannelLock::guard`]
    pub fn try_guard(&self) -> Option<ChannelLockGuard<'_>> {
        self.try_lock().then(|| ChannelLockGuard::new(self))
    }
}

impl Default for ChannelLock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChannelLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelLock")
            .field("locked", &self.is_locked())
            .finish()
    }
}

impl Locker for ChannelLock {
    #[inline]
    fn lock(&self) {
        ChannelLock::lock(self)
    }

    #[inline]
    fn unlock(&self) {
        ChannelLock::unlock(self)
    }
}

impl TryLocker for ChannelLock {
    #[inline]
    fn try_lock(&self) -> bool {
        ChannelLock::try_lock(self)
    }
}

/// Create a free lock behind the [`TryLocker`] interface
pub fn new_try_locker() -> Arc<dyn TryLocker> {
    Arc::new(ChannelLock::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked() -> ChannelLock {
        let lock = ChannelLock::new();
        lock.lock();
        lock
    }

    #[test]
    fn test_lock_unlocked() {
        let lock = ChannelLock::new();
        assert!(!lock.is_locked());

        lock.lock();
        assert!(lock.is_locked());
    }

    #[test]
    fn test_unlock_locked() {
        let lock = locked();
        lock.unlock();
        assert!(!lock.is_locked());
    }

    #[test]
    #[should_panic(expected = "unlock of unlocked mutex")]
    fn test_unlock_unlocked_panics() {
        let lock = ChannelLock::new();
        lock.unlock();
    }

    #[test]
    #[should_panic(expected = "unlock of unlocked mutex")]
    fn test_double_unlock_panics() {
        let lock = locked();
        lock.unlock();
        lock.unlock();
    }

    #[test]
    fn test_try_unlock_unlocked() {
        let lock = ChannelLock::new();
        assert_eq!(lock.try_unlock(), Err(LockError::NotLocked));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_try_lock() {
        let cases = [("unlocked", ChannelLock::new(), true), ("locked", locked(), false)];

        for (name, lock, want) in cases {
            assert_eq!(lock.try_lock(), want, "try_lock on {name} lock");
            assert!(lock.is_locked(), "{name} lock must be held afterwards");
        }
    }

    #[test]
    fn test_alternation() {
        let lock = ChannelLock::new();
        for _ in 0..100 {
            assert!(lock.try_lock());
            assert!(!lock.try_lock());
            lock.unlock();
            assert!(!lock.is_locked());
        }
    }

    #[test]
    fn test_new_try_locker_is_unlocked() {
        let locker = new_try_locker();
        assert!(locker.try_lock());
        locker.unlock();
        locker.lock();
        assert!(!locker.try_lock());
        locker.unlock();
    }

    #[test]
    fn test_debug_reports_state() {
        let lock = locked();
        assert_eq!(format!("{:?}", lock), "ChannelLock { locked: true }");
    }
}
