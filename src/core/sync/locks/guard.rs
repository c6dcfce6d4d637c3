/*!
 * Scoped Lock Guard
 * RAII release for a held ChannelLock
 */

use super::channel::ChannelLock;
use std::fmt;

/// Holds a [`ChannelLock`] and releases it when dropped
///
/// The guard is the only party that releases the lock it represents, so a
/// guard can never double-unlock.
#[must_use = "dropping the guard releases the lock immediately"]
pub struct ChannelLockGuard<'a> {
    lock: &'a ChannelLock,
}

impl<'a> ChannelLockGuard<'a> {
    /// Wrap a lock the caller has already acquired
    pub(super) fn new(lock: &'a ChannelLock) -> Self {
        Self { lock }
    }

    /// Release the lock now instead of at end of scope
    #[inline]
    pub fn release(self) {
        drop(self)
    }
}

impl Drop for ChannelLockGuard<'_> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

impl fmt::Debug for ChannelLockGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelLockGuard").finish_non_exhaustive()
    }
}
