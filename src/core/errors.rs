/*!
 * Error Types
 * Recoverable error values with thiserror, miette, and serde support
 *
 * Contract violations (double unlock, stale handle in `update`, out-of-range
 * positions) panic instead; these types only back the `try_*` variants and
 * invariant checks.
 */

use crate::core::data_structures::ItemId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lock-related errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum LockError {
    #[error("Lock is not held")]
    #[diagnostic(
        code(lock::not_locked),
        help("Release only a lock that was acquired with lock() or a successful try_lock().")
    )]
    NotLocked,
}

/// Priority queue errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum QueueError {
    #[error("Item {0} is not in the queue")]
    #[diagnostic(
        code(queue::unknown_item),
        help("The item was popped or removed, or the handle belongs to another queue.")
    )]
    UnknownItem(ItemId),

    #[error("Item at position {position} records index {recorded:?}")]
    #[diagnostic(
        code(queue::index_mismatch),
        help("Every enqueued item must record its own storage position.")
    )]
    IndexMismatch {
        position: usize,
        recorded: Option<usize>,
    },

    #[error("Child at position {child} has lower priority than parent at {parent}")]
    #[diagnostic(
        code(queue::heap_order),
        help("Call heap::fix after mutating a priority outside of update().")
    )]
    HeapOrder { parent: usize, child: usize },
}

/// Result type for lock operations
pub type LockResult<T> = Result<T, LockError>;

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        assert_eq!(LockError::NotLocked.to_string(), "Lock is not held");
        assert_eq!(
            QueueError::UnknownItem(ItemId::from_raw(7)).to_string(),
            "Item 7 is not in the queue"
        );
        assert_eq!(
            QueueError::HeapOrder { parent: 0, child: 2 }.to_string(),
            "Child at position 2 has lower priority than parent at 0"
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = QueueError::IndexMismatch {
            position: 3,
            recorded: None,
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"error_type\":\"index_mismatch\""));

        let back: QueueError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
