/*!
 * Indexed Priority Queue
 *
 * Min-priority binary heap where every item records its own storage
 * position. That position lets `update` re-prioritize an enqueued item in
 * O(log n) instead of searching for it.
 *
 * Callers address enqueued items through stable [`ItemId`] handles, since
 * storage positions change on every swap.
 */

use super::config::QueueConfig;
use super::heap::{self, Heap};
use crate::core::errors::{QueueError, QueueResult};
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{error, trace};

/// Stable handle to an item in a [`PriorityQueue`]
///
/// Handles are never reused within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A value managed by the priority queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    value: T,
    priority: i64,
    /// Storage position while enqueued, `None` otherwise
    index: Option<usize>,
}

impl<T> Item<T> {
    /// Create an item that is not in any queue yet
    pub fn new(value: T, priority: i64) -> Self {
        Self {
            value,
            priority,
            index: None,
        }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Current storage position, or `None` once removed from the queue
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Min-priority queue with in-place priority updates
///
/// `push`, `pop`, `less` and `swap` are the raw storage primitives that the
/// [`heap`] algorithms drive; `insert`, `pop_min`, `update` and `remove`
/// keep heap order themselves.
///
/// # Example
///
/// ```
/// use os_primitives::PriorityQueue;
///
/// let mut pq = PriorityQueue::new();
/// let a = pq.insert("a", 10);
/// pq.insert("b", 1);
///
/// pq.update(a, "c", 0);
/// assert_eq!(pq.pop_min().map(|item| item.into_value()), Some("c"));
/// assert_eq!(pq.pop_min().map(|item| item.into_value()), Some("b"));
/// assert!(pq.pop_min().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    /// Storage order; position `i` holds the handle of the item whose index is `i`
    heap: Vec<ItemId>,
    items: HashMap<ItemId, Item<T>, RandomState>,
    next_id: u64,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue with default sizing
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Create an empty queue with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(QueueConfig::with_capacity(capacity))
    }

    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            heap: Vec::with_capacity(config.initial_capacity),
            items: HashMap::with_capacity_and_hasher(config.initial_capacity, RandomState::new()),
            next_id: 0,
        }
    }

    /// Number of enqueued items
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether the item at position `i` has strictly lower priority than the one at `j`
    ///
    /// # Panics
    ///
    /// Panics if either position is out of range.
    #[inline]
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.at(i).priority < self.at(j).priority
    }

    /// Exchange the items at positions `i` and `j`, keeping their recorded indexes in step
    ///
    /// # Panics
    ///
    /// Panics if either position is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.set_index(i);
        self.set_index(j);
    }

    /// Append `item` at the last position without restoring heap order
    ///
    /// Use [`PriorityQueue::insert`] (or [`heap::push`]) to keep heap order.
    ///
    /// # Panics
    ///
    /// Panics if `item` already records a storage position, i.e. it claims
    /// to be enqueued somewhere.
    pub fn push(&mut self, mut item: Item<T>) -> ItemId {
        if let Some(index) = item.index {
            error!(index, "push of an item that is already enqueued");
            panic!("priority queue: push of enqueued item (index {index})");
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;

        let index = self.heap.len();
        item.index = Some(index);
        trace!(id = %id, index, priority = item.priority, "item pushed");

        self.heap.push(id);
        self.items.insert(id, item);
        id
    }

    /// Remove and return the item at the last position
    ///
    /// This is not the minimum unless the caller swapped it there first; use
    /// [`PriorityQueue::pop_min`] for that. Returns `None` when empty.
    pub fn pop(&mut self) -> Option<Item<T>> {
        let id = self.heap.pop()?;
        let mut item = self.items.remove(&id)?;
        item.index = None;
        trace!(id = %id, priority = item.priority, len = self.heap.len(), "item popped");
        Some(item)
    }

    /// Replace the value and priority of an enqueued item and restore heap order
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in this queue. Use [`PriorityQueue::try_update`]
    /// to get an error instead.
    pub fn update(&mut self, id: ItemId, value: T, priority: i64) {
        if let Err(e) = self.try_update(id, value, priority) {
            error!(error = %e, "update of unknown item");
            panic!("priority queue: update of unknown item {id}");
        }
    }

    /// Fallible form of [`PriorityQueue::update`]
    pub fn try_update(&mut self, id: ItemId, value: T, priority: i64) -> QueueResult<()> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or(QueueError::UnknownItem(id))?;
        let index = item.index.ok_or(QueueError::UnknownItem(id))?;

        item.value = value;
        item.priority = priority;
        trace!(id = %id, index, priority, "item updated");

        heap::fix(self, index);
        Ok(())
    }

    /// Push a new item and sift it into place
    pub fn insert(&mut self, value: T, priority: i64) -> ItemId {
        heap::push(self, Item::new(value, priority))
    }

    /// Remove and return the lowest-priority item
    pub fn pop_min(&mut self) -> Option<Item<T>> {
        heap::pop(self)
    }

    /// Remove an arbitrary enqueued item, returning `None` if it is not in the queue
    pub fn remove(&mut self, id: ItemId) -> Option<Item<T>> {
        let index = self.items.get(&id)?.index?;
        heap::remove(self, index)
    }

    /// Item with the lowest priority, if heap order holds
    pub fn peek(&self) -> Option<&Item<T>> {
        self.heap.first().and_then(|id| self.items.get(id))
    }

    pub fn get(&self, id: ItemId) -> Option<&Item<T>> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Re-establish heap order over all items, e.g. after raw `push` calls
    pub fn heapify(&mut self) {
        heap::init(self)
    }

    /// Full scan of the position-tracking and heap-order invariants
    pub fn check_invariants(&self) -> QueueResult<()> {
        for (position, id) in self.heap.iter().enumerate() {
            let item = self.items.get(id).ok_or(QueueError::UnknownItem(*id))?;
            if item.index != Some(position) {
                return Err(QueueError::IndexMismatch {
                    position,
                    recorded: item.index,
                });
            }
        }

        for child in 1..self.heap.len() {
            let parent = (child - 1) / 2;
            if self.less(child, parent) {
                return Err(QueueError::HeapOrder { parent, child });
            }
        }
        Ok(())
    }

    /// Iterate over items in storage order
    pub fn iter(&self) -> impl Iterator<Item = &Item<T>> + '_ {
        self.heap.iter().filter_map(|id| self.items.get(id))
    }

    fn at(&self, position: usize) -> &Item<T> {
        &self.items[&self.heap[position]]
    }

    fn set_index(&mut self, position: usize) {
        if let Some(item) = self.items.get_mut(&self.heap[position]) {
            item.index = Some(position);
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Heap for PriorityQueue<T> {
    type Elem = Item<T>;
    type Handle = ItemId;

    #[inline]
    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        PriorityQueue::less(self, i, j)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        PriorityQueue::swap(self, i, j)
    }

    #[inline]
    fn push(&mut self, x: Item<T>) -> ItemId {
        PriorityQueue::push(self, x)
    }

    #[inline]
    fn pop(&mut self) -> Option<Item<T>> {
        PriorityQueue::pop(self)
    }
}
