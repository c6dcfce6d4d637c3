/*!
 * Binary Heap Algorithms
 *
 * Sift-up/sift-down repair over any storage that implements [`Heap`].
 * The storage decides ordering through `less` and keeps its own bookkeeping
 * in `swap`; these functions only decide which positions to move.
 *
 * The minimum element (per `less`) is at position 0.
 */

/// Storage driven by the heap algorithms
///
/// `push` and `pop` are primitives: they add at / remove from the last
/// position and must not restore heap order themselves.
pub trait Heap {
    /// Element type stored in the heap
    type Elem;
    /// Value returned when an element is pushed
    type Handle;

    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the heap holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the element at `i` must sort before the element at `j`
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchange the elements at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);

    /// Append `x` at position `len()`
    fn push(&mut self, x: Self::Elem) -> Self::Handle;

    /// Remove and return the element at position `len() - 1`
    fn pop(&mut self) -> Option<Self::Elem>;
}

/// Establish heap order over the current contents in O(n)
pub fn init<H: Heap + ?Sized>(h: &mut H) {
    let n = h.len();
    for i in (0..n / 2).rev() {
        down(h, i, n);
    }
}

/// Push `x` and sift it up into place
pub fn push<H: Heap + ?Sized>(h: &mut H, x: H::Elem) -> H::Handle {
    let handle = h.push(x);
    let last = h.len() - 1;
    up(h, last);
    handle
}

/// Remove and return the minimum element, or `None` if the heap is empty
pub fn pop<H: Heap + ?Sized>(h: &mut H) -> Option<H::Elem> {
    let n = h.len();
    if n == 0 {
        return None;
    }
    let last = n - 1;
    h.swap(0, last);
    down(h, 0, last);
    h.pop()
}

/// Remove and return the element at position `i`
///
/// # Panics
///
/// Panics if `i` is out of range.
pub fn remove<H: Heap + ?Sized>(h: &mut H, i: usize) -> Option<H::Elem> {
    let n = h.len();
    assert!(i < n, "heap remove index {i} out of range for length {n}");
    let last = n - 1;
    if last != i {
        h.swap(i, last);
        if !down(h, i, last) {
            up(h, i);
        }
    }
    h.pop()
}

/// Restore heap order after the element at `i` changed its ordering key
///
/// Cheaper than removing and re-pushing the element.
pub fn fix<H: Heap + ?Sized>(h: &mut H, i: usize) {
    if !down(h, i, h.len()) {
        up(h, i);
    }
}

fn up<H: Heap + ?Sized>(h: &mut H, mut j: usize) {
    while j > 0 {
        let parent = (j - 1) / 2;
        if !h.less(j, parent) {
            break;
        }
        h.swap(parent, j);
        j = parent;
    }
}

/// Sift down from `i0` within the first `n` positions; true if it moved
fn down<H: Heap + ?Sized>(h: &mut H, i0: usize, n: usize) -> bool {
    let mut i = i0;
    loop {
        let left = 2 * i + 1;
        if left >= n {
            break;
        }
        let mut child = left;
        let right = left + 1;
        if right < n && h.less(right, left) {
            child = right;
        }
        if !h.less(child, i) {
            break;
        }
        h.swap(i, child);
        i = child;
    }
    i > i0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain integer heap used to exercise the algorithms in isolation
    struct IntHeap(Vec<i64>);

    impl Heap for IntHeap {
        type Elem = i64;
        type Handle = ();

        fn len(&self) -> usize {
            self.0.len()
        }

        fn less(&self, i: usize, j: usize) -> bool {
            self.0[i] < self.0[j]
        }

        fn swap(&mut self, i: usize, j: usize) {
            self.0.swap(i, j)
        }

        fn push(&mut self, x: i64) {
            self.0.push(x)
        }

        fn pop(&mut self) -> Option<i64> {
            self.0.pop()
        }
    }

    impl IntHeap {
        fn verify(&self) {
            for child in 1..self.0.len() {
                let parent = (child - 1) / 2;
                assert!(
                    self.0[parent] <= self.0[child],
                    "heap order broken at {parent}->{child}: {:?}",
                    self.0
                );
            }
        }

        fn drain(&mut self) -> Vec<i64> {
            std::iter::from_fn(|| pop(self)).collect()
        }
    }

    #[test]
    fn test_init_heapifies() {
        let mut h = IntHeap(vec![9, 4, 7, 1, 8, 2, 6, 3, 5, 0]);
        init(&mut h);
        h.verify();
        assert_eq!(h.drain(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_init_all_equal() {
        let mut h = IntHeap(vec![0; 20]);
        init(&mut h);
        h.verify();
    }

    #[test]
    fn test_push_pop() {
        let mut h = IntHeap(Vec::new());
        for x in [20, 5, 15, 10, 0, 25] {
            push(&mut h, x);
            h.verify();
        }
        assert_eq!(h.drain(), vec![0, 5, 10, 15, 20, 25]);
    }

    #[test]
    fn test_pop_empty() {
        let mut h = IntHeap(Vec::new());
        assert_eq!(pop(&mut h), None);
    }

    #[test]
    fn test_remove() {
        let mut h = IntHeap((0..10).collect());
        init(&mut h);

        // Remove from the middle, then the last position, then the root
        assert_eq!(remove(&mut h, 4), Some(4));
        h.verify();
        let last = h.len() - 1;
        let tail = h.0[last];
        assert_eq!(remove(&mut h, last), Some(tail));
        h.verify();
        assert_eq!(remove(&mut h, 0), Some(0));
        h.verify();
        assert_eq!(h.len(), 7);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_out_of_range() {
        let mut h = IntHeap(vec![1]);
        remove(&mut h, 1);
    }

    #[test]
    fn test_fix_both_directions() {
        let mut h = IntHeap((0..10).map(|x| x * 10).collect());
        init(&mut h);

        // Increase the root: must sift down
        h.0[0] = 1000;
        fix(&mut h, 0);
        h.verify();

        // Decrease a leaf: must sift up
        let last = h.len() - 1;
        h.0[last] = -5;
        fix(&mut h, last);
        h.verify();
        assert_eq!(h.0[0], -5);
    }
}
