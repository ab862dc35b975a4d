//! Common traits for priority queues
//!
//! [`Heap`] is the min-priority-queue contract used by the ranking code. It
//! stores (key, item) pairs so the ordering key stays separate from the
//! record being ranked.
//!
//! Implementations are strictly min-ordered. Callers that need descending
//! order invert the key themselves (negate a number, or wrap it in
//! [`std::cmp::Reverse`]) instead of asking for a second max-heap variant.

/// Min-ordered priority queue over (key, item) pairs
///
/// # Example
///
/// ```rust
/// use esports_core::Heap;
/// use esports_core::binary_heap::PriorityQueue;
///
/// let mut heap = PriorityQueue::new();
/// heap.insert(3, "three");
/// heap.insert(1, "one");
/// heap.insert(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.extract_min(), Some((1, "one")));
/// ```
pub trait Heap<T, K: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an item under the given key
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, key: K, item: T);

    /// Returns the minimum key and its item without removing them
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&K, &T)>;

    /// Removes and returns the minimum key and its item
    ///
    /// Returns `None` on an empty heap rather than failing.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Option<(K, T)>;
}
