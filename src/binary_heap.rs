//! Binary min-heap
//!
//! An array-backed binary heap implementing [`Heap`]. Element `i` has its
//! parent at `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek`        | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use esports_core::Heap;
//! use esports_core::binary_heap::PriorityQueue;
//!
//! let mut heap: PriorityQueue<(), i32> = [5, 3, 8, 1, 9, 2]
//!     .into_iter()
//!     .map(|k| (k, ()))
//!     .collect();
//!
//! let order: Vec<i32> = std::iter::from_fn(|| heap.extract_min().map(|(k, _)| k)).collect();
//! assert_eq!(order, vec![1, 2, 3, 5, 8, 9]);
//! ```

use crate::traits::Heap;

/// A binary min-heap over (key, item) pairs
///
/// The element with the smallest key is always at index 0. Items with equal
/// keys come out in an unspecified order; put a tie-breaker in the key when
/// the order matters.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, K: Ord> {
    /// The heap data stored as a vector of (key, item) pairs
    data: Vec<(K, T)>,
}

impl<T, K: Ord> Heap<T, K> for PriorityQueue<T, K> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, key: K, item: T) {
        self.data.push((key, item));
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<(&K, &T)> {
        self.data.first().map(|(k, t)| (k, t))
    }

    fn extract_min(&mut self) -> Option<(K, T)> {
        match self.data.len() {
            0 => None,
            1 => self.data.pop(),
            len => {
                self.data.swap(0, len - 1);
                let root = self.data.pop();
                self.sift_down(0);
                root
            }
        }
    }
}

impl<T, K: Ord> PriorityQueue<T, K> {
    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Drains the heap, returning its elements in ascending key order
    pub fn into_sorted_vec(mut self) -> Vec<(K, T)> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(entry) = self.extract_min() {
            sorted.push(entry);
        }
        sorted
    }

    /// Move element at index up while its parent's key is strictly greater
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent].0 > self.data[index].0 {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// The left child is checked first, so it wins a tie with the right one.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < len && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2].0 <= self.data[i].0)
    }
}

impl<T, K: Ord> Default for PriorityQueue<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Ord> Extend<(K, T)> for PriorityQueue<T, K> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, item) in iter {
            self.insert(key, item);
        }
    }
}

impl<T, K: Ord> FromIterator<(K, T)> for PriorityQueue<T, K> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
