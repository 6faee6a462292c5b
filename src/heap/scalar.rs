use std::fmt;

use itertools::Itertools;
use tracing::trace;

use super::*;

/// Initial number of slots of a [`ScalarHeap`]
pub const INITIAL_CAPACITY: usize = 32;

/// Value of slots beyond the logical size of a [`ScalarHeap`]
pub const EMPTY_SLOT: i64 = i64::MAX;

/// Binary min-heap over integers.
///
/// Elements live in a slot array whose unused tail is filled with [`EMPTY_SLOT`]. When all
/// slots are in use, the array is doubled. `i64::MAX` itself can be stored; it is then
/// indistinguishable from an empty slot only when inspecting [`ScalarHeap::slots`].
#[derive(Debug, Clone)]
pub struct ScalarHeap {
    slots: Vec<i64>,
    len: usize,
}

impl Default for ScalarHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarHeap {
    /// Creates an empty heap with [`INITIAL_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty heap with `capacity` slots (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![EMPTY_SLOT; capacity.max(1)],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The stored elements in heap order
    pub fn as_slice(&self) -> &[i64] {
        &self.slots[..self.len]
    }

    /// All slots including the [`EMPTY_SLOT`] tail
    pub fn slots(&self) -> &[i64] {
        &self.slots
    }

    /// Returns the minimum without removing it
    pub fn peek(&self) -> Option<i64> {
        self.as_slice().first().copied()
    }

    /// Inserts a value, doubling the slot array if it is full
    pub fn insert(&mut self, value: i64) {
        if self.len == self.slots.len() {
            let capacity = 2 * self.slots.len();
            trace!(capacity, "growing scalar heap");
            self.slots.resize(capacity, EMPTY_SLOT);
        }

        self.slots[self.len] = value;
        self.len += 1;
        sift_up(&mut self.slots[..self.len], self.len - 1, |&x| x);
    }

    /// Removes and returns the minimum, or `None` if the heap is empty
    pub fn remove(&mut self) -> Option<i64> {
        if self.len == 0 {
            return None;
        }

        let min = self.slots[0];
        self.len -= 1;
        self.slots[0] = self.slots[self.len];
        self.slots[self.len] = EMPTY_SLOT;
        sift_down(&mut self.slots[..self.len], 0, |&x| x);

        Some(min)
    }

    /// Returns *true* if the stored elements satisfy the min-heap property
    pub fn is_valid(&self) -> bool {
        is_heap(self.as_slice(), |&x| x)
    }
}

impl Extend<i64> for ScalarHeap {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl FromIterator<i64> for ScalarHeap {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl fmt::Display for ScalarHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.as_slice().iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn removes_in_increasing_order() {
        let mut heap = ScalarHeap::new();
        for x in [4, 10, 8, 6, 3] {
            heap.insert(x);
            assert!(heap.is_valid());
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Some(3));
        assert_eq!(format!("{heap}"), "[3, 4, 8, 10, 6]");

        let order = std::iter::from_fn(|| heap.remove()).collect_vec();
        assert_eq!(order, vec![3, 4, 6, 8, 10]);
        assert!(heap.is_empty());
        assert_eq!(heap.remove(), None);
    }

    #[test]
    fn grows_by_doubling() {
        let mut heap = ScalarHeap::new();
        assert_eq!(heap.capacity(), INITIAL_CAPACITY);
        assert!(heap.slots().iter().all(|&x| x == EMPTY_SLOT));

        heap.extend((0..=INITIAL_CAPACITY as i64).rev());
        assert_eq!(heap.capacity(), 2 * INITIAL_CAPACITY);
        assert_eq!(heap.len(), INITIAL_CAPACITY + 1);
        assert!(heap.slots()[heap.len()..].iter().all(|&x| x == EMPTY_SLOT));
        assert!(heap.is_valid());

        let mut tiny = ScalarHeap::with_capacity(0);
        tiny.extend([3, 1, 2]);
        assert_eq!(tiny.capacity(), 4);
        assert_eq!(tiny.remove(), Some(1));
    }

    #[test]
    fn random_sequences_sort() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for len in [0, 1, 2, 31, 32, 33, 500] {
            let values = (0..len)
                .map(|_| rng.random_range(-1000..1000))
                .collect_vec();
            let mut heap: ScalarHeap = values.iter().copied().collect();
            assert!(heap.is_valid());

            let mut removed = Vec::new();
            while let Some(x) = heap.remove() {
                assert!(heap.is_valid());
                removed.push(x);
            }

            assert_eq!(removed, values.into_iter().sorted().collect_vec());
        }
    }

    #[test]
    fn duplicates_and_extremes() {
        let mut heap: ScalarHeap = [5, i64::MIN, 5, i64::MAX, 5].into_iter().collect();
        assert_eq!(heap.remove(), Some(i64::MIN));
        assert_eq!(heap.remove(), Some(5));
        assert_eq!(heap.remove(), Some(5));
        assert_eq!(heap.remove(), Some(5));
        assert_eq!(heap.remove(), Some(i64::MAX));
        assert_eq!(heap.remove(), None);
    }
}
