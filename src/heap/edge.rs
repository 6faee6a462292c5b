use super::*;
use crate::{Node, Weight, WeightedEdge};

/// Binary min-heap of [`WeightedEdge`]s ordered by weight.
/// Edges of equal weight are removed in the order they were inserted.
#[derive(Debug, Clone, Default)]
pub struct EdgeHeap {
    entries: Vec<Entry>,
    next_seq: u64,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    edge: WeightedEdge,
    seq: u64,
}

#[inline]
fn by_weight(e: &Entry) -> (Weight, u64) {
    (e.edge.2, e.seq)
}

impl EdgeHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored edges in heap order
    pub fn iter(&self) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.entries.iter().map(|e| &e.edge)
    }

    /// Returns the lightest edge without removing it
    pub fn peek(&self) -> Option<&WeightedEdge> {
        self.entries.first().map(|e| &e.edge)
    }

    /// Inserts the edge `(from, to)` with the given weight
    pub fn insert(&mut self, from: Node, to: Node, weight: Weight) {
        self.push(WeightedEdge(from, to, weight));
    }

    pub fn push(&mut self, edge: WeightedEdge) {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.entries.push(Entry { edge, seq });
        let last = self.entries.len() - 1;
        sift_up(&mut self.entries, last, by_weight);
    }

    /// Removes and returns the lightest edge, or `None` if the heap is empty.
    /// Among edges of equal weight, the earliest inserted one is returned.
    pub fn remove(&mut self) -> Option<WeightedEdge> {
        if self.entries.is_empty() {
            return None;
        }

        let min = self.entries.swap_remove(0);
        sift_down(&mut self.entries, 0, by_weight);
        Some(min.edge)
    }

    /// Returns *true* if the stored edges satisfy the min-heap property
    pub fn is_valid(&self) -> bool {
        is_heap(&self.entries, by_weight)
    }
}

impl Extend<WeightedEdge> for EdgeHeap {
    fn extend<T: IntoIterator<Item = WeightedEdge>>(&mut self, iter: T) {
        for e in iter {
            self.push(e);
        }
    }
}

impl FromIterator<WeightedEdge> for EdgeHeap {
    fn from_iter<T: IntoIterator<Item = WeightedEdge>>(iter: T) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn removes_lightest_first() {
        let mut heap = EdgeHeap::new();
        heap.insert(0, 1, 7);
        heap.insert(1, 2, -3);
        heap.insert(2, 3, 4);
        heap.insert(3, 0, 4);
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Some(&WeightedEdge(1, 2, -3)));

        assert_eq!(heap.remove(), Some(WeightedEdge(1, 2, -3)));
        assert_eq!(heap.remove(), Some(WeightedEdge(2, 3, 4)));
        assert_eq!(heap.remove(), Some(WeightedEdge(3, 0, 4)));
        assert_eq!(heap.remove(), Some(WeightedEdge(0, 1, 7)));
        assert_eq!(heap.remove(), None);
    }

    #[test]
    fn equal_weights_leave_in_insertion_order() {
        let mut heap = EdgeHeap::new();
        heap.insert(0, 1, 1);
        heap.insert(0, 2, 1);
        heap.insert(0, 3, 1);
        heap.insert(0, 4, 0);
        assert!(heap.is_valid());

        let targets = std::iter::from_fn(|| heap.remove())
            .map(|e| e.target())
            .collect_vec();
        assert_eq!(targets, vec![4, 1, 2, 3]);

        // interleaved inserts and removals
        let mut heap = EdgeHeap::with_capacity(8);
        for v in 0..4 {
            heap.insert(9, v, 5);
        }
        assert_eq!(heap.remove().map(|e| e.target()), Some(0));
        heap.insert(9, 10, 5);
        heap.insert(9, 11, 2);
        assert_eq!(heap.iter().count(), 5);
        let targets = std::iter::from_fn(|| heap.remove())
            .map(|e| e.target())
            .collect_vec();
        assert_eq!(targets, vec![11, 1, 2, 3, 10]);
    }

    #[test]
    fn random_weights_sort() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let edges = (0..300)
            .map(|i| WeightedEdge(i, i + 1, rng.random_range(-50..50)))
            .collect_vec();

        let mut heap: EdgeHeap = edges.iter().copied().collect();
        assert_eq!(heap.len(), edges.len());

        let mut removed = Vec::new();
        while let Some(e) = heap.remove() {
            assert!(heap.is_valid());
            removed.push(e);
        }

        assert!(removed.windows(2).all(|w| w[0].weight() <= w[1].weight()));
        // edges were inserted with increasing sources, so ties keep that order
        assert!(
            removed
                .windows(2)
                .all(|w| w[0].weight() < w[1].weight() || w[0].source() < w[1].source())
        );
        assert_eq!(
            removed.iter().map(|e| e.edge()).sorted().collect_vec(),
            edges.iter().map(|e| e.edge()).sorted().collect_vec()
        );
    }
}
