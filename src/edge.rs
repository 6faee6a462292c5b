use std::fmt::{Debug, Display};

use crate::{Node, Weight};

/// An edge is defined by two nodes/endpoints.
/// It is up to the user whether an Edge is directed (an arc) or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Simple bijection from `0..n^2` to all possible (directed) edges of `n` nodes
    pub fn from_u64(x: u64, n: u64) -> Self {
        debug_assert!(x < n * n);

        let u = x / n;
        let v = x % n;
        Edge(u as Node, v as Node)
    }

    /// Simple bijection from `0..n(n-1)` to all possible directed edges of `n` nodes
    /// that are not self-loops.
    ///
    /// Every node `u` owns a block of `n - 1` consecutive values; the diagonal is skipped
    /// by shifting all targets `v >= u` by one.
    pub fn from_u64_no_loop(x: u64, n: u64) -> Self {
        debug_assert!(n > 1 && x < n * (n - 1));

        let u = x / (n - 1);
        let r = x % (n - 1);
        let v = if r >= u { r + 1 } else { r };
        Edge(u as Node, v as Node)
    }

    /// Simple bijection from `0..(n choose 2)` to all possible normalized edges of `n` nodes.
    ///
    /// The bijection works by assigning each node the next `(n - 1)/2` neighbors modulo `n`
    /// (up to rounding) and normalizing the resulting edge
    pub fn from_u64_undir(mut x: u64, n: u64) -> Self {
        debug_assert!(x < n * (n - 1) / 2);

        let mut num_neighbors = (n - 1) / 2;
        // Easy case where `n - 1` is even and no corner cases exist
        if n & 1 == 1 {
            let u = x / num_neighbors;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        // Harder case where `n - 1` is odd and the number of checked neighbors alternates
        } else {
            let half_n = n / 2;
            let lower_half = num_neighbors * half_n;

            if x < lower_half {
                let u = x / num_neighbors;
                let v = (u + 1 + (x % num_neighbors)) % n;

                // Edges are guaranteed to be normalized in the lower half
                return Edge(u as Node, v as Node);
            }

            x -= lower_half;
            num_neighbors += 1;

            let u = (x / num_neighbors) + half_n;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge `(from, to)` carrying an integer weight.
///
/// Used both as the item type of weighted edge iterators and as the element of an
/// [`EdgeHeap`](crate::heap::EdgeHeap), which orders them by weight.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl WeightedEdge {
    pub fn source(&self) -> Node {
        self.0
    }

    pub fn target(&self) -> Node {
        self.1
    }

    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Normalizes the endpoints such that the smaller one comes first
    pub fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bijections_hit_every_edge_once() {
        for n in 2..12u64 {
            let all = (0..n * n).map(|x| Edge::from_u64(x, n)).collect_vec();
            assert_eq!(all.iter().unique().count() as u64, n * n);

            let no_loops = (0..n * (n - 1))
                .map(|x| Edge::from_u64_no_loop(x, n))
                .collect_vec();
            assert!(no_loops.iter().all(|e| e.0 != e.1 && e.1 < n as Node));
            assert_eq!(no_loops.iter().unique().count() as u64, n * (n - 1));

            let undir = (0..n * (n - 1) / 2)
                .map(|x| Edge::from_u64_undir(x, n))
                .collect_vec();
            assert!(undir.iter().all(|e| e.is_normalized() && e.0 != e.1));
            assert_eq!(undir.iter().unique().count() as u64, n * (n - 1) / 2);
        }
    }

    #[test]
    fn weighted_edge_accessors() {
        let e = WeightedEdge(3, 1, -7);
        assert_eq!((e.source(), e.target(), e.weight()), (3, 1, -7));
        assert_eq!(e.normalized(), WeightedEdge(1, 3, -7));
        assert_eq!(e.edge(), Edge(3, 1));
        assert_eq!(format!("{e}"), "(3,1;-7)");
        assert_eq!(WeightedEdge::from((3, 1, -7)), e);
    }
}
