/*!
Minimum spanning trees of undirected weighted graphs with Prim's algorithm.

The tree grows from a start node. All edges leaving the tree are kept in an
[`EdgeHeap`](crate::heap::EdgeHeap); the lightest one whose far endpoint is not yet in the
tree is added next. Edges that became internal to the tree are discarded lazily when they
surface at the top of the heap.

If the graph is not connected, only the component of the start node is spanned; the result
reports this through [`SpanningTree::is_spanning`].
*/

use super::*;
use crate::heap::EdgeHeap;

/// Configurable minimum spanning tree computation.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = AdjListUndirValued::from_weighted_edges(3, [(0, 1, 4), (1, 2, 1), (0, 2, 2)]).unwrap();
/// let tree = Prim::new().start(1).run(&g).unwrap();
/// assert_eq!(tree.total_weight(), 3);
/// assert!(tree.is_spanning());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim {
    start: Node,
}

impl Prim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_start(&mut self, start: Node) {
        self.start = start;
    }

    pub fn start(mut self, start: Node) -> Self {
        self.set_start(start);
        self
    }

    /// Computes a minimum spanning tree of the component containing the start node.
    /// Fails if the start node is not a node of the graph.
    #[tracing::instrument(skip(self, graph), fields(n = graph.number_of_nodes(), start = self.start))]
    pub fn run<G>(&self, graph: &G) -> Result<SpanningTree>
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        graph.check_node(self.start)?;

        let n = graph.len();
        let mut in_tree = NodeBitSet::new(graph.number_of_nodes());
        let mut heap = EdgeHeap::new();
        let mut edges = Vec::with_capacity(n - 1);

        in_tree.set_bit(self.start);
        push_frontier(graph, &in_tree, &mut heap, self.start);

        while edges.len() + 1 < n {
            let Some(edge) = heap.remove() else {
                break;
            };

            let v = edge.target();
            if in_tree.set_bit(v) {
                continue;
            }

            edges.push(edge);
            push_frontier(graph, &in_tree, &mut heap, v);
        }

        let tree = SpanningTree::new(self.start, graph.number_of_nodes(), edges);
        if !tree.is_spanning() {
            tracing::warn!(
                reached = tree.len() + 1,
                "graph is not connected; only the component of the start node is spanned"
            );
        }
        Ok(tree)
    }
}

/// Pushes all edges from `u` to nodes outside of the tree
fn push_frontier<G: AdjacencyList>(
    graph: &G,
    in_tree: &NodeBitSet,
    heap: &mut EdgeHeap,
    u: Node,
) {
    for (v, w) in graph.weighted_neighbors_of(u) {
        if !in_tree.get_bit(v) {
            heap.insert(u, v, w.cost());
        }
    }
}

/// Edges of a minimum spanning tree in the order they were selected.
/// Each edge is oriented from the tree towards the node it added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    start: Node,
    num_nodes: NumNodes,
    edges: Vec<WeightedEdge>,
    total_weight: Weight,
}

impl SpanningTree {
    fn new(start: Node, num_nodes: NumNodes, edges: Vec<WeightedEdge>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight()).sum();
        Self {
            start,
            num_nodes,
            edges,
            total_weight,
        }
    }

    pub fn start(&self) -> Node {
        self.start
    }

    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<WeightedEdge> {
        self.edges
    }

    /// Number of tree edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the weights of all tree edges
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns *true* if the tree reaches every node of the graph, i.e. has `n - 1` edges
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.num_nodes as usize
    }
}

/// Provides minimum spanning trees as a method on undirected graphs
pub trait MinimumSpanningTree: AdjacencyList + GraphType<Dir = Undirected> {
    /// Runs [`Prim`] from `start`
    fn prim(&self, start: Node) -> Result<SpanningTree> {
        Prim::new().start(start).run(self)
    }
}

impl<G: AdjacencyList + GraphType<Dir = Undirected>> MinimumSpanningTree for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::init_logging;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Reference weight of a minimum spanning forest computed with Kruskal's algorithm
    fn kruskal_weight(n: NumNodes, edges: &[WeightedEdge]) -> (Weight, usize) {
        fn find(parent: &mut [usize], u: usize) -> usize {
            let mut root = u;
            while parent[root] != root {
                root = parent[root];
            }
            parent[u] = root;
            root
        }

        let mut parent = (0..n as usize).collect_vec();
        let mut total = 0;
        let mut used = 0;
        for e in edges.iter().sorted_by_key(|e| e.weight()) {
            let (a, b) = (
                find(&mut parent, e.source() as usize),
                find(&mut parent, e.target() as usize),
            );
            if a != b {
                parent[a] = b;
                total += e.weight();
                used += 1;
            }
        }
        (total, used)
    }

    #[test]
    fn fixed_matrices() {
        init_logging();
        let matrix: Vec<Vec<Weight>> = vec![
            vec![0, 3, 0, 4, 0],
            vec![3, 0, 2, 0, 0],
            vec![0, 2, 0, 5, 1],
            vec![4, 0, 5, 0, 6],
            vec![0, 0, 1, 6, 0],
        ];
        let g = AdjListUndirValued::from_matrix(&matrix).unwrap();
        let tree = g.prim(0).unwrap();
        assert_eq!(
            tree.edges(),
            &[
                WeightedEdge(0, 1, 3),
                WeightedEdge(1, 2, 2),
                WeightedEdge(2, 4, 1),
                WeightedEdge(0, 3, 4)
            ]
        );
        assert_eq!(tree.total_weight(), 10);
        assert!(tree.is_spanning());

        let matrix: Vec<Vec<Weight>> = vec![
            vec![0, 2, 5, 0],
            vec![2, 0, 3, 0],
            vec![5, 3, 0, 4],
            vec![0, 0, 4, 0],
        ];
        let g = AdjMatrixUndirValued::from_matrix(&matrix).unwrap();
        for start in g.vertices() {
            let tree = g.prim(start).unwrap();
            assert_eq!(tree.total_weight(), 9);
            assert_eq!(tree.len(), 3);
            assert_eq!(tree.start(), start);
        }
    }

    #[test]
    fn equal_weights_follow_discovery_order() {
        let edges = [(0, 1, 1), (0, 2, 1), (0, 3, 1), (1, 2, 1)];
        let g = AdjListUndirValued::from_weighted_edges(4, edges).unwrap();
        let tree = g.prim(0).unwrap();
        assert_eq!(
            tree.edges(),
            &[
                WeightedEdge(0, 1, 1),
                WeightedEdge(0, 2, 1),
                WeightedEdge(0, 3, 1)
            ]
        );
    }

    #[test]
    fn disconnected_graph() {
        let g = AdjListUndirValued::from_weighted_edges(5, [(0, 1, 1), (1, 2, 1), (3, 4, 7)])
            .unwrap();

        let tree = g.prim(0).unwrap();
        assert_eq!(tree.len(), 2);
        assert!(!tree.is_spanning());

        let tree = g.prim(4).unwrap();
        assert_eq!(tree.into_edges(), vec![WeightedEdge(4, 3, 7)]);

        let single = AdjMatrixUndir::new(1).prim(0).unwrap();
        assert!(single.is_empty());
        assert!(single.is_spanning());
    }

    #[test]
    fn invalid_start() {
        let g = AdjListUndirValued::new(3);
        assert_eq!(
            g.prim(3),
            Err(GraphError::NodeOutOfRange { node: 3, n: 3 })
        );
        assert!(AdjListUndir::new(0).prim(0).is_err());
    }

    #[test]
    fn matches_kruskal_from_every_start() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);
        for _ in 0..10 {
            let n: NumNodes = rng.random_range(2..25);
            let edges = (0..4 * n)
                .map(|_| {
                    WeightedEdge(
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(-10..30),
                    )
                })
                .filter(|e| e.source() != e.target() && e.weight() != 0)
                .collect_vec();

            let list = AdjListUndirValued::from_weighted_edges(n, edges.iter()).unwrap();
            let matrix = AdjMatrixUndirValued::from(&list);
            let stored = list.weighted_edges().collect_vec();
            let (expected, used) = kruskal_weight(n, &stored);

            for start in 0..n {
                let tree = list.prim(start).unwrap();
                assert_eq!(matrix.prim(start).unwrap().total_weight(), tree.total_weight());
                if tree.is_spanning() {
                    assert_eq!(tree.total_weight(), expected);
                    assert_eq!(tree.len(), used);
                }

                let mut reached = vec![false; n as usize];
                reached[start as usize] = true;
                for e in tree.edges() {
                    assert!(reached[e.source() as usize]);
                    assert!(!reached[e.target() as usize]);
                    assert_eq!(list.weight_of(e.source(), e.target()), Some(e.weight()));
                    reached[e.target() as usize] = true;
                }
            }
        }
    }
}
