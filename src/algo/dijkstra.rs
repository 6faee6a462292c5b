/*!
Single-source shortest paths for non-negative edge weights.

Two selection strategies are available via [`DijkstraStrategy`]:

- [`DijkstraStrategy::Naive`] scans all unmarked nodes for the one with smallest tentative
  distance in every round (`O(n^2)`, well suited for dense graphs and adjacency matrices).
  On ties the node with the smallest label wins.
- [`DijkstraStrategy::Heap`] keeps the frontier in an [`EdgeHeap`](crate::heap::EdgeHeap)
  keyed by tentative distance and skips stale entries on removal (`O(m log m)`).

Both strategies produce identical distances. Unweighted graphs are treated as having unit
weights, so the distances equal the number of edges on a shortest path.

Reachability is tracked apart from the distances, so every distance representable as a
[`Weight`] is reported as is. A path length exceeding `Weight::MAX` is an error.
*/

use super::*;
use crate::heap::EdgeHeap;

/// How the next node to settle is selected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DijkstraStrategy {
    #[default]
    Naive,
    Heap,
}

/// Configurable shortest path computation.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = AdjMatrixValued::from_weighted_edges(3, [(0, 1, 4), (1, 2, 1), (0, 2, 7)]).unwrap();
/// let paths = Dijkstra::new().strategy(DijkstraStrategy::Heap).run(&g, 0).unwrap();
/// assert_eq!(paths.distances(), &[0, 4, 5]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra {
    strategy: DijkstraStrategy,
}

impl Dijkstra {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strategy(&mut self, strategy: DijkstraStrategy) {
        self.strategy = strategy;
    }

    pub fn strategy(mut self, strategy: DijkstraStrategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Computes shortest paths from `source` to all nodes.
    ///
    /// Fails if `source` is not a node of the graph, if any edge has a negative weight or
    /// if a path length overflows.
    #[tracing::instrument(skip(self, graph), fields(n = graph.number_of_nodes(), strategy = ?self.strategy))]
    pub fn run<G: AdjacencyList>(&self, graph: &G, source: Node) -> Result<ShortestPaths> {
        graph.check_node(source)?;

        if let Some(e) = graph.weighted_edges().find(|e| e.weight() < 0) {
            return Err(GraphError::NegativeWeight {
                from: e.source(),
                to: e.target(),
                weight: e.weight(),
            });
        }

        let mut paths = ShortestPaths::new(graph.len(), source);
        match self.strategy {
            DijkstraStrategy::Naive => naive(graph, &mut paths)?,
            DijkstraStrategy::Heap => with_heap(graph, &mut paths)?,
        }

        tracing::debug!(
            unreachable = paths.unreachable().count(),
            "shortest paths computed"
        );
        Ok(paths)
    }
}

/// Relaxes all edges leaving the settled node `x`.
/// Calls `improved(y, dist)` for every node whose tentative distance decreased.
fn relax<G: AdjacencyList>(
    graph: &G,
    paths: &mut ShortestPaths,
    settled: &NodeBitSet,
    x: Node,
    mut improved: impl FnMut(Node, Weight),
) -> Result<()> {
    let Some(base) = paths.dist[x as usize] else {
        return Ok(());
    };

    for (y, w) in graph.weighted_neighbors_of(x) {
        if settled.get_bit(y) {
            continue;
        }

        let candidate = base
            .checked_add(w.cost())
            .ok_or(GraphError::DistanceOverflow { from: x, to: y })?;
        if paths.dist[y as usize].is_none_or(|d| candidate < d) {
            tracing::trace!(x, y, candidate, "relaxed");
            paths.dist[y as usize] = Some(candidate);
            paths.pred[y as usize] = OptionalNode::new(x);
            improved(y, candidate);
        }
    }
    Ok(())
}

fn naive<G: AdjacencyList>(graph: &G, paths: &mut ShortestPaths) -> Result<()> {
    let mut settled = NodeBitSet::new(graph.number_of_nodes());

    loop {
        // smallest tentative distance first, smallest label on ties
        let next = graph
            .vertices_range()
            .filter(|&y| !settled.get_bit(y))
            .filter_map(|y| paths.dist[y as usize].map(|d| (d, y)))
            .min();

        let Some((_, x)) = next else {
            break;
        };

        settled.set_bit(x);
        relax(graph, paths, &settled, x, |_, _| {})?;
    }
    Ok(())
}

fn with_heap<G: AdjacencyList>(graph: &G, paths: &mut ShortestPaths) -> Result<()> {
    let mut settled = NodeBitSet::new(graph.number_of_nodes());
    let mut heap = EdgeHeap::new();
    heap.insert(paths.source, paths.source, 0);

    while let Some(WeightedEdge(_, x, _)) = heap.remove() {
        if settled.set_bit(x) {
            continue;
        }
        relax(graph, paths, &settled, x, |y, d| heap.insert(x, y, d))?;
    }
    Ok(())
}

/// Distances and shortest path tree computed by [`Dijkstra`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: Node,
    dist: Vec<Option<Weight>>,
    pred: Vec<Option<OptionalNode>>,
}

impl ShortestPaths {
    fn new(n: usize, source: Node) -> Self {
        let mut dist = vec![None; n];
        let mut pred = vec![None; n];
        dist[source as usize] = Some(0);
        pred[source as usize] = OptionalNode::new(source);

        Self { source, dist, pred }
    }

    pub fn source(&self) -> Node {
        self.source
    }

    /// Distance to every node; `None` marks nodes without a path from the source
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.dist
    }

    /// Distance to `v` or `None` if `v` is not reachable
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<Weight> {
        self.dist[v as usize]
    }

    pub fn is_reachable(&self, v: Node) -> bool {
        self.distance_to(v).is_some()
    }

    /// Predecessor of `v` on a shortest path. The source is its own predecessor;
    /// unreachable nodes have none.
    /// ** Panics if `v >= n` **
    pub fn predecessor(&self, v: Node) -> Option<Node> {
        self.pred[v as usize].map(|p| p.get())
    }

    /// Returns a shortest path `source, ..., v` or `None` if `v` is not reachable
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.is_reachable(v) {
            return None;
        }

        let mut path = vec![v];
        let mut u = v;
        while u != self.source {
            u = self.predecessor(u)?;
            path.push(u);
        }
        path.reverse();
        Some(path)
    }

    /// Nodes without a path from the source
    pub fn unreachable(&self) -> impl Iterator<Item = Node> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|&(_, d)| d.is_none())
            .map(|(v, _)| v as Node)
    }
}

/// Provides shortest paths as a method on every graph
pub trait ShortestPath: AdjacencyList {
    /// Runs [`Dijkstra`] with the default configuration
    fn dijkstra(&self, source: Node) -> Result<ShortestPaths> {
        Dijkstra::new().run(self, source)
    }
}

impl<G: AdjacencyList> ShortestPath for G {}
