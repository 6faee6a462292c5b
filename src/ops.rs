/*!
# Graph Operations

Capability traits shared by all graph containers. Algorithms are written against these
traits only, so that every algorithm runs on adjacency lists as well as on adjacency matrices.

Read-only queries follow the convention that out-of-range nodes are a programming error:
** Panics if `u >= n` ** is noted where applicable. Every operation that builds or mutates a
graph instead validates its arguments and returns a [`Result`].
*/

use std::ops::Range;

use itertools::Itertools;
use tracing::debug;

use crate::{error::*, *};

/// Orientation of the edges of a graph
pub trait GraphDirection {
    const IS_DIRECTED: bool;
}

/// Edges are ordered pairs (arcs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed;

/// Edges are unordered pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

impl GraphDirection for Directed {
    const IS_DIRECTED: bool = true;
}

impl GraphDirection for Undirected {
    const IS_DIRECTED: bool = false;
}

/// Static properties of a graph representation
pub trait GraphType {
    type Dir: GraphDirection;
    type Weight: EdgeWeight;

    /// Returns *true* if edges are ordered pairs
    fn is_directed(&self) -> bool {
        Self::Dir::IS_DIRECTED
    }

    /// Returns *true* if edges carry caller supplied weights
    fn is_valued(&self) -> bool {
        Self::Weight::IS_VALUED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range of all node labels.
    /// In contrast to an iterator borrowing the graph, the range may be used
    /// where additional mutable references of the graph are needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Returns an error if `u` is not a node of the graph
    fn check_node(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                n: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// An undirected edge is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    type NeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    type WeightedNeighborIter<'a>: Iterator<Item = (Node, Self::Weight)> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// For directed graphs these are the successors.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Same as [`AdjacencyList::neighbors_of`] but also yields the weight of each edge
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> Self::WeightedNeighborIter<'_>;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns the weight of the edge `(u, v)` if it exists
    /// ** Panics if `u >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Self::Weight> {
        self.weighted_neighbors_of(u)
            .find(|&(x, _)| x == v)
            .map(|(_, w)| w)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_unstable();
        edges.into_iter()
    }

    /// Returns an iterator over the outgoing weighted edges of a given vertex
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w.cost()))
    }

    /// Returns an iterator over all weighted edges of the graph.
    /// Undirected edges are reported once as `(u, v, w)` with `u < v`.
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.weighted_edges_of(u)
                .filter(|e| Self::Dir::IS_DIRECTED || e.0 < e.1)
        })
    }

    /// Projects the graph onto an `n x n` matrix where cell `(u, v)` holds the weight of
    /// edge `(u, v)` and `0` marks an absent edge. Unweighted edges are projected to `1`;
    /// undirected graphs yield a symmetric matrix.
    fn to_adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        let mut matrix = vec![vec![0; self.len()]; self.len()];
        for u in self.vertices_range() {
            for (v, w) in self.weighted_neighbors_of(u) {
                matrix[u as usize][v as usize] = w.cost();
            }
        }
        matrix
    }
}

macro_rules! propagate {
    ($out_fn:ident => $fn:ident($($arg:ident : $type:ty),*) -> $ret:ty) => {
        #[inline]
        fn $out_fn(&self, $($arg: $type),*) -> $ret {
            self.$fn($($arg),*)
        }
    };
}

/// Additional getters for graphs whose edges are arcs
pub trait DirectedAdjacencyList: AdjacencyList + GraphType<Dir = Directed> {
    type InNeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    propagate!(out_neighbors_of => neighbors_of(u : Node) -> Self::NeighborIter<'_>);
    propagate!(out_degree_of => degree_of(u : Node) -> NumNodes);

    /// Returns an iterator over nodes `v` with arcs `(v, u)`
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> Self::InNeighborIter<'_>;

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the out-degree and in-degree of a given vertex
    /// ** Panics if `u >= n` **
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Same as [`AdjacencyTest::has_edge`] but reports out-of-range nodes as an error
    fn try_has_edge(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.has_edge(u, v))
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// Note that for undirected graphs with edge {u,v} this function always returns *true*.
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges.
///
/// For directed graphs an edge `(u, v)` is the arc FROM u TO v; for undirected graphs
/// `(u, v)` and `(v, u)` denote the same edge. Self-loops are rejected by all representations.
pub trait GraphEdgeEditing: GraphNew + GraphNodeOrder + GraphType {
    /// Inserts the edge `(u, v)` with the given weight or overwrites the weight of an
    /// already present edge. Returns *true* if the edge was present before.
    fn try_add_weighted_edge(&mut self, u: Node, v: Node, weight: Self::Weight) -> Result<bool>;

    /// Inserts the edge `(u, v)` with unit weight unless it is already present, in which
    /// case the graph is left untouched. Returns *true* if the edge was present before.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }

    /// Adds all weighted edges in the collection.
    /// Weights are ignored by unweighted representations.
    fn add_weighted_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<()> {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|d| d.into()) {
            self.try_add_weighted_edge(u, v, Self::Weight::from_cell(w))?;
        }
        Ok(())
    }

    /// Removes the edge *(u,v)* from the graph.
    /// If the edge was removed, returns *true* and *false* otherwise.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Removes all edges in the collection and returns the number of edges actually removed
    fn remove_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<NumEdges> {
        let mut removed = 0;
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            removed += self.try_remove_edge(u, v)? as NumEdges;
        }
        Ok(removed)
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self>;

    /// Create a graph from a number of nodes and an iterator over WeightedEdges
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<Self>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }

    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.add_weighted_edges(edges)?;
        Ok(graph)
    }
}

/// Returns the order of a square matrix or an error naming the first malformed row
pub fn matrix_order<R: AsRef<[Weight]>>(matrix: &[R]) -> Result<NumNodes> {
    let expected = matrix.len();
    if let Some((row, r)) = matrix
        .iter()
        .enumerate()
        .find(|(_, r)| r.as_ref().len() != expected)
    {
        return Err(GraphError::NotSquare {
            row,
            len: r.as_ref().len(),
            expected,
        });
    }
    Ok(expected as NumNodes)
}

/// Construction of a graph from an adjacency matrix where a nonzero cell `(i, j)` denotes
/// an edge `(i, j)` weighted by the cell value.
pub trait GraphFromMatrix: Sized {
    /// Builds the graph from a square matrix.
    ///
    /// - Nonzero diagonal cells are skipped since self-loops are not representable.
    /// - Undirected graphs only read the upper triangle (`j >= i`), so an asymmetric
    ///   input matrix is interpreted through its upper half.
    /// - Unweighted graphs ignore the cell values beyond zero/nonzero.
    fn from_matrix<R: AsRef<[Weight]>>(matrix: &[R]) -> Result<Self>;
}

impl<G: GraphEdgeEditing + GraphEdgeOrder> GraphFromMatrix for G {
    fn from_matrix<R: AsRef<[Weight]>>(matrix: &[R]) -> Result<Self> {
        let n = matrix_order(matrix)?;
        let mut graph = Self::new(n);
        let mut skipped_loops = 0;

        for (i, row) in matrix.iter().enumerate() {
            let first = if <G as GraphType>::Dir::IS_DIRECTED { 0 } else { i };
            for (j, &cell) in row.as_ref().iter().enumerate().skip(first) {
                if cell == 0 {
                    continue;
                }
                if i == j {
                    skipped_loops += 1;
                    continue;
                }
                graph.try_add_weighted_edge(
                    i as Node,
                    j as Node,
                    <G as GraphType>::Weight::from_cell(cell),
                )?;
            }
        }

        if skipped_loops > 0 {
            debug!(skipped_loops, "ignored nonzero diagonal cells");
        }
        debug!(
            n,
            m = graph.number_of_edges(),
            directed = <G as GraphType>::Dir::IS_DIRECTED,
            "graph built from adjacency matrix"
        );

        Ok(graph)
    }
}

/// Computation of the graph with all arcs reversed
pub trait GraphInverse: GraphType<Dir = Directed> + Sized {
    /// Returns a new graph on the same nodes with an arc `(v, u, w)` for every arc `(u, v, w)`.
    /// The graph itself is left untouched.
    fn compute_inverse(&self) -> Self;
}
