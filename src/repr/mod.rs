/*!
# Graph Representations

Two storage backends, each available directed and undirected as well as plain and weighted:

| | directed | undirected |
|---|---|---|
| adjacency list | [`AdjList`], [`AdjListValued`] | [`AdjListUndir`], [`AdjListUndirValued`] |
| adjacency matrix | [`AdjMatrix`], [`AdjMatrixValued`] | [`AdjMatrixUndir`], [`AdjMatrixUndirValued`] |

Lists use memory linear in `n + m` and enumerate neighbors in insertion order; matrices use
`n^2` cells, answer adjacency queries in constant time and enumerate neighbors by label.
Plain and weighted graphs share one implementation parameterized by an [`EdgeWeight`].
*/

use std::iter::Map;

use crate::{error::*, ops::*, *};

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;

/// Directed graph stored as adjacency lists
pub type AdjList = DirectedListGraph<Unweighted>;

/// Directed weighted graph stored as adjacency lists
pub type AdjListValued = DirectedListGraph<Weight>;

/// Undirected graph stored as adjacency lists
pub type AdjListUndir = UndirectedListGraph<Unweighted>;

/// Undirected weighted graph stored as adjacency lists
pub type AdjListUndirValued = UndirectedListGraph<Weight>;

/// Directed graph stored as adjacency matrix
pub type AdjMatrix = DirectedMatrixGraph<Unweighted>;

/// Directed weighted graph stored as adjacency matrix
pub type AdjMatrixValued = DirectedMatrixGraph<Weight>;

/// Undirected graph stored as adjacency matrix
pub type AdjMatrixUndir = UndirectedMatrixGraph<Unweighted>;

/// Undirected weighted graph stored as adjacency matrix
pub type AdjMatrixUndirValued = UndirectedMatrixGraph<Weight>;

/// Neighbor iterator derived from a weighted neighbor iterator by dropping the weights
pub type Unweigh<I, W> = Map<I, fn((Node, W)) -> Node>;

pub(crate) fn drop_weight<W>(item: (Node, W)) -> Node {
    item.0
}

/// Checks that an edge `(u, v)` carrying `weight` may be stored in `graph`
pub(crate) fn validate_edge<G: GraphNodeOrder, W: EdgeWeight>(
    graph: &G,
    u: Node,
    v: Node,
    weight: W,
) -> Result<()> {
    graph.check_node(u)?;
    graph.check_node(v)?;
    if u == v {
        return Err(GraphError::SelfLoop { node: u });
    }
    if weight.cost() == 0 {
        return Err(GraphError::ZeroWeight { from: u, to: v });
    }
    Ok(())
}
