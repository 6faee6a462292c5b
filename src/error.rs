/*!
# Errors

All fallible operations of this crate return [`Result`], whose error type [`GraphError`]
distinguishes between invalid arguments (bad node indices, self-loops, malformed input
matrices), violated algorithm preconditions (negative weights for Dijkstra) and path
lengths that exceed the range of [`Weight`].

Structural properties of a valid input, such as a graph that is not connected, are never
reported as errors: the corresponding results carry that information instead
(see [`ShortestPaths::unreachable`](crate::algo::ShortestPaths::unreachable) and
[`SpanningTree::is_spanning`](crate::algo::SpanningTree::is_spanning)).
*/

use thiserror::Error;

use crate::{Node, NumNodes, Weight};

/// Shorthand for results of graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph containers and algorithms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {node} is out of range (graph has {n} nodes)")]
    NodeOutOfRange { node: Node, n: NumNodes },

    #[error("self-loops are not permitted (node {node})")]
    SelfLoop { node: Node },

    #[error("weight 0 cannot be stored for ({from},{to}) as it denotes an absent edge")]
    ZeroWeight { from: Node, to: Node },

    #[error("input matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("negative weight {weight} on ({from},{to}) is not supported")]
    NegativeWeight { from: Node, to: Node, weight: Weight },

    #[error("path length overflows when extended by ({from},{to})")]
    DistanceOverflow { from: Node, to: Node },
}
