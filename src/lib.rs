/*!
`wgraphs` is a graph data structure & algorithms library for small to medium sized graphs that are
- **unlabelled** : Nodes are numbered `0` to `n - 1`
- **weighted** (optionally) : Edges may carry a signed integer weight
- **directed** or **undirected**

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` and its weighted counterpart
`WeightedEdge(Node, Node, Weight)` with `Weight = i64`.

### Directed vs Undirected

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)`.
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are
  considered distinct.

Self-loops are never stored. Between two nodes there is at most one edge (per orientation);
adding it again updates its weight.

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`AdjList`](crate::repr::AdjList) and its undirected/valued variants store incidence lists
  referring into an arena of edge records,
- [`AdjMatrix`](crate::repr::AdjMatrix) and its variants store a dense `n x n` matrix of weights
  where `0` denotes an absent edge.

Both are generic over the [`EdgeWeight`] of their edges and convert into each other via `From`.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their
needs using the *Builder* / *Setter* pattern before running them on a provided graph.
The commonly used functionality is also implemented via traits on the graph itself.

Operations that build or mutate graphs, as well as algorithm entry points, validate their
input and return a [`Result`](crate::error::Result). Events are reported through `tracing`;
the library never installs a subscriber itself.

# Usage

- [`prelude`] includes definitions for nodes, edges, weights, errors, basic graph operations,
  and all graph representations,
- [`algo`] includes traversals (`graph.bfs(s)`, `graph.dfs(s)`), timestamped depth-first
  search, strongly connected components, Dijkstra's shortest paths and Prim's minimum
  spanning tree,
- [`heap`] includes the binary min-heaps the algorithms are built on,
- [`gens`] includes a generator for random adjacency matrices.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod heap;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod weight;

pub use edge::*;
pub use node::*;
pub use weight::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, the error type,
/// all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, Result},
        node::*,
        ops::*,
        repr::*,
        weight::*,
    };
}
