/*!
# Graph Algorithms

This module provides the classical graph algorithms built on top of the graph representations
in this crate. All algorithms are re-exported at the top level of this module, so you can
simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversals, timestamped depth-first search, strongly connected components,
shortest paths and minimum spanning trees.

Where it makes sense, algorithms are provided as **iterators** ([`Bfs`], [`Dfs`],
[`StronglyConnectedComponents`]) so results can be consumed lazily. Algorithms with options
are configurable structs ([`Dijkstra`], [`Prim`]); the common cases are also available as
methods on the graphs themselves.
*/

mod dijkstra;
mod kosaraju;
mod prim;
mod timestamps;
mod traversal;

use crate::{error::*, prelude::*};

pub use dijkstra::*;
pub use kosaraju::*;
pub use prim::*;
pub use timestamps::*;
pub use traversal::*;
