/*!
# Adjacency Lists

List representations keep all edges of the graph in one global arena of [`EdgeRecord`]s.
Every node stores the indices of its incident records in insertion order, which is also
the order in which traversals enumerate its neighbors.

- [`DirectedListGraph`] keeps an outgoing and an incoming incidence list per node.
- [`UndirectedListGraph`] keeps one incidence list per node; an edge `{u, v}` is a single
  record referenced by both endpoints.

Removing an edge moves the last record of the arena into the freed slot (`swap_remove`)
and patches the incidence lists of the moved record. Hence the number of edges always
equals the size of the arena and record indices are only stable until the next removal.
*/

use smallvec::SmallVec;

use super::*;

mod directed;
mod undirected;

pub use directed::*;
pub use undirected::*;

/// Index of a record in the edge arena of a list graph
pub type EdgeId = u32;

/// Incidence list of a single node
pub(crate) type Incidences = SmallVec<[EdgeId; 4]>;

/// An edge stored in a list graph.
/// For undirected graphs the orientation `source -> target` is the one of insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord<W> {
    source: Node,
    target: Node,
    weight: W,
}

impl<W: EdgeWeight> EdgeRecord<W> {
    pub(crate) fn new(source: Node, target: Node, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    pub fn source(&self) -> Node {
        self.source
    }

    pub fn target(&self) -> Node {
        self.target
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// Returns the endpoint opposite to `u`. As self-loops are never stored,
    /// passing the source yields the target and vice versa.
    pub fn other(&self, u: Node) -> Node {
        if self.source == u {
            self.target
        } else {
            self.source
        }
    }

    pub fn to_weighted_edge(&self) -> WeightedEdge {
        WeightedEdge(self.source, self.target, self.weight.cost())
    }
}

/// Iterator over the records referenced by an incidence list, yielding the opposite
/// endpoint together with the weight of each record.
pub struct IncidentNeighbors<'a, W> {
    records: &'a [EdgeRecord<W>],
    ids: std::slice::Iter<'a, EdgeId>,
    node: Node,
}

impl<'a, W> IncidentNeighbors<'a, W> {
    pub(crate) fn new(records: &'a [EdgeRecord<W>], ids: &'a [EdgeId], node: Node) -> Self {
        Self {
            records,
            ids: ids.iter(),
            node,
        }
    }
}

impl<W: EdgeWeight> Iterator for IncidentNeighbors<'_, W> {
    type Item = (Node, W);

    fn next(&mut self) -> Option<Self::Item> {
        let &id = self.ids.next()?;
        let record = &self.records[id as usize];
        Some((record.other(self.node), record.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<W: EdgeWeight> ExactSizeIterator for IncidentNeighbors<'_, W> {}

/// Removes `id` from an incidence list while keeping the order of the remaining entries
pub(crate) fn detach(ids: &mut Incidences, id: EdgeId) {
    if let Some(pos) = ids.iter().position(|&x| x == id) {
        ids.remove(pos);
    }
}

/// Replaces the entry `old` of an incidence list by `new`
pub(crate) fn relabel(ids: &mut Incidences, old: EdgeId, new: EdgeId) {
    if let Some(x) = ids.iter_mut().find(|x| **x == old) {
        *x = new;
    }
}

pub(crate) mod macros {
    macro_rules! impl_list_graph_ops {
        ($struct:ident, $node:ident, $getter:ident, $directed:ident) => {
            impl<W: EdgeWeight> GraphType for $struct<W> {
                type Dir = $directed;
                type Weight = W;
            }

            impl<W: EdgeWeight> GraphNodeOrder for $struct<W> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.nodes.len() as NumNodes
                }
            }

            impl<W: EdgeWeight> GraphEdgeOrder for $struct<W> {
                fn number_of_edges(&self) -> NumEdges {
                    self.records.len() as NumEdges
                }
            }

            impl<W: EdgeWeight> GraphNew for $struct<W> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        nodes: (0..n).map($node::new).collect(),
                        records: Vec::new(),
                    }
                }
            }

            impl<W: EdgeWeight> $struct<W> {
                /// Returns the record of a given node.
                /// ** Panics if `u >= n` **
                pub fn node(&self, u: Node) -> &$node {
                    &self.nodes[u as usize]
                }

                /// Returns the records of all nodes ordered by label
                pub fn nodes(&self) -> &[$node] {
                    &self.nodes
                }

                /// Returns the global edge arena.
                /// Each edge of the graph appears exactly once.
                pub fn $getter(&self) -> &[EdgeRecord<W>] {
                    &self.records
                }
            }
        };
    }

    pub(crate) use impl_list_graph_ops;
}
