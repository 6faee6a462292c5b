/*!
Strongly connected components via Kosaraju's two-pass algorithm:

1. A [timestamped depth-first search](super::dfs_timestamps) over the graph yields all
   nodes ordered by decreasing finish time.
2. The inverse graph is searched in that order; every search started at a yet unvisited
   node collects exactly one strongly connected component.

Components are emitted in the order their roots appear in the decreasing-finish order,
which is a topological order of the condensation. Within a component, nodes are listed in
the post-order of the second search.
*/

use std::iter::FusedIterator;

use super::*;

/// Iterator over the strongly connected components of a directed graph.
/// Every node is part of exactly one emitted component.
pub struct StronglyConnectedComponents<G>
where
    G: DirectedAdjacencyList,
{
    inverse: G,
    order: std::vec::IntoIter<Node>,
    visited: NodeBitSet,
}

impl<G> StronglyConnectedComponents<G>
where
    G: DirectedAdjacencyList + GraphInverse,
{
    /// Runs the first pass on `graph` and prepares the second one
    pub fn new(graph: &G) -> Self {
        let order = graph.dfs_timestamps().nodes_by_decreasing_finish();
        Self {
            inverse: graph.compute_inverse(),
            order: order.into_iter(),
            visited: NodeBitSet::new(graph.number_of_nodes()),
        }
    }
}

struct StackFrame<'a, G>
where
    G: AdjacencyList + 'a,
{
    node: Node,
    neighbors: G::NeighborIter<'a>,
}

impl<G> StronglyConnectedComponents<G>
where
    G: DirectedAdjacencyList,
{
    /// Collects all unvisited nodes reachable from `root` in the inverse graph in post-order
    fn search(&mut self, root: Node) -> Vec<Node> {
        let inverse = &self.inverse;
        let visited = &mut self.visited;

        let mut component = Vec::new();
        let mut call_stack: Vec<StackFrame<'_, G>> = vec![StackFrame {
            node: root,
            neighbors: inverse.neighbors_of(root),
        }];
        visited.set_bit(root);

        while let Some(frame) = call_stack.last_mut() {
            let u = frame.node;
            match frame.neighbors.find(|&v| !visited.set_bit(v)) {
                Some(v) => {
                    call_stack.push(StackFrame {
                        node: v,
                        neighbors: inverse.neighbors_of(v),
                    });
                }
                None => {
                    call_stack.pop();
                    component.push(u);
                }
            }
        }

        component
    }
}

impl<G> Iterator for StronglyConnectedComponents<G>
where
    G: DirectedAdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let root = self.order.find(|&u| !self.visited.get_bit(u))?;
        let component = self.search(root);
        tracing::trace!(root, size = component.len(), "strongly connected component");
        Some(component)
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<G> where G: DirectedAdjacencyList {}

/// Provides Kosaraju's algorithm as a method on directed graphs
pub trait Kosaraju: DirectedAdjacencyList + GraphInverse {
    /// Returns an iterator over the strongly connected components
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<Self> {
        StronglyConnectedComponents::new(self)
    }

    /// Returns all strongly connected components.
    /// Nodes that are not on any cycle form singleton components.
    #[tracing::instrument(skip(self), fields(n = self.number_of_nodes()))]
    fn kosaraju(&self) -> Vec<Vec<Node>> {
        let components: Vec<_> = self.strongly_connected_components().collect();
        tracing::debug!(components = components.len(), "kosaraju finished");
        components
    }
}

impl<G: DirectedAdjacencyList + GraphInverse> Kosaraju for G {}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}
