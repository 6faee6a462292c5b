/*!
Depth-first search with discovery and finish timestamps.

A single clock is shared by all events: it is incremented before a node is discovered and
before it is finished, so that timestamps run from `1` to `2n`. The search starts at node `0`
and restarts at the smallest undiscovered label whenever the current tree is exhausted;
neighbors are explored in the order the representation enumerates them.

The recursion is simulated by an explicit call stack, so deep graphs cannot overflow the
thread stack.
*/

use super::*;

/// Time of a discovery or finish event
pub type Timestamp = u32;

/// Result of a complete depth-first search over all nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsTimestamps {
    discovery: Vec<Timestamp>,
    finish: Vec<Timestamp>,
    parent: Vec<Option<OptionalNode>>,
    roots: Vec<Node>,
}

impl DfsTimestamps {
    /// Discovery time of `u`
    /// ** Panics if `u >= n` **
    pub fn discovery(&self, u: Node) -> Timestamp {
        self.discovery[u as usize]
    }

    /// Finish time of `u`
    /// ** Panics if `u >= n` **
    pub fn finish(&self, u: Node) -> Timestamp {
        self.finish[u as usize]
    }

    pub fn discovery_times(&self) -> &[Timestamp] {
        &self.discovery
    }

    pub fn finish_times(&self) -> &[Timestamp] {
        &self.finish
    }

    /// Parent of `u` in the DFS forest, `None` for roots
    /// ** Panics if `u >= n` **
    pub fn parent(&self, u: Node) -> Option<Node> {
        self.parent[u as usize].map(|p| p.get())
    }

    /// Start nodes of the DFS trees in the order they were used
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Returns *true* if `y` is a proper descendant of `x` in the DFS forest, i.e.
    /// `discovery(x) < discovery(y)` and `finish(y) < finish(x)`
    /// ** Panics if `x >= n || y >= n` **
    pub fn is_descendant(&self, x: Node, y: Node) -> bool {
        self.discovery(x) < self.discovery(y) && self.finish(y) < self.finish(x)
    }

    /// Returns all nodes sorted by decreasing finish time
    pub fn nodes_by_decreasing_finish(&self) -> Vec<Node> {
        let mut order: Vec<Node> = (0..self.finish.len() as Node).collect();
        order.sort_unstable_by_key(|&u| std::cmp::Reverse(self.finish[u as usize]));
        order
    }

    /// Returns all nodes sorted by discovery time
    pub fn preorder(&self) -> Vec<Node> {
        let mut order: Vec<Node> = (0..self.discovery.len() as Node).collect();
        order.sort_unstable_by_key(|&u| self.discovery[u as usize]);
        order
    }
}

struct StackFrame<'a, G>
where
    G: AdjacencyList + 'a,
{
    node: Node,
    neighbors: G::NeighborIter<'a>,
}

/// Runs the timestamped depth-first search over the whole graph
pub fn dfs_timestamps<G: AdjacencyList>(graph: &G) -> DfsTimestamps {
    let n = graph.len();
    let mut discovery: Vec<Timestamp> = vec![0; n];
    let mut finish: Vec<Timestamp> = vec![0; n];
    let mut parent: Vec<Option<OptionalNode>> = vec![None; n];
    let mut roots = Vec::new();

    let mut clock: Timestamp = 0;
    let mut call_stack: Vec<StackFrame<'_, G>> = Vec::with_capacity(32);

    for root in graph.vertices_range() {
        if discovery[root as usize] != 0 {
            continue;
        }

        roots.push(root);
        clock += 1;
        discovery[root as usize] = clock;
        call_stack.push(StackFrame {
            node: root,
            neighbors: graph.neighbors_of(root),
        });

        while let Some(frame) = call_stack.last_mut() {
            let u = frame.node;
            match frame.neighbors.find(|&v| discovery[v as usize] == 0) {
                Some(v) => {
                    clock += 1;
                    discovery[v as usize] = clock;
                    parent[v as usize] = OptionalNode::new(u);
                    call_stack.push(StackFrame {
                        node: v,
                        neighbors: graph.neighbors_of(v),
                    });
                }
                None => {
                    call_stack.pop();
                    clock += 1;
                    finish[u as usize] = clock;
                }
            }
        }
    }

    tracing::debug!(n, trees = roots.len(), "depth-first search finished");

    DfsTimestamps {
        discovery,
        finish,
        parent,
        roots,
    }
}

/// Provides the timestamped depth-first search as a method on every graph
pub trait DepthFirstSearch: AdjacencyList {
    /// Runs a depth-first search over all nodes, see [`dfs_timestamps`]
    fn dfs_timestamps(&self) -> DfsTimestamps {
        dfs_timestamps(self)
    }
}

impl<G: AdjacencyList> DepthFirstSearch for G {}
