/*!
Breadth-first and depth-first search and traversal-derived utilities.

- [`TraversalSearch`] is a lazy iterator over the nodes reachable from a start node,
  optionally reporting the predecessor of each node in the search tree. Its frontier
  decides the order: [`Bfs`] uses a queue, [`Dfs`] a stack.
- [`TraversalTree`] turns a predecessor-reporting traversal into parent or depth arrays.
- [`Traversal`] exposes the searches directly as methods on every graph.

Neighbors are enqueued in the order the representation enumerates them: insertion order for
adjacency lists and increasing label for adjacency matrices.
*/

use std::{collections::VecDeque, marker::PhantomData};

use super::*;

/// Access to the graph a search runs on
pub trait WithGraphRef<G> {
    fn graph_ref(&self) -> &G;
}

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both entries to the same node.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Frontier of a [`TraversalSearch`]. The container type determines the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from([u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic search iterator over the nodes reachable from a start node.
///
/// Nodes are marked as visited when they enter the frontier, so every reachable node is
/// yielded exactly once. The item type is either [`Node`] or [`PredecessorOfNode`].
pub struct TraversalSearch<'a, G, S, I = Node>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    _item: PhantomData<I>,
}

/// Breadth-first search using a queue
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// Depth-first search using a stack. Nodes are yielded when popped, hence the order
/// differs from the discovery order of [`dfs_timestamps`](super::dfs_timestamps).
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

/// A BFS iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BfsWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A DFS iterator that records predecessor information
pub type DfsWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new search starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = NodeBitSet::new(graph.number_of_nodes());
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            _item: PhantomData,
        }
    }

    /// Returns *true* if `u` has been discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Once the search is exhausted, restarts it at the smallest unvisited node.
    /// Returns *false* if the frontier is not empty or all nodes were visited.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        if self.sequencer.cardinality() > 0 {
            return false;
        }

        match self.visited.iter_cleared_bits().next() {
            Some(u) => {
                self.visited.set_bit(u);
                self.sequencer.push(I::new_without_predecessor(u));
                true
            }
            None => false,
        }
    }

    /// Consumes the search and returns true iff there exists a path from the start node to `u`
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.any(|v| v.item() == u)
    }
}

impl<G, S, I> WithGraphRef<G> for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let frontier = self.sequencer.cardinality();
        (
            frontier,
            Some(frontier + self.graph.len() - self.visited.cardinality() as usize),
        )
    }
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure (parents, depths).
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and returns the parent of every node in the implied tree.
    /// The start node and all unreached nodes are their own parent.
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
        tree
    }

    /// Consumes the iterator and computes the depth of each node in the traversal tree
    /// (root depth = 0). Unreached nodes are reported as `None`.
    fn depths(&mut self) -> Vec<Option<NumNodes>> {
        let mut depths = vec![None; self.graph_ref().len()];
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = Some(
                pred_with_item
                    .predecessor()
                    .map_or(0, |p| depths[p as usize].map_or(0, |d: NumNodes| d + 1)),
            );
        }
        depths
    }
}

impl<'a, G, S> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
}

/// Provides searches as methods on every graph
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    /// ** Panics if `start >= n` **
    fn bfs_with_predecessor(&self, start: Node) -> BfsWithPredecessor<'_, Self> {
        BfsWithPredecessor::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation.
    /// ** Panics if `start >= n` **
    fn dfs_with_predecessor(&self, start: Node) -> DfsWithPredecessor<'_, Self> {
        DfsWithPredecessor::new(self, start)
    }

    /// Returns all nodes reachable from `start` in the order a BFS visits them,
    /// or an error if `start` is not a node of the graph.
    #[tracing::instrument(skip(self), fields(n = self.number_of_nodes()))]
    fn bfs_order(&self, start: Node) -> Result<Vec<Node>> {
        self.check_node(start)?;
        let order: Vec<Node> = self.bfs(start).collect();
        tracing::debug!(reached = order.len(), "bfs finished");
        Ok(order)
    }

    /// Returns *true* if there is a path from `u` to `v`
    /// ** Panics if `u >= n || v >= n` **
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.bfs(u).is_node_reachable(v)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_follows_insertion_order() {
        let g = AdjList::from_edges(6, [(0, 2), (0, 1), (1, 3), (2, 3), (3, 4)]).unwrap();
        assert_eq!(g.bfs_order(0).unwrap(), vec![0, 2, 1, 3, 4]);
        assert_eq!(g.bfs_order(5).unwrap(), vec![5]);
        assert_eq!(
            g.bfs_order(6),
            Err(GraphError::NodeOutOfRange { node: 6, n: 6 })
        );

        let m = AdjMatrix::from_edges(6, [(0, 2), (0, 1), (1, 3), (2, 3), (3, 4)]).unwrap();
        assert_eq!(m.bfs_order(0).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn bfs_visits_each_reachable_node_once() {
        let g = AdjListUndir::from_edges(7, [(0, 1), (1, 2), (2, 0), (2, 3), (5, 6)]).unwrap();
        let order = g.bfs(3).collect_vec();
        assert_eq!(order.len(), 4);
        assert_eq!(order.iter().unique().count(), 4);
        assert!(g.is_reachable(0, 3));
        assert!(!g.is_reachable(0, 6));
    }

    #[test]
    fn bfs_tree() {
        let g = AdjListUndir::from_edges(5, [(0, 1), (1, 2), (0, 3)]).unwrap();
        assert_eq!(g.bfs_with_predecessor(0).parent_array(), vec![0, 0, 1, 0, 4]);
        assert_eq!(
            g.bfs_with_predecessor(0).depths(),
            vec![Some(0), Some(1), Some(2), Some(1), None]
        );

        let mut search = g.bfs_with_predecessor(2);
        assert_eq!(search.next(), Some((2, 2)));
        assert_eq!(search.next().and_then(|x| x.predecessor()), Some(2));
        assert!(search.did_visit_node(0));
        assert!(!search.did_visit_node(4));
    }

    #[test]
    fn dfs_uses_stack_order() {
        let g = AdjList::from_edges(6, [(0, 2), (0, 1), (1, 3), (2, 3), (3, 4)]).unwrap();
        assert_eq!(g.dfs(0).collect_vec(), vec![0, 1, 3, 4, 2]);
        assert_eq!(
            g.dfs_with_predecessor(0).parent_array(),
            vec![0, 0, 0, 1, 3, 5]
        );
    }

    #[test]
    fn restart_covers_all_nodes() {
        let g = AdjListUndir::from_edges(6, [(0, 1), (2, 3), (3, 4)]).unwrap();
        let mut search = g.dfs(3);
        let mut order = search.by_ref().collect_vec();
        while search.try_restart_at_unvisited() {
            order.extend(search.by_ref());
        }
        assert_eq!(order, vec![3, 4, 2, 0, 1, 5]);
        assert!(!search.try_restart_at_unvisited());
    }
}
