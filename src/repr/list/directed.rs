use tracing::trace;

use super::{macros::impl_list_graph_ops, *};
use crate::testing::test_graph_ops;

/// A node of a [`DirectedListGraph`] with its outgoing and incoming arcs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedNode {
    label: Node,
    out_arcs: Incidences,
    in_arcs: Incidences,
}

impl DirectedNode {
    fn new(label: Node) -> Self {
        Self {
            label,
            out_arcs: Incidences::new(),
            in_arcs: Incidences::new(),
        }
    }

    pub fn label(&self) -> Node {
        self.label
    }

    /// Arena indices of the outgoing arcs in insertion order
    pub fn out_arcs(&self) -> &[EdgeId] {
        &self.out_arcs
    }

    /// Arena indices of the incoming arcs in insertion order
    pub fn in_arcs(&self) -> &[EdgeId] {
        &self.in_arcs
    }
}

/// A directed graph storing a global arc list plus per-node incidence lists.
///
/// # Type parameters
/// - `W`: [`EdgeWeight`] of the arcs, either [`Unweighted`] or [`Weight`].
#[derive(Debug, Clone)]
pub struct DirectedListGraph<W: EdgeWeight> {
    nodes: Vec<DirectedNode>,
    records: Vec<EdgeRecord<W>>,
}

impl_list_graph_ops!(DirectedListGraph, DirectedNode, arcs, Directed);

impl<W: EdgeWeight> DirectedListGraph<W> {
    /// Returns the arena index of the arc `(u, v)`
    fn find_arc(&self, u: Node, v: Node) -> Option<EdgeId> {
        self.nodes[u as usize]
            .out_arcs
            .iter()
            .copied()
            .find(|&id| self.records[id as usize].target == v)
    }

    /// Appends an arc without checking for duplicates
    pub(crate) fn push_arc(&mut self, u: Node, v: Node, weight: W) {
        let id = self.records.len() as EdgeId;
        self.records.push(EdgeRecord::new(u, v, weight));
        self.nodes[u as usize].out_arcs.push(id);
        self.nodes[v as usize].in_arcs.push(id);
    }

    fn remove_arc(&mut self, id: EdgeId) {
        let record = self.records[id as usize];
        detach(&mut self.nodes[record.source as usize].out_arcs, id);
        detach(&mut self.nodes[record.target as usize].in_arcs, id);

        let last = (self.records.len() - 1) as EdgeId;
        self.records.swap_remove(id as usize);

        if id != last {
            let moved = self.records[id as usize];
            relabel(&mut self.nodes[moved.source as usize].out_arcs, last, id);
            relabel(&mut self.nodes[moved.target as usize].in_arcs, last, id);
        }
    }

    /// Returns the outgoing arcs of `u` in insertion order
    /// ** Panics if `u >= n` **
    pub fn out_arcs_of(&self, u: Node) -> impl Iterator<Item = &EdgeRecord<W>> + '_ {
        self.nodes[u as usize]
            .out_arcs
            .iter()
            .map(|&id| &self.records[id as usize])
    }

    /// Returns the incoming arcs of `u` in insertion order
    /// ** Panics if `u >= n` **
    pub fn in_arcs_of(&self, u: Node) -> impl Iterator<Item = &EdgeRecord<W>> + '_ {
        self.nodes[u as usize]
            .in_arcs
            .iter()
            .map(|&id| &self.records[id as usize])
    }
}

impl<W: EdgeWeight> AdjacencyList for DirectedListGraph<W> {
    type NeighborIter<'a>
        = Unweigh<IncidentNeighbors<'a, W>, W>
    where
        Self: 'a;

    type WeightedNeighborIter<'a>
        = IncidentNeighbors<'a, W>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.weighted_neighbors_of(u).map(drop_weight as fn(_) -> _)
    }

    fn weighted_neighbors_of(&self, u: Node) -> Self::WeightedNeighborIter<'_> {
        IncidentNeighbors::new(&self.records, &self.nodes[u as usize].out_arcs, u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nodes[u as usize].out_arcs.len() as NumNodes
    }

    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.records.iter().map(|r| r.to_weighted_edge())
    }
}

impl<W: EdgeWeight> DirectedAdjacencyList for DirectedListGraph<W> {
    type InNeighborIter<'a>
        = Unweigh<IncidentNeighbors<'a, W>, W>
    where
        Self: 'a;

    fn in_neighbors_of(&self, u: Node) -> Self::InNeighborIter<'_> {
        IncidentNeighbors::new(&self.records, &self.nodes[u as usize].in_arcs, u)
            .map(drop_weight as fn(_) -> _)
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.nodes[u as usize].in_arcs.len() as NumNodes
    }
}

impl<W: EdgeWeight> AdjacencyTest for DirectedListGraph<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.find_arc(u, v).is_some()
    }
}

impl<W: EdgeWeight> GraphEdgeEditing for DirectedListGraph<W> {
    fn try_add_weighted_edge(&mut self, u: Node, v: Node, weight: W) -> Result<bool> {
        validate_edge(self, u, v, weight)?;

        match self.find_arc(u, v) {
            Some(id) => {
                self.records[id as usize].weight = weight;
                Ok(true)
            }
            None => {
                self.push_arc(u, v, weight);
                Ok(false)
            }
        }
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        validate_edge(self, u, v, W::UNIT)?;

        if self.find_arc(u, v).is_some() {
            return Ok(true);
        }
        self.push_arc(u, v, W::UNIT);
        Ok(false)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        match self.find_arc(u, v) {
            Some(id) => {
                self.remove_arc(id);
                trace!(u, v, m = self.records.len(), "removed arc");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<W: EdgeWeight> GraphInverse for DirectedListGraph<W> {
    fn compute_inverse(&self) -> Self {
        let mut inverse = Self::new(self.number_of_nodes());
        for record in &self.records {
            inverse.push_arc(record.target, record.source, record.weight);
        }
        inverse
    }
}

test_graph_ops!(
    test_adj_list,
    AdjList,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        GraphInverse,
        GraphFromMatrix
    )
);
test_graph_ops!(
    test_adj_list_valued,
    AdjListValued,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        GraphInverse,
        GraphFromMatrix,
        WeightUpdate
    )
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn incidence_lists_follow_insertion_order() {
        let g = AdjList::from_edges(4, [(0, 3), (0, 1), (2, 0), (0, 2)]).unwrap();
        assert_eq!(g.neighbors_of(0).collect_vec(), vec![3, 1, 2]);
        assert_eq!(g.in_neighbors_of(0).collect_vec(), vec![2]);
        assert_eq!(g.node(0).label(), 0);
        assert_eq!(g.node(0).out_arcs().len(), 3);
        assert_eq!(g.arcs().len(), 4);
    }

    #[test]
    fn removal_patches_moved_record() {
        let mut g = AdjListValued::from_weighted_edges(
            4,
            [(0, 1, 5), (1, 2, 6), (2, 3, 7), (3, 0, 8)],
        )
        .unwrap();

        // (3, 0) is the last record and moves into slot 0
        assert!(g.try_remove_edge(0, 1).unwrap());
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.arcs()[0].source(), 3);

        assert_eq!(g.weight_of(3, 0), Some(8));
        assert_eq!(g.in_neighbors_of(0).collect_vec(), vec![3]);
        assert_eq!(g.out_arcs_of(3).map(|r| r.target()).collect_vec(), vec![0]);
        assert_eq!(g.in_arcs_of(0).map(|r| r.weight()).collect_vec(), vec![8]);

        assert!(!g.try_remove_edge(0, 1).unwrap());
        assert!(g.try_remove_edge(3, 0).unwrap());
        assert!(g.try_remove_edge(1, 2).unwrap());
        assert!(g.try_remove_edge(2, 3).unwrap());
        assert!(g.is_edgeless());
    }

    #[test]
    fn plain_add_keeps_weight() {
        let mut g = AdjListValued::new(3);
        assert!(!g.try_add_weighted_edge(0, 1, 9).unwrap());
        assert!(g.try_add_edge(0, 1).unwrap());
        assert_eq!(g.weight_of(0, 1), Some(9));

        assert!(!g.try_add_edge(1, 2).unwrap());
        assert_eq!(g.weight_of(1, 2), Some(1));
    }

    #[test]
    fn invalid_arguments() {
        let mut g = AdjList::new(3);
        assert_eq!(
            g.try_add_edge(0, 3),
            Err(GraphError::NodeOutOfRange { node: 3, n: 3 })
        );
        assert_eq!(g.try_add_edge(1, 1), Err(GraphError::SelfLoop { node: 1 }));
        assert!(g.try_remove_edge(5, 0).is_err());
        assert!(g.try_has_edge(0, 7).is_err());

        let mut g = AdjListValued::new(3);
        assert_eq!(
            g.try_add_weighted_edge(0, 1, 0),
            Err(GraphError::ZeroWeight { from: 0, to: 1 })
        );
        assert!(g.is_edgeless());
    }

    #[test]
    fn empty_graph() {
        let g = AdjList::new(0);
        assert!(g.is_empty());
        assert!(g.compute_inverse().is_empty());
        assert!(g.to_adjacency_matrix().is_empty());
    }
}
