use tracing::trace;

use super::{macros::impl_list_graph_ops, *};
use crate::testing::test_graph_ops;

/// A node of an [`UndirectedListGraph`] with its incident edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedNode {
    label: Node,
    incident: Incidences,
}

impl UndirectedNode {
    fn new(label: Node) -> Self {
        Self {
            label,
            incident: Incidences::new(),
        }
    }

    pub fn label(&self) -> Node {
        self.label
    }

    /// Arena indices of the incident edges in insertion order
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident
    }
}

/// An undirected graph storing a global edge list plus per-node incidence lists.
/// Each edge is stored once and referenced by both of its endpoints.
///
/// # Type parameters
/// - `W`: [`EdgeWeight`] of the edges, either [`Unweighted`] or [`Weight`].
#[derive(Debug, Clone)]
pub struct UndirectedListGraph<W: EdgeWeight> {
    nodes: Vec<UndirectedNode>,
    records: Vec<EdgeRecord<W>>,
}

impl_list_graph_ops!(UndirectedListGraph, UndirectedNode, edge_records, Undirected);

impl<W: EdgeWeight> UndirectedListGraph<W> {
    /// Returns the arena index of the edge `{u, v}`.
    /// Scans the shorter of both incidence lists.
    fn find_edge(&self, u: Node, v: Node) -> Option<EdgeId> {
        let (u, v) = if self.nodes[u as usize].incident.len() <= self.nodes[v as usize].incident.len()
        {
            (u, v)
        } else {
            (v, u)
        };

        self.nodes[u as usize]
            .incident
            .iter()
            .copied()
            .find(|&id| self.records[id as usize].other(u) == v)
    }

    /// Appends an edge without checking for duplicates
    pub(crate) fn push_edge(&mut self, u: Node, v: Node, weight: W) {
        let id = self.records.len() as EdgeId;
        self.records.push(EdgeRecord::new(u, v, weight));
        self.nodes[u as usize].incident.push(id);
        self.nodes[v as usize].incident.push(id);
    }

    fn remove_record(&mut self, id: EdgeId) {
        let record = self.records[id as usize];
        detach(&mut self.nodes[record.source as usize].incident, id);
        detach(&mut self.nodes[record.target as usize].incident, id);

        let last = (self.records.len() - 1) as EdgeId;
        self.records.swap_remove(id as usize);

        if id != last {
            let moved = self.records[id as usize];
            relabel(&mut self.nodes[moved.source as usize].incident, last, id);
            relabel(&mut self.nodes[moved.target as usize].incident, last, id);
        }
    }

    /// Returns the edges incident to `u` in insertion order
    /// ** Panics if `u >= n` **
    pub fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = &EdgeRecord<W>> + '_ {
        self.nodes[u as usize]
            .incident
            .iter()
            .map(|&id| &self.records[id as usize])
    }
}

impl<W: EdgeWeight> AdjacencyList for UndirectedListGraph<W> {
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
        IncidentNeighbors::new(&self.records, &self.nodes[u as usize].incident, u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nodes[u as usize].incident.len() as NumNodes
    }

    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.records.iter().map(|r| r.to_weighted_edge().normalized())
    }
}

impl<W: EdgeWeight> AdjacencyTest for UndirectedListGraph<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.find_edge(u, v).is_some()
    }
}

impl<W: EdgeWeight> GraphEdgeEditing for UndirectedListGraph<W> {
    fn try_add_weighted_edge(&mut self, u: Node, v: Node, weight: W) -> Result<bool> {
        validate_edge(self, u, v, weight)?;

        match self.find_edge(u, v) {
            Some(id) => {
                self.records[id as usize].weight = weight;
                Ok(true)
            }
            None => {
                self.push_edge(u, v, weight);
                Ok(false)
            }
        }
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        validate_edge(self, u, v, W::UNIT)?;

        if self.find_edge(u, v).is_some() {
            return Ok(true);
        }
        self.push_edge(u, v, W::UNIT);
        Ok(false)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        match self.find_edge(u, v) {
            Some(id) => {
                self.remove_record(id);
                trace!(u, v, m = self.records.len(), "removed edge");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

test_graph_ops!(
    test_adj_list_undir,
    AdjListUndir,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphFromMatrix)
);
test_graph_ops!(
    test_adj_list_undir_valued,
    AdjListUndirValued,
    true,
    (
        GraphNew,
        AdjacencyList,
        GraphEdgeEditing,
        GraphFromMatrix,
        WeightUpdate
    )
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn edge_is_shared_by_both_endpoints() {
        let mut g = AdjListUndirValued::new(3);
        assert!(!g.try_add_weighted_edge(2, 0, 4).unwrap());
        assert!(g.try_add_weighted_edge(0, 2, 6).unwrap());

        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.edge_records().len(), 1);
        assert_eq!(g.weight_of(2, 0), Some(6));
        assert_eq!(g.weight_of(0, 2), Some(6));
        assert_eq!(g.node(0).incident_edges(), g.node(2).incident_edges());
        assert_eq!(
            g.incident_edges_of(0).map(|r| r.other(0)).collect_vec(),
            vec![2]
        );
        assert_eq!(g.weighted_edges().collect_vec(), vec![WeightedEdge(0, 2, 6)]);

        assert!(g.try_remove_edge(0, 2).unwrap());
        assert_eq!(g.degree_of(0), 0);
        assert_eq!(g.degree_of(2), 0);
        assert!(!g.has_edge(2, 0));
    }

    #[test]
    fn construction_reads_upper_triangle() {
        let matrix: [[Weight; 5]; 5] = [
            [0, 3, 0, 4, 0],
            [3, 0, 2, 0, 0],
            [0, 2, 0, 5, 1],
            [4, 0, 5, 0, 6],
            [0, 0, 1, 6, 0],
        ];
        let g = AdjListUndirValued::from_matrix(matrix.as_slice()).unwrap();
        assert_eq!(g.number_of_edges(), 6);
        assert_eq!(g.to_adjacency_matrix(), matrix.map(|r| r.to_vec()).to_vec());
        assert_eq!(g.neighbors_of(2).collect_vec(), vec![1, 3, 4]);

        // lower triangle is ignored
        let lower_only: [[Weight; 2]; 2] = [[0, 0], [7, 0]];
        let g = AdjListUndirValued::from_matrix(lower_only.as_slice()).unwrap();
        assert!(g.is_edgeless());
    }

    #[test]
    fn invalid_arguments() {
        let mut g = AdjListUndir::new(2);
        assert_eq!(g.try_add_edge(0, 0), Err(GraphError::SelfLoop { node: 0 }));
        assert_eq!(
            g.try_add_edge(2, 0),
            Err(GraphError::NodeOutOfRange { node: 2, n: 2 })
        );
        let ragged: Vec<Vec<Weight>> = vec![vec![0, 1], vec![1]];
        assert_eq!(
            AdjListUndir::from_matrix(&ragged).err(),
            Some(GraphError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }
}
