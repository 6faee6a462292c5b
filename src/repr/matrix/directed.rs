use tracing::debug;

use super::*;
use crate::testing::test_graph_ops;

/// A directed graph stored as `n x n` matrix where cell `(u, v)` holds the weight of the
/// arc `(u, v)`, or `0` if absent. Unweighted arcs are stored as `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedMatrixGraph<W: EdgeWeight> {
    cells: Cells,
    num_edges: NumEdges,
    _weight: PhantomData<W>,
}

impl<W: EdgeWeight> GraphType for DirectedMatrixGraph<W> {
    type Dir = Directed;
    type Weight = W;
}

impl<W: EdgeWeight> GraphNodeOrder for DirectedMatrixGraph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.cells.n as NumNodes
    }
}

impl<W: EdgeWeight> GraphEdgeOrder for DirectedMatrixGraph<W> {
    fn number_of_edges(&self) -> NumEdges {
        debug_assert_eq!(self.cells.count_nonzero(), self.num_edges as usize);
        self.num_edges
    }
}

impl<W: EdgeWeight> GraphNew for DirectedMatrixGraph<W> {
    fn new(n: NumNodes) -> Self {
        Self {
            cells: Cells::new(n as usize),
            num_edges: 0,
            _weight: PhantomData,
        }
    }
}

impl<W: EdgeWeight> DirectedMatrixGraph<W> {
    /// Returns the raw cell `(u, v)`, i.e. the weight of the arc or `0` if absent
    /// ** Panics if `u >= n || v >= n` **
    pub fn cell(&self, u: Node, v: Node) -> Weight {
        assert!(v < self.number_of_nodes());
        self.cells.get(u, v)
    }

    /// Returns row `u` of the matrix
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Weight] {
        self.cells.row(u)
    }

    /// Returns all nodes `v` with an arc `(u, v)` in increasing order
    pub fn successors(&self, u: Node) -> Result<Vec<Node>> {
        self.check_node(u)?;
        Ok(self.neighbors_of(u).collect())
    }

    /// Returns all nodes `v` with an arc `(v, u)` in increasing order
    pub fn predecessors(&self, u: Node) -> Result<Vec<Node>> {
        self.check_node(u)?;
        Ok(self.in_neighbors_of(u).collect())
    }

    fn store(&mut self, u: Node, v: Node, cell: Weight) {
        if self.cells.set(u, v, cell) == 0 {
            self.num_edges += 1;
        }
    }
}

impl<W: EdgeWeight> AdjacencyList for DirectedMatrixGraph<W> {
    type NeighborIter<'a>
        = Unweigh<RowNeighbors<'a, W>, W>
    where
        Self: 'a;

    type WeightedNeighborIter<'a>
        = RowNeighbors<'a, W>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.weighted_neighbors_of(u).map(drop_weight as fn(_) -> _)
    }

    fn weighted_neighbors_of(&self, u: Node) -> Self::WeightedNeighborIter<'_> {
        RowNeighbors::new(self.cells.row(u))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.cells.row(u).iter().filter(|&&c| c != 0).count() as NumNodes
    }

    fn weight_of(&self, u: Node, v: Node) -> Option<W> {
        let cell = self.cell(u, v);
        (cell != 0).then(|| W::from_cell(cell))
    }

    fn to_adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        self.cells.to_rows()
    }
}

impl<W: EdgeWeight> DirectedAdjacencyList for DirectedMatrixGraph<W> {
    type InNeighborIter<'a>
        = ColumnNeighbors<'a>
    where
        Self: 'a;

    fn in_neighbors_of(&self, u: Node) -> Self::InNeighborIter<'_> {
        ColumnNeighbors::new(&self.cells, u)
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_neighbors_of(u).count() as NumNodes
    }
}

impl<W: EdgeWeight> AdjacencyTest for DirectedMatrixGraph<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.cell(u, v) != 0
    }
}

impl<W: EdgeWeight> GraphEdgeEditing for DirectedMatrixGraph<W> {
    fn try_add_weighted_edge(&mut self, u: Node, v: Node, weight: W) -> Result<bool> {
        validate_edge(self, u, v, weight)?;
        let present = self.has_edge(u, v);
        self.store(u, v, weight.cost());
        Ok(present)
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        validate_edge(self, u, v, W::UNIT)?;
        if self.has_edge(u, v) {
            return Ok(true);
        }
        self.store(u, v, W::UNIT.cost());
        Ok(false)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        let removed = self.cells.set(u, v, 0) != 0;
        if removed {
            self.num_edges -= 1;
        }
        Ok(removed)
    }
}

impl<W: EdgeWeight> GraphInverse for DirectedMatrixGraph<W> {
    fn compute_inverse(&self) -> Self {
        debug!(n = self.number_of_nodes(), "transposing adjacency matrix");
        Self {
            cells: self.cells.transposed(),
            num_edges: self.num_edges,
            _weight: PhantomData,
        }
    }
}

impl<W: EdgeWeight> fmt::Display for DirectedMatrixGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cells)
    }
}

impl<W: EdgeWeight> From<&DirectedListGraph<W>> for DirectedMatrixGraph<W> {
    fn from(list: &DirectedListGraph<W>) -> Self {
        let mut matrix = Self::new(list.number_of_nodes());
        for record in list.arcs() {
            matrix.store(record.source(), record.target(), record.weight().cost());
        }
        matrix
    }
}

impl<W: EdgeWeight> From<&DirectedMatrixGraph<W>> for DirectedListGraph<W> {
    fn from(matrix: &DirectedMatrixGraph<W>) -> Self {
        let mut list = Self::new(matrix.number_of_nodes());
        for u in matrix.vertices_range() {
            for (v, w) in matrix.weighted_neighbors_of(u) {
                list.push_arc(u, v, w);
            }
        }
        list
    }
}

test_graph_ops!(
    test_adj_matrix,
    AdjMatrix,
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
    test_adj_matrix_valued,
    AdjMatrixValued,
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

    fn sample() -> AdjMatrixValued {
        let matrix: Vec<Vec<Weight>> = vec![
            vec![0, 4, 2, 0, 0],
            vec![0, 0, 1, 5, 0],
            vec![0, 0, 0, 8, 10],
            vec![0, 0, 0, 0, 2],
            vec![3, 0, 0, 0, 0],
        ];
        AdjMatrixValued::from_matrix(&matrix).unwrap()
    }

    #[test]
    fn successors_and_predecessors() {
        let g = sample();
        assert_eq!(g.number_of_edges(), 8);
        assert_eq!(g.successors(0).unwrap(), vec![1, 2]);
        assert_eq!(g.predecessors(3).unwrap(), vec![1, 2]);
        assert_eq!(g.predecessors(0).unwrap(), vec![4]);
        assert_eq!(g.in_degree_of(2), 2);
        assert_eq!(
            g.successors(5),
            Err(GraphError::NodeOutOfRange { node: 5, n: 5 })
        );
        assert!(g.predecessors(9).is_err());
    }

    #[test]
    fn inverse_transposes() {
        let g = sample();
        let inv = g.compute_inverse();
        for u in g.vertices() {
            for v in g.vertices() {
                assert_eq!(g.cell(u, v), inv.cell(v, u));
            }
        }
        assert_eq!(inv.number_of_edges(), g.number_of_edges());
        assert_eq!(inv.compute_inverse(), g);
    }

    #[test]
    fn diagonal_is_ignored() {
        let matrix: Vec<Vec<Weight>> = vec![vec![7, 1], vec![0, 3]];
        let g = AdjMatrix::from_matrix(&matrix).unwrap();
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.to_adjacency_matrix(), vec![vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn list_conversion_roundtrip() {
        let g = sample();
        let list = AdjListValued::from(&g);
        assert_eq!(list.number_of_edges(), g.number_of_edges());
        assert_eq!(list.to_adjacency_matrix(), g.to_adjacency_matrix());
        assert_eq!(AdjMatrixValued::from(&list), g);
        assert_eq!(
            list.weighted_edges().collect_vec(),
            g.weighted_edges().collect_vec()
        );
    }

    #[test]
    fn display_rows() {
        let g = AdjMatrixValued::from_weighted_edges(3, [(0, 1, 12), (2, 0, -3)]).unwrap();
        assert_eq!(format!("{g}"), " 0 12  0\n 0  0  0\n-3  0  0\n");
    }
}
