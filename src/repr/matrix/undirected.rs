use super::*;
use crate::testing::test_graph_ops;

/// An undirected graph stored as symmetric `n x n` matrix: cells `(u, v)` and `(v, u)`
/// both hold the weight of the edge `{u, v}`, or `0` if absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedMatrixGraph<W: EdgeWeight> {
    cells: Cells,
    num_edges: NumEdges,
    _weight: PhantomData<W>,
}

impl<W: EdgeWeight> GraphType for UndirectedMatrixGraph<W> {
    type Dir = Undirected;
    type Weight = W;
}

impl<W: EdgeWeight> GraphNodeOrder for UndirectedMatrixGraph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.cells.n as NumNodes
    }
}

impl<W: EdgeWeight> GraphEdgeOrder for UndirectedMatrixGraph<W> {
    fn number_of_edges(&self) -> NumEdges {
        debug_assert_eq!(self.cells.count_nonzero(), 2 * self.num_edges as usize);
        self.num_edges
    }
}

impl<W: EdgeWeight> GraphNew for UndirectedMatrixGraph<W> {
    fn new(n: NumNodes) -> Self {
        Self {
            cells: Cells::new(n as usize),
            num_edges: 0,
            _weight: PhantomData,
        }
    }
}

impl<W: EdgeWeight> UndirectedMatrixGraph<W> {
    /// Returns the raw cell `(u, v)`, i.e. the weight of the edge or `0` if absent
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

    /// Returns all nodes adjacent to `u` in increasing order
    pub fn neighbors(&self, u: Node) -> Result<Vec<Node>> {
        self.check_node(u)?;
        Ok(self.neighbors_of(u).collect())
    }

    /// Writes both mirrored cells of `{u, v}`
    fn store(&mut self, u: Node, v: Node, cell: Weight) {
        self.cells.set(v, u, cell);
        if self.cells.set(u, v, cell) == 0 {
            self.num_edges += 1;
        }
    }
}

impl<W: EdgeWeight> AdjacencyList for UndirectedMatrixGraph<W> {
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

impl<W: EdgeWeight> AdjacencyTest for UndirectedMatrixGraph<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.cell(u, v) != 0
    }
}

impl<W: EdgeWeight> GraphEdgeEditing for UndirectedMatrixGraph<W> {
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

        self.cells.set(v, u, 0);
        let removed = self.cells.set(u, v, 0) != 0;
        if removed {
            self.num_edges -= 1;
        }
        Ok(removed)
    }
}

impl<W: EdgeWeight> fmt::Display for UndirectedMatrixGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cells)
    }
}

impl<W: EdgeWeight> From<&UndirectedListGraph<W>> for UndirectedMatrixGraph<W> {
    fn from(list: &UndirectedListGraph<W>) -> Self {
        let mut matrix = Self::new(list.number_of_nodes());
        for record in list.edge_records() {
            matrix.store(record.source(), record.target(), record.weight().cost());
        }
        matrix
    }
}

impl<W: EdgeWeight> From<&UndirectedMatrixGraph<W>> for UndirectedListGraph<W> {
    fn from(matrix: &UndirectedMatrixGraph<W>) -> Self {
        let mut list = Self::new(matrix.number_of_nodes());
        for u in matrix.vertices_range() {
            for (v, w) in matrix.weighted_neighbors_of(u).filter(|&(v, _)| v > u) {
                list.push_edge(u, v, w);
            }
        }
        list
    }
}

test_graph_ops!(
    test_adj_matrix_undir,
    AdjMatrixUndir,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphFromMatrix)
);
test_graph_ops!(
    test_adj_matrix_undir_valued,
    AdjMatrixUndirValued,
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

    fn sample() -> AdjMatrixUndirValued {
        let matrix: Vec<Vec<Weight>> = vec![
            vec![0, 2, 5, 0],
            vec![2, 0, 3, 0],
            vec![5, 3, 0, 4],
            vec![0, 0, 4, 0],
        ];
        AdjMatrixUndirValued::from_matrix(&matrix).unwrap()
    }

    #[test]
    fn stays_symmetric() {
        let mut g = sample();
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.neighbors(2).unwrap(), vec![0, 1, 3]);
        assert!(g.neighbors(4).is_err());

        assert!(!g.try_add_weighted_edge(3, 0, 9).unwrap());
        assert_eq!(g.cell(0, 3), 9);
        assert_eq!(g.cell(3, 0), 9);

        assert!(g.try_remove_edge(2, 1).unwrap());
        assert_eq!(g.cell(1, 2), 0);
        assert_eq!(g.number_of_edges(), 4);

        let m = g.to_adjacency_matrix();
        for u in 0..4 {
            for v in 0..4 {
                assert_eq!(m[u][v], m[v][u]);
            }
        }
    }

    #[test]
    fn list_conversion_roundtrip() {
        let g = sample();
        let list = AdjListUndirValued::from(&g);
        assert_eq!(list.number_of_edges(), 4);
        assert_eq!(list.to_adjacency_matrix(), g.to_adjacency_matrix());
        assert_eq!(AdjMatrixUndirValued::from(&list), g);
    }
}
