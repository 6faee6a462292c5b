/*!
# Adjacency Matrices

Matrix representations store one [`Weight`] per ordered pair of nodes in a flat row-major
buffer; `0` marks an absent edge. Undirected matrices are kept symmetric at all times.
The number of edges is tracked alongside the buffer so that it never needs a full scan.
*/

use std::{fmt, marker::PhantomData};

use itertools::Itertools;

use super::*;

mod directed;
mod undirected;

pub use directed::*;
pub use undirected::*;

/// Square `n x n` buffer of matrix cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cells {
    n: usize,
    data: Vec<Weight>,
}

impl Cells {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    #[inline]
    pub(crate) fn get(&self, u: Node, v: Node) -> Weight {
        self.data[u as usize * self.n + v as usize]
    }

    /// Overwrites cell `(u, v)` and returns its previous value
    #[inline]
    pub(crate) fn set(&mut self, u: Node, v: Node, value: Weight) -> Weight {
        std::mem::replace(&mut self.data[u as usize * self.n + v as usize], value)
    }

    #[inline]
    pub(crate) fn row(&self, u: Node) -> &[Weight] {
        let start = u as usize * self.n;
        &self.data[start..start + self.n]
    }

    pub(crate) fn transposed(&self) -> Self {
        let mut result = Self::new(self.n);
        for u in 0..self.n {
            for v in 0..self.n {
                result.data[v * self.n + u] = self.data[u * self.n + v];
            }
        }
        result
    }

    pub(crate) fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&c| c != 0).count()
    }

    pub(crate) fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.data.chunks(self.n.max(1)).map(|r| r.to_vec()).collect()
    }
}

impl fmt::Display for Cells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1);

        for u in 0..self.n {
            let row = self.row(u as Node);
            writeln!(f, "{}", row.iter().map(|c| format!("{c:>width$}")).join(" "))?;
        }
        Ok(())
    }
}

/// Iterator over the nonzero cells of a matrix row
pub struct RowNeighbors<'a, W> {
    row: std::iter::Enumerate<std::slice::Iter<'a, Weight>>,
    _weight: PhantomData<W>,
}

impl<'a, W> RowNeighbors<'a, W> {
    pub(crate) fn new(row: &'a [Weight]) -> Self {
        Self {
            row: row.iter().enumerate(),
            _weight: PhantomData,
        }
    }
}

impl<W: EdgeWeight> Iterator for RowNeighbors<'_, W> {
    type Item = (Node, W);

    fn next(&mut self) -> Option<Self::Item> {
        self.row
            .find(|(_, c)| **c != 0)
            .map(|(v, &c)| (v as Node, W::from_cell(c)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.row.size_hint().1)
    }
}

/// Iterator over the rows with a nonzero cell in a given column
pub struct ColumnNeighbors<'a> {
    cells: &'a Cells,
    column: Node,
    next_row: Node,
}

impl<'a> ColumnNeighbors<'a> {
    pub(crate) fn new(cells: &'a Cells, column: Node) -> Self {
        assert!((column as usize) < cells.n);
        Self {
            cells,
            column,
            next_row: 0,
        }
    }
}

impl Iterator for ColumnNeighbors<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while (self.next_row as usize) < self.cells.n {
            let u = self.next_row;
            self.next_row += 1;
            if self.cells.get(u, self.column) != 0 {
                return Some(u);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cells.n - self.next_row as usize))
    }
}
