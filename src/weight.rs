/*!
# Edge Weights

All weights are signed integers ([`Weight`]). Containers are generic over an [`EdgeWeight`]
which either stores such an integer per edge (`Weight` itself) or nothing at all
([`Unweighted`]). An unweighted edge has an implicit unit cost: this is the value it takes
in an adjacency matrix and the length algorithms like Dijkstra assign to it.

In an adjacency matrix the value `0` means "no edge"; hence a stored weight can never be `0`.
*/

use std::fmt::Debug;

/// Signed integer weights of edges, distances and matrix cells
pub type Weight = i64;

/// Weight attached to every edge of a graph container.
pub trait EdgeWeight: Copy + Debug + PartialEq + Eq + Default + 'static {
    /// *true* if graphs with this weight store a caller supplied weight per edge
    const IS_VALUED: bool;

    /// Weight used for edges inserted without an explicit weight
    const UNIT: Self;

    /// Converts a nonzero matrix cell into a weight
    fn from_cell(cell: Weight) -> Self;

    /// Value of this weight as a matrix cell and as the length of an edge
    fn cost(self) -> Weight;
}

/// Marker for graphs whose edges carry no weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unweighted;

impl EdgeWeight for Unweighted {
    const IS_VALUED: bool = false;
    const UNIT: Self = Unweighted;

    #[inline]
    fn from_cell(_: Weight) -> Self {
        Unweighted
    }

    #[inline]
    fn cost(self) -> Weight {
        1
    }
}

impl EdgeWeight for Weight {
    const IS_VALUED: bool = true;
    const UNIT: Self = 1;

    #[inline]
    fn from_cell(cell: Weight) -> Self {
        cell
    }

    #[inline]
    fn cost(self) -> Weight {
        self
    }
}
