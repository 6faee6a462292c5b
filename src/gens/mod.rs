/*!
# Graph Generators

Random adjacency matrices and graphs built from them.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `RandomMatrix::new()`).
2. Set parameters using the builder methods (e.g., `.nodes(n).edges(m)`).
3. Generate a matrix via `generate(rng)` or, reproducibly, via `generate_seeded()`.

The [`RandomGraph`] trait wraps this into a constructor available on every graph that can be
built from a matrix.
*/

use fxhash::FxHashMap;
use rand::Rng;

use crate::{error::*, prelude::*};

mod matrix;

pub use matrix::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Builder variant of [`NumNodesGen::set_nodes`]
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Builder variant of [`NumEdgesGen::set_edges`]
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// Draws `m` distinct values from `0..end` uniformly at random.
///
/// Emulates the first `m` steps of a Fisher-Yates shuffle of `0..end` and only records
/// displaced values in a map (Batagelj & Brandes, *Efficient Generation of Large Random
/// Networks*, 2005), so the cost does not depend on `end`.
fn sample_distinct<R: Rng>(rng: &mut R, end: u64, m: u64) -> Vec<u64> {
    debug_assert!(m <= end);

    let mut displaced: FxHashMap<u64, u64> = FxHashMap::default();
    (0..m)
        .map(|cur| {
            let drawn = rng.random_range(cur..end);
            let value = displaced.get(&drawn).copied().unwrap_or(drawn);
            let replacement = displaced.get(&cur).copied().unwrap_or(cur);
            displaced.insert(drawn, replacement);
            value
        })
        .collect()
}

/// Random graphs for every representation that can be built from a matrix.
pub trait RandomGraph: GraphFromMatrix + GraphType {
    /// Creates a graph with `n` nodes and `min(m, max_edges)` edges chosen uniformly
    /// at random. Valued graphs receive weights in `1..=max_weight`.
    fn gnm<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges, max_weight: Weight) -> Result<Self> {
        let matrix = RandomMatrix::new()
            .nodes(n)
            .edges(m)
            .undirected(!Self::Dir::IS_DIRECTED)
            .max_weight(if Self::Weight::IS_VALUED { max_weight } else { 1 })
            .generate(rng);
        Self::from_matrix(&matrix)
    }
}

impl<G: GraphFromMatrix + GraphType> RandomGraph for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn sample_distinct_values() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        for (end, m) in [(0, 0), (1, 1), (10, 3), (10, 10), (1000, 50), (u64::MAX, 20)] {
            let values = sample_distinct(rng, end, m);
            assert_eq!(values.len() as u64, m);
            assert!(values.iter().all(|&x| x < end));
            assert_eq!(values.iter().unique().count() as u64, m);
        }

        let mut all = sample_distinct(rng, 25, 25);
        all.sort_unstable();
        assert_eq!(all, (0..25).collect_vec());
    }

    #[test]
    fn random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        let g = AdjListUndirValued::gnm(rng, 20, 30, 9).unwrap();
        assert_eq!(g.number_of_edges(), 30);
        assert!(g.weighted_edges().all(|e| (1..=9).contains(&e.weight())));

        let g = AdjMatrix::gnm(rng, 5, 100, 9).unwrap();
        assert_eq!(g.number_of_edges(), 20);

        let g = AdjListUndir::gnm(rng, 0, 10, 9).unwrap();
        assert!(g.is_empty());
    }
}
