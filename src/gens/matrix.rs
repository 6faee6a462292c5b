use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::debug;

use super::*;

/// Generator for square adjacency matrices with a fixed number of nonzero entries.
///
/// - `.nodes(n)` and `.edges(m)` set the matrix order and the number of edges
/// - `.undirected(true)` produces a symmetric matrix; every edge occupies two cells
/// - `.loops(true)` admits nonzero diagonal cells
/// - `.allow_negative(true)` flips the sign of each weight with probability 1/2
/// - `.max_weight(w)` bounds the absolute value of the weights to `1..=w`
/// - `.seed(s)` fixes the random source of [`RandomMatrix::generate_seeded`]
///
/// If `m` exceeds the number of available cells, every available cell is filled.
#[derive(Debug, Clone, Copy)]
pub struct RandomMatrix {
    n: NumNodes,
    m: NumEdges,
    undirected: bool,
    loops: bool,
    allow_negative: bool,
    max_weight: Weight,
    seed: u64,
}

impl Default for RandomMatrix {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            undirected: false,
            loops: false,
            allow_negative: false,
            max_weight: 1,
            seed: 0,
        }
    }
}

impl RandomMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }

    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    pub fn allow_negative(mut self, allow_negative: bool) -> Self {
        self.allow_negative = allow_negative;
        self
    }

    /// ** Panics if `max_weight < 1` **
    pub fn max_weight(mut self, max_weight: Weight) -> Self {
        assert!(max_weight >= 1, "weights must be nonzero");
        self.max_weight = max_weight;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of edges that fit into the matrix with the current settings
    pub fn max_edges(&self) -> u64 {
        let n = self.n as u64;
        match (self.undirected, self.loops) {
            (false, false) => n * n.saturating_sub(1),
            (false, true) => n * n,
            (true, false) => n * n.saturating_sub(1) / 2,
            (true, true) => n * n.saturating_sub(1) / 2 + n,
        }
    }

    /// Maps `0..max_edges()` bijectively onto the cells an edge may occupy
    fn edge_at(&self, x: u64) -> Edge {
        let n = self.n as u64;
        match (self.undirected, self.loops) {
            (false, false) => Edge::from_u64_no_loop(x, n),
            (false, true) => Edge::from_u64(x, n),
            (true, false) => Edge::from_u64_undir(x, n),
            (true, true) => {
                let off_diagonal = n * (n - 1) / 2;
                if x < off_diagonal {
                    Edge::from_u64_undir(x, n)
                } else {
                    let u = (x - off_diagonal) as Node;
                    Edge(u, u)
                }
            }
        }
    }

    /// Draws a nonzero weight
    fn weight<R: Rng>(&self, rng: &mut R) -> Weight {
        let w = rng.random_range(1..=self.max_weight);
        if self.allow_negative && rng.random_bool(0.5) {
            -w
        } else {
            w
        }
    }

    /// Generates a matrix using the provided random source
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Vec<Weight>> {
        let n = self.n as usize;
        let capacity = self.max_edges();
        let m = (self.m as u64).min(capacity);
        if m < self.m as u64 {
            debug!(requested = self.m, capacity, "edge count capped");
        }

        let mut matrix = vec![vec![0; n]; n];
        for x in sample_distinct(rng, capacity, m) {
            let Edge(u, v) = self.edge_at(x);
            let w = self.weight(rng);
            matrix[u as usize][v as usize] = w;
            if self.undirected {
                matrix[v as usize][u as usize] = w;
            }
        }

        matrix
    }

    /// Generates a matrix from the configured seed; equal settings yield equal matrices
    pub fn generate_seeded(&self) -> Vec<Vec<Weight>> {
        self.generate(&mut Pcg64Mcg::seed_from_u64(self.seed))
    }
}

impl NumNodesGen for RandomMatrix {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for RandomMatrix {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nonzero(matrix: &[Vec<Weight>]) -> usize {
        matrix.iter().flatten().filter(|&&c| c != 0).count()
    }

    fn diagonal(matrix: &[Vec<Weight>]) -> usize {
        (0..matrix.len()).filter(|&i| matrix[i][i] != 0).count()
    }

    #[test]
    fn directed() {
        for seed in 0..10 {
            let matrix = RandomMatrix::new()
                .nodes(12)
                .edges(40)
                .max_weight(5)
                .seed(seed)
                .generate_seeded();

            assert_eq!(matrix.len(), 12);
            assert!(matrix.iter().all(|row| row.len() == 12));
            assert_eq!(nonzero(&matrix), 40);
            assert_eq!(diagonal(&matrix), 0);
            assert!(matrix.iter().flatten().all(|&c| (0..=5).contains(&c)));
        }
    }

    #[test]
    fn undirected() {
        let matrix = RandomMatrix::new()
            .nodes(9)
            .edges(20)
            .undirected(true)
            .allow_negative(true)
            .max_weight(50)
            .seed(3)
            .generate_seeded();

        assert_eq!(nonzero(&matrix), 40);
        assert_eq!(diagonal(&matrix), 0);
        for i in 0..9 {
            for j in 0..9 {
                assert_eq!(matrix[i][j], matrix[j][i]);
            }
        }
    }

    #[test]
    fn capped_at_capacity() {
        let generator = RandomMatrix::new().nodes(4).edges(100);
        assert_eq!(generator.max_edges(), 12);
        assert_eq!(nonzero(&generator.generate_seeded()), 12);

        let generator = generator.loops(true);
        assert_eq!(generator.max_edges(), 16);
        assert_eq!(nonzero(&generator.generate_seeded()), 16);

        let generator = generator.undirected(true);
        assert_eq!(generator.max_edges(), 10);
        let matrix = generator.generate_seeded();
        assert_eq!(nonzero(&matrix), 16);
        assert_eq!(diagonal(&matrix), 4);

        let generator = generator.loops(false);
        assert_eq!(generator.max_edges(), 6);
        assert_eq!(nonzero(&generator.generate_seeded()), 12);

        for n in [0, 1] {
            let matrix = RandomMatrix::new().nodes(n).edges(5).generate_seeded();
            assert_eq!(matrix.len(), n as usize);
            assert_eq!(nonzero(&matrix), 0);
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        let generator = RandomMatrix::new()
            .nodes(15)
            .edges(30)
            .allow_negative(true)
            .max_weight(100)
            .seed(42);
        assert_eq!(generator.generate_seeded(), generator.generate_seeded());
        assert_ne!(generator.generate_seeded(), generator.seed(43).generate_seeded());
    }

    #[test]
    fn builds_graphs() {
        let matrix = RandomMatrix::new()
            .nodes(10)
            .edges(15)
            .undirected(true)
            .loops(true)
            .max_weight(7)
            .seed(5)
            .generate_seeded();

        let loops = diagonal(&matrix);
        let graph = AdjListUndirValued::from_matrix(&matrix).unwrap();
        assert_eq!(graph.number_of_edges() as usize, 15 - loops);
    }
}
