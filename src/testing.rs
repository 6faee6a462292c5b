/// Installs a `tracing` subscriber writing to the test harness once per test binary.
/// Enable output with `RUST_LOG=wgraphs=debug cargo test -- --nocapture`.
#[cfg(test)]
pub(crate) fn init_logging() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Stamps out contract tests for a graph representation.
/// Every representation should be tested for each capability trait it implements.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{
                error, ops::*, repr::*,
                testing::{init_logging, test_graph_ops},
                Edge, NumEdges, NumNodes, Weight, WeightedEdge,
            };
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a sorted list of at most `m_ub` distinct random edges without self-loops
            /// for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).filter_map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    if u == v {
                        None
                    } else if $undirected {
                        Some(Edge(u, v).normalized())
                    } else {
                        Some(Edge(u, v))
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Dense reference adjacency for a list of edges
            fn reference_matrix(n: NumNodes, edges: &[Edge]) -> Vec<Vec<bool>> {
                let mut adj = vec![vec![false; n as usize]; n as usize];
                for &Edge(u, v) in edges {
                    adj[u as usize][v as usize] = true;
                    if $undirected {
                        adj[v as usize][u as usize] = true;
                    }
                }
                adj
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_directed(), !$undirected);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.check_node(n).is_err());
            }
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let adj = reference_matrix(n, &edges);

                        let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges() as usize, edges.len());
                        assert_eq!(graph.weighted_edges().count(), edges.len());
                        assert_eq!(edges, graph.ordered_edges($undirected).collect_vec());

                        for u in 0..n {
                            let expected = (0..n).filter(|&v| adj[u as usize][v as usize]).collect_vec();
                            let mut neighbors = graph.neighbors_of(u).collect_vec();
                            neighbors.sort_unstable();

                            assert_eq!(neighbors, expected);
                            assert_eq!(graph.degree_of(u) as usize, expected.len());

                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), adj[u as usize][v as usize]);
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let adj = reference_matrix(n, &edges);

                        let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                        for u in 0..n {
                            let expected = (0..n).filter(|&v| adj[v as usize][u as usize]).collect_vec();
                            let mut in_neighbors = graph.in_neighbors_of(u).collect_vec();
                            in_neighbors.sort_unstable();

                            assert_eq!(in_neighbors, expected);
                            assert_eq!(graph.in_degree_of(u) as usize, expected.len());
                            assert_eq!(
                                graph.total_degree_of(u),
                                graph.out_degree_of(u) + graph.in_degree_of(u)
                            );
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            init_logging();
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let mut adj = reference_matrix(n, &edges);

                        let mut graph = <$graph>::new(n);
                        assert!(graph.is_edgeless());
                        for &Edge(u, v) in &edges {
                            assert!(!graph.try_add_edge(u, v).unwrap());
                            if $undirected {
                                assert!(graph.try_add_edge(v, u).unwrap());
                            }
                        }

                        let mut m = edges.len() as NumEdges;
                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(graph.is_edgeless(), edges.is_empty());

                        for _ in 0..m {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            if u == v {
                                continue;
                            }

                            let present = adj[u as usize][v as usize];
                            assert_eq!(graph.try_remove_edge(u, v).unwrap(), present);

                            if present {
                                adj[u as usize][v as usize] = false;
                                if $undirected {
                                    adj[v as usize][u as usize] = false;
                                }
                                m -= 1;
                            }

                            assert_eq!(m, graph.number_of_edges());
                            assert!(!graph.has_edge(u, v));
                        }

                        let remaining = graph.edges($undirected).collect_vec();
                        assert_eq!(graph.remove_edges(remaining).unwrap(), m);
                        assert!(graph.is_edgeless());
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphInverse) => {
        #[test]
        fn test_graph_inverse() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [1 as NumNodes, 10, 30] {
                for m_ub in [n * 2, n * 5] {
                    let edges = random_edges(rng, n, m_ub as NumEdges);
                    let graph = <$graph>::from_edges(n, edges.iter()).unwrap();
                    let inverse = graph.compute_inverse();

                    assert_eq!(inverse.number_of_nodes(), n);
                    assert_eq!(inverse.number_of_edges(), graph.number_of_edges());
                    for &Edge(u, v) in &edges {
                        assert!(inverse.has_edge(v, u));
                        assert_eq!(inverse.weight_of(v, u), graph.weight_of(u, v));
                    }

                    for u in 0..n {
                        assert_eq!(
                            inverse.neighbors_of(u).sorted().collect_vec(),
                            graph.in_neighbors_of(u).sorted().collect_vec()
                        );
                    }

                    assert_eq!(
                        inverse.compute_inverse().ordered_edges(false).collect_vec(),
                        graph.ordered_edges(false).collect_vec()
                    );
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphFromMatrix) => {
        #[test]
        fn test_graph_from_matrix() {
            init_logging();
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [0 as NumNodes, 1, 8, 25] {
                let mut matrix: Vec<Vec<Weight>> = vec![vec![0; n as usize]; n as usize];
                for u in 0..n as usize {
                    for v in 0..n as usize {
                        if u == v || ($undirected && v < u) || !rng.random_bool(0.3) {
                            continue;
                        }
                        let w: Weight = rng.random_range(1..10) * if rng.random_bool(0.2) { -1 } else { 1 };
                        matrix[u][v] = w;
                        if $undirected {
                            matrix[v][u] = w;
                        }
                    }
                }

                let graph = <$graph>::from_matrix(&matrix).unwrap();
                let expected = if graph.is_valued() {
                    matrix.clone()
                } else {
                    matrix.iter().map(|r| r.iter().map(|&c| (c != 0) as Weight).collect_vec()).collect_vec()
                };

                let nonzero = matrix.iter().flatten().filter(|&&c| c != 0).count();
                let m = if $undirected { nonzero / 2 } else { nonzero };

                assert_eq!(graph.number_of_edges() as usize, m);
                assert_eq!(graph.to_adjacency_matrix(), expected);
                assert_eq!(
                    <$graph>::from_matrix(&graph.to_adjacency_matrix()).unwrap().to_adjacency_matrix(),
                    expected
                );
            }

            let ragged: Vec<Vec<Weight>> = vec![vec![0, 1, 0], vec![0, 0]];
            assert!(matches!(
                <$graph>::from_matrix(&ragged),
                Err(error::GraphError::NotSquare { row: 0, len: 3, expected: 2 })
            ));
        }
    };
    ($graph:ident<$undirected:literal>: WeightUpdate) => {
        #[test]
        fn test_weight_update() {
            let mut graph = <$graph>::new(4);

            assert!(!graph.try_add_weighted_edge(1, 3, 7).unwrap());
            assert!(graph.try_add_weighted_edge(1, 3, -2).unwrap());
            assert_eq!(graph.number_of_edges(), 1);
            assert_eq!(graph.weight_of(1, 3), Some(-2));
            if $undirected {
                assert_eq!(graph.weight_of(3, 1), Some(-2));
            }

            assert!(graph.try_add_edge(1, 3).unwrap());
            assert_eq!(graph.weight_of(1, 3), Some(-2));

            assert_eq!(
                graph.try_add_weighted_edge(0, 2, 0),
                Err(error::GraphError::ZeroWeight { from: 0, to: 2 })
            );
            assert_eq!(graph.number_of_edges(), 1);
            assert_eq!(
                graph.weighted_edges().collect_vec(),
                vec![WeightedEdge(1, 3, -2)]
            );
        }
    };
}

pub(crate) use test_graph_ops;
