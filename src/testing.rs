/// Every representation should pass the same conformance tests.
/// Instantiate once per representation and directedness, listing the contract parts to check.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $directed:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{error::*, prelude::*, testing::test_graph_ops};
            use fxhash::FxHashSet;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            type TestGraph = $graph<u32, u32>;

            /// Creates a graph with vertices labelled `0..n` and returns it with the handles
            fn graph_with_vertices(n: u32) -> (TestGraph, Vec<Vertex>) {
                let mut graph = TestGraph::new($directed);
                let vertices = graph.insert_vertices(0..n);
                (graph, vertices)
            }

            $(
                test_graph_ops!($graph<$directed>: $trait);
            )*
        }
    };
    ($graph:ident<$directed:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = TestGraph::new($directed);
            assert_eq!(graph.is_directed(), $directed);
            assert_eq!(graph.number_of_vertices(), 0);
            assert_eq!(graph.number_of_edges(), 0);
            assert!(graph.is_empty());
            assert_eq!(graph.vertices().count(), 0);
            assert_eq!(graph.edges().count(), 0);

            assert!(TestGraph::new_directed().is_directed());
            assert!(TestGraph::new_undirected().is_undirected());
            assert!(TestGraph::default().is_undirected());

            let graph = TestGraph::with_capacity($directed, 10, 20);
            assert_eq!(graph.is_directed(), $directed);
            assert!(graph.is_empty());
        }
    };
    ($graph:ident<$directed:literal>: Incidence) => {
        #[test]
        fn get_edge_after_insert() {
            let (mut graph, vs) = graph_with_vertices(4);
            let e = graph.insert_edge(vs[0], vs[1], 7).unwrap();

            assert_eq!(graph.get_edge(vs[0], vs[1]).unwrap(), Some(e));
            assert!(graph.has_edge(vs[0], vs[1]).unwrap());
            assert_eq!(graph.end_vertices(e).unwrap(), (vs[0], vs[1]));
            assert_eq!(*graph.edge_data(e).unwrap(), 7);

            if $directed {
                assert_eq!(graph.get_edge(vs[1], vs[0]).unwrap(), None);
            } else {
                assert_eq!(graph.get_edge(vs[1], vs[0]).unwrap(), Some(e));
            }

            assert_eq!(graph.get_edge(vs[0], vs[2]).unwrap(), None);
        }

        #[test]
        fn opposite() {
            let (mut graph, vs) = graph_with_vertices(3);
            let e = graph.insert_edge(vs[0], vs[1], 1).unwrap();
            let l = graph.insert_edge(vs[2], vs[2], 2).unwrap();

            assert_eq!(graph.opposite(vs[0], e).unwrap(), vs[1]);
            assert_eq!(graph.opposite(vs[1], e).unwrap(), vs[0]);
            assert_eq!(graph.opposite(vs[2], l).unwrap(), vs[2]);
            assert_eq!(
                graph.opposite(vs[2], e),
                Err(GraphError::NotIncident { vertex: vs[2], edge: e })
            );
        }

        #[test]
        fn degrees_and_incident_edges() {
            let (mut graph, vs) = graph_with_vertices(4);
            let e01 = graph.insert_edge(vs[0], vs[1], 1).unwrap();
            let e02 = graph.insert_edge(vs[0], vs[2], 2).unwrap();
            let e30 = graph.insert_edge(vs[3], vs[0], 3).unwrap();
            let e00 = graph.insert_edge(vs[0], vs[0], 4).unwrap();

            let outgoing: FxHashSet<Edge> = graph.outgoing_edges(vs[0]).unwrap().collect();
            let incoming: FxHashSet<Edge> = graph.incoming_edges(vs[0]).unwrap().collect();

            if $directed {
                assert_eq!(graph.out_degree(vs[0]).unwrap(), 3);
                assert_eq!(graph.in_degree(vs[0]).unwrap(), 2);
                assert_eq!(outgoing, [e01, e02, e00].into_iter().collect());
                assert_eq!(incoming, [e30, e00].into_iter().collect());

                assert_eq!(graph.out_degree(vs[1]).unwrap(), 0);
                assert_eq!(graph.in_degree(vs[1]).unwrap(), 1);
            } else {
                assert_eq!(graph.out_degree(vs[0]).unwrap(), 4);
                assert_eq!(graph.in_degree(vs[0]).unwrap(), 4);
                assert_eq!(outgoing, [e01, e02, e30, e00].into_iter().collect());
                assert_eq!(incoming, outgoing);

                assert_eq!(graph.out_degree(vs[1]).unwrap(), 1);
                assert_eq!(graph.in_degree(vs[1]).unwrap(), 1);
            }
        }
    };
    ($graph:ident<$directed:literal>: GraphEditing) => {
        #[test]
        fn elements_in_insertion_order() {
            let (mut graph, vs) = graph_with_vertices(5);
            assert_eq!(graph.vertices().collect_vec(), vs);

            let es = vs
                .iter()
                .tuple_windows()
                .map(|(&u, &v)| graph.insert_edge(u, v, 0).unwrap())
                .collect_vec();
            assert_eq!(graph.edges().collect_vec(), es);

            graph.remove_vertex(vs[2]).unwrap();
            let w = graph.insert_vertex(5);
            assert_eq!(
                graph.vertices().collect_vec(),
                vec![vs[0], vs[1], vs[3], vs[4], w]
            );
            assert_eq!(graph.edges().collect_vec(), vec![es[0], es[3]]);
        }

        #[test]
        fn element_mutation() {
            let (mut graph, vs) = graph_with_vertices(2);
            let e = graph.insert_edge(vs[0], vs[1], 10).unwrap();

            *graph.vertex_data_mut(vs[1]).unwrap() += 100;
            *graph.edge_data_mut(e).unwrap() *= 2;

            assert_eq!(*graph.vertex_data(vs[1]).unwrap(), 101);
            assert_eq!(*graph.edge_data(e).unwrap(), 20);
        }

        #[test]
        fn duplicate_edges_are_rejected() {
            let (mut graph, vs) = graph_with_vertices(2);
            let e = graph.insert_edge(vs[0], vs[1], 1).unwrap();

            assert_eq!(
                graph.insert_edge(vs[0], vs[1], 2),
                Err(GraphError::EdgeExists { origin: vs[0], destination: vs[1] })
            );

            let reverse = graph.insert_edge(vs[1], vs[0], 3);
            if $directed {
                assert!(reverse.is_ok());
                assert_eq!(graph.number_of_edges(), 2);
            } else {
                assert_eq!(
                    reverse,
                    Err(GraphError::EdgeExists { origin: vs[1], destination: vs[0] })
                );
                assert_eq!(graph.number_of_edges(), 1);
            }

            assert_eq!(*graph.edge_data(e).unwrap(), 1);
        }

        #[test]
        fn remove_vertex_removes_incident_edges() {
            let (mut graph, vs) = graph_with_vertices(5);
            for (&u, &v) in vs.iter().tuple_combinations() {
                graph.insert_edge(u, v, 0).unwrap();
            }
            graph.insert_edge(vs[2], vs[2], 0).unwrap();
            assert_eq!(graph.number_of_edges(), 11);

            let incident: FxHashSet<Edge> = graph
                .outgoing_edges(vs[2])
                .unwrap()
                .chain(graph.incoming_edges(vs[2]).unwrap())
                .collect();
            assert_eq!(incident.len(), 5);

            assert_eq!(graph.remove_vertex(vs[2]).unwrap(), 2);
            assert_eq!(graph.number_of_vertices(), 4);
            assert_eq!(graph.number_of_edges(), 6);
            assert!(!graph.contains_vertex(vs[2]));

            for e in incident {
                assert!(!graph.contains_edge(e));
            }

            for &v in vs.iter().filter(|&&v| v != vs[2]) {
                for e in graph.outgoing_edges(v).unwrap().chain(graph.incoming_edges(v).unwrap()) {
                    assert_ne!(graph.opposite(v, e).unwrap(), vs[2]);
                }
            }
        }

        #[test]
        fn remove_edge_leaves_no_residue() {
            let (mut graph, vs) = graph_with_vertices(3);
            let e = graph.insert_edge(vs[0], vs[1], 1).unwrap();
            let f = graph.insert_edge(vs[1], vs[2], 2).unwrap();

            assert_eq!(graph.remove_edge(e).unwrap(), 1);
            assert_eq!(graph.number_of_edges(), 1);

            for v in [vs[0], vs[1]] {
                assert!(!graph.outgoing_edges(v).unwrap().contains(&e));
                assert!(!graph.incoming_edges(v).unwrap().contains(&e));
            }
            assert_eq!(graph.get_edge(vs[0], vs[1]).unwrap(), None);
            assert!(graph.outgoing_edges(vs[1]).unwrap().contains(&f));

            assert_eq!(graph.remove_edge(e), Err(GraphError::InvalidEdge(e)));
        }
    };
    ($graph:ident<$directed:literal>: Handles) => {
        #[test]
        fn foreign_handles_are_rejected() {
            let (mut graph, vs) = graph_with_vertices(2);
            let (mut other, ws) = graph_with_vertices(2);
            let f = other.insert_edge(ws[0], ws[1], 0).unwrap();

            assert!(!graph.contains_vertex(ws[0]));
            assert!(!graph.contains_edge(f));
            assert_eq!(graph.vertex_data(ws[0]), Err(GraphError::InvalidVertex(ws[0])));
            assert_eq!(graph.edge_data(f), Err(GraphError::InvalidEdge(f)));
            assert_eq!(graph.out_degree(ws[1]), Err(GraphError::InvalidVertex(ws[1])));
            assert_eq!(graph.get_edge(vs[0], ws[1]), Err(GraphError::InvalidVertex(ws[1])));
            assert_eq!(graph.opposite(vs[0], f), Err(GraphError::InvalidEdge(f)));
            assert!(graph.outgoing_edges(ws[0]).is_err());

            // failed mutations leave the graph untouched
            assert_eq!(
                graph.insert_edge(vs[0], ws[1], 0),
                Err(GraphError::InvalidVertex(ws[1]))
            );
            assert_eq!(graph.remove_vertex(ws[0]), Err(GraphError::InvalidVertex(ws[0])));
            assert_eq!(graph.remove_edge(f), Err(GraphError::InvalidEdge(f)));
            assert_eq!(graph.number_of_vertices(), 2);
            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(other.number_of_edges(), 1);
        }

        #[test]
        fn origin_is_validated_first() {
            let (mut graph, _) = graph_with_vertices(2);
            let (_, ws) = graph_with_vertices(2);

            assert_eq!(graph.get_edge(ws[0], ws[1]), Err(GraphError::InvalidVertex(ws[0])));
            assert_eq!(graph.has_edge(ws[1], ws[0]), Err(GraphError::InvalidVertex(ws[1])));
            assert_eq!(
                graph.insert_edge(ws[0], ws[1], 0),
                Err(GraphError::InvalidVertex(ws[0]))
            );
        }

        #[test]
        fn vertex_bitset_covers_all_slots() {
            let (mut graph, vs) = graph_with_vertices(5);
            graph.remove_vertex(vs[4]).unwrap();

            let mut bits = graph.vertex_bitset_unset();
            assert_eq!(graph.vertex_bound(), 5);
            assert!((0..graph.vertex_bound()).all(|i| !bits.get_bit(i)));

            for v in graph.vertices() {
                assert!(!bits.set_bit(v.index()));
            }
            assert!(bits.get_bit(vs[3].index()));
            assert!(!bits.get_bit(vs[4].index()));
        }

        #[test]
        fn stale_handles_are_rejected() {
            let (mut graph, vs) = graph_with_vertices(2);
            let e = graph.insert_edge(vs[0], vs[1], 0).unwrap();

            graph.remove_vertex(vs[1]).unwrap();
            let w = graph.insert_vertex(2);
            assert_eq!(w.index(), vs[1].index());

            assert_eq!(graph.vertex_data(vs[1]), Err(GraphError::InvalidVertex(vs[1])));
            assert_eq!(graph.end_vertices(e), Err(GraphError::InvalidEdge(e)));
            assert_eq!(graph.in_degree(w).unwrap(), 0);
            assert_eq!(*graph.vertex_data(w).unwrap(), 2);
        }
    };
    ($graph:ident<$directed:literal>: Graph) => {
        /// Applies random edits to the graph and a naive model side by side
        #[test]
        fn random_edits_match_model() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for _ in 0..10 {
                let mut graph = TestGraph::new($directed);
                let mut vertices: Vec<(Vertex, u32)> = Vec::new();
                let mut edges: Vec<(Edge, Vertex, Vertex, u32)> = Vec::new();

                for step in 0..300u32 {
                    match rng.random_range(0..10) {
                        0..3 => {
                            vertices.push((graph.insert_vertex(step), step));
                        }
                        3..7 if !vertices.is_empty() => {
                            let (u, _) = vertices[rng.random_range(0..vertices.len())];
                            let (v, _) = vertices[rng.random_range(0..vertices.len())];

                            let exists = edges.iter().any(|&(_, a, b, _)| {
                                (a, b) == (u, v) || (!$directed && (a, b) == (v, u))
                            });

                            match graph.insert_edge(u, v, step) {
                                Ok(e) => {
                                    assert!(!exists);
                                    edges.push((e, u, v, step));
                                }
                                Err(err) => {
                                    assert!(exists);
                                    assert_eq!(
                                        err,
                                        GraphError::EdgeExists { origin: u, destination: v }
                                    );
                                }
                            }
                        }
                        7 if !vertices.is_empty() => {
                            let (v, x) = vertices.remove(rng.random_range(0..vertices.len()));
                            assert_eq!(graph.remove_vertex(v).unwrap(), x);
                            edges.retain(|&(_, a, b, _)| a != v && b != v);
                        }
                        8..10 if !edges.is_empty() => {
                            let (e, _, _, x) = edges.remove(rng.random_range(0..edges.len()));
                            assert_eq!(graph.remove_edge(e).unwrap(), x);
                        }
                        _ => {}
                    }

                    assert_eq!(graph.number_of_vertices() as usize, vertices.len());
                    assert_eq!(graph.number_of_edges() as usize, edges.len());
                    assert_eq!(
                        graph.vertices().collect_vec(),
                        vertices.iter().map(|&(v, _)| v).collect_vec()
                    );
                    assert_eq!(
                        graph.edges().collect_vec(),
                        edges.iter().map(|&(e, ..)| e).collect_vec()
                    );
                }

                for &(u, _) in &vertices {
                    let outgoing = edges
                        .iter()
                        .filter(|&&(_, a, b, _)| a == u || (!$directed && b == u))
                        .map(|&(e, ..)| e)
                        .sorted()
                        .collect_vec();
                    let incoming = edges
                        .iter()
                        .filter(|&&(_, a, b, _)| b == u || (!$directed && a == u))
                        .map(|&(e, ..)| e)
                        .sorted()
                        .collect_vec();

                    assert_eq!(graph.out_degree(u).unwrap() as usize, outgoing.len());
                    assert_eq!(graph.in_degree(u).unwrap() as usize, incoming.len());
                    assert_eq!(graph.outgoing_edges(u).unwrap().sorted().collect_vec(), outgoing);
                    assert_eq!(graph.incoming_edges(u).unwrap().sorted().collect_vec(), incoming);

                    for &(v, _) in &vertices {
                        let expected = edges
                            .iter()
                            .find(|&&(_, a, b, _)| {
                                (a, b) == (u, v) || (!$directed && (a, b) == (v, u))
                            })
                            .map(|&(e, ..)| e);
                        assert_eq!(graph.get_edge(u, v).unwrap(), expected);
                    }
                }

                for &(e, a, b, x) in &edges {
                    assert_eq!(graph.end_vertices(e).unwrap(), (a, b));
                    assert_eq!(*graph.edge_data(e).unwrap(), x);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Runs a generic test function once per representation
#[cfg(test)]
macro_rules! for_each_representation {
    ($test:ident::<$v:ty, $e:ty>) => {
        $test::<crate::repr::EdgeListGraph<$v, $e>>();
        $test::<crate::repr::AdjacencyMatrixGraph<$v, $e>>();
        $test::<crate::repr::AdjacencyMapGraph<$v, $e>>();
    };
}

#[cfg(test)]
pub(crate) use for_each_representation;

#[cfg(test)]
pub(crate) use fixtures::*;

/// Shared inputs of the algorithm tests
#[cfg(test)]
mod fixtures {
    use rand::Rng;

    use crate::prelude::*;

    /// Road segment with a length, used as weighted edge payload
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) struct Highway {
        pub name: String,
        pub length: u32,
    }

    impl Highway {
        pub fn new(name: impl Into<String>, length: u32) -> Self {
            Self {
                name: name.into(),
                length,
            }
        }
    }

    impl Weighted for Highway {
        type Weight = u32;

        fn weight(&self) -> u32 {
            self.length
        }
    }

    /// Complete graph on `A..=E` with weights `AB=5, AC=10, AD=15, AE=20, BC=25, ..., DE=50`.
    /// Its minimum spanning tree is the star around `A`.
    pub(crate) fn complete_five<G>() -> (G, Vec<Vertex>)
    where
        G: Graph<VertexData = &'static str, EdgeData = Highway>,
    {
        let mut graph = G::new_undirected();
        let names = ["A", "B", "C", "D", "E"];
        let vs = graph.insert_vertices(names);

        let mut length = 5;
        for i in 0..vs.len() {
            for j in i + 1..vs.len() {
                let name = format!("{}{}", names[i], names[j]);
                graph
                    .insert_edge(vs[i], vs[j], Highway::new(name, length))
                    .unwrap();
                length += 5;
            }
        }

        (graph, vs)
    }

    /// Directed path `A -> B -> C` with unit weights
    pub(crate) fn directed_path<G>() -> (G, Vec<Vertex>)
    where
        G: Graph<VertexData = &'static str, EdgeData = Highway>,
    {
        let mut graph = G::new_directed();
        let vs = graph.insert_vertices(["A", "B", "C"]);
        graph.insert_edge(vs[0], vs[1], Highway::new("AB", 1)).unwrap();
        graph.insert_edge(vs[1], vs[2], Highway::new("BC", 1)).unwrap();

        (graph, vs)
    }

    /// Graph on `n` vertices with up to `m` random edges of weight `1..100`.
    /// Self-loops and repeated pairs are skipped.
    pub(crate) fn random_weighted_graph<G, R>(
        rng: &mut R,
        n: u32,
        m: u32,
        directed: bool,
    ) -> (G, Vec<Vertex>)
    where
        G: Graph<VertexData = u32, EdgeData = u32>,
        R: Rng,
    {
        let mut graph = G::new(directed);
        let vs = graph.insert_vertices(0..n);

        for _ in 0..m {
            let u = vs[rng.random_range(0..n) as usize];
            let v = vs[rng.random_range(0..n) as usize];
            if u != v {
                graph.insert_edge(u, v, rng.random_range(1..100)).ok();
            }
        }

        (graph, vs)
    }
}
