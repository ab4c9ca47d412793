/*!
Single-source shortest paths on graphs with non-negative [`Weighted`] edge payloads.

[`ShortestPath::dijkstra`] computes the cost of a cheapest path from a source to every reachable
vertex. The paths themselves can be recovered afterwards with
[`ShortestPath::shortest_path_tree`], which picks one predecessor edge per reached vertex.

Path costs are summed with checked arithmetic: a path whose cost would exceed the maximum of
the weight type is treated as if it did not exist. A cost equal to the maximum is fine.

Zero-weight edges are allowed. Among several cheapest predecessors of a vertex, the tree picks
one that is already connected to the source, so zero-weight cycles cannot close a loop in it.
*/

use num::{CheckedAdd, Zero};

use super::*;

/// Result of [`ShortestPath::dijkstra`]
#[derive(Clone, Debug)]
pub struct ShortestPaths<W> {
    source: Vertex,
    costs: FxHashMap<Vertex, W>,
    order: Vec<Vertex>,
}

impl<W: Copy> ShortestPaths<W> {
    /// Returns the vertex all paths start at
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Returns the cost of a cheapest path from the source to `v`, or `None` if `v` is
    /// not reachable
    pub fn cost(&self, v: Vertex) -> Option<W> {
        self.costs.get(&v).copied()
    }

    /// Returns *true* if there is a path from the source to `v`
    pub fn is_reachable(&self, v: Vertex) -> bool {
        self.costs.contains_key(&v)
    }

    /// Returns the costs of all reachable vertices
    pub fn costs(&self) -> &FxHashMap<Vertex, W> {
        &self.costs
    }

    /// Returns all reachable vertices in the order their costs became final.
    /// Costs along this order never decrease.
    pub fn finalization_order(&self) -> &[Vertex] {
        &self.order
    }

    /// Returns the number of reachable vertices, including the source
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always *false*, as the source is reachable from itself
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Shortest path algorithms, available on every graph whose edges are [`Weighted`]
pub trait ShortestPath: Incidence + Sized {
    /// Computes the costs of cheapest paths from `source` with Dijkstra's algorithm.
    ///
    /// # Example
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut graph = AdjacencyMapGraph::new_directed();
    /// let [a, b, c] = ['a', 'b', 'c'].map(|x| graph.insert_vertex(x));
    /// graph.insert_edge(a, b, 1u32).unwrap();
    /// graph.insert_edge(b, c, 1).unwrap();
    /// graph.insert_edge(a, c, 5).unwrap();
    ///
    /// let paths = graph.dijkstra(a).unwrap();
    /// assert_eq!(paths.cost(c), Some(2));
    ///
    /// let paths = graph.dijkstra(c).unwrap();
    /// assert!(!paths.is_reachable(a));
    /// ```
    fn dijkstra(&self, source: Vertex) -> Result<ShortestPaths<WeightOf<Self>>>
    where
        Self::EdgeData: Weighted,
    {
        if !self.contains_vertex(source) {
            return Err(GraphError::InvalidVertex(source));
        }

        let n = self.number_of_vertices() as usize;

        let mut queue = HeapAdaptablePriorityQueue::with_capacity(n);
        let mut locators: FxHashMap<Vertex, EntryLocator> = FxHashMap::from_capacity(n);
        for v in self.vertices() {
            let key = if v == source {
                Tentative::Known(<WeightOf<Self> as Zero>::zero())
            } else {
                Tentative::Unknown
            };
            locators.insert(v, queue.insert(key, v));
        }

        let mut paths = ShortestPaths {
            source,
            costs: FxHashMap::from_capacity(n),
            order: Vec::with_capacity(n),
        };

        while let Some(entry) = queue.delete_min() {
            let (Tentative::Known(cost), u) = entry.into_parts() else {
                break;
            };

            paths.costs.insert(u, cost);
            paths.order.push(u);

            for e in self.outgoing_edges(u)? {
                let v = self.opposite(u, e)?;
                if paths.costs.contains_key(&v) {
                    continue;
                }

                let weight = self.edge_data(e)?.weight();
                let Some(candidate) = CheckedAdd::checked_add(&cost, &weight) else {
                    continue;
                };

                let locator = *locators.get(&v).ok_or(GraphError::InvalidVertex(v))?;
                if Tentative::Known(candidate) < *queue.key(locator)? {
                    tracing::trace!(%v, ?candidate, "dijkstra relaxes");
                    queue.replace_key(locator, Tentative::Known(candidate))?;
                }
            }
        }

        tracing::debug!(
            %source,
            vertices = n,
            reachable = paths.len(),
            "dijkstra finished"
        );
        Ok(paths)
    }

    /// Picks, for every vertex in `costs` other than `source`, one incoming edge `(u, v)`
    /// with `costs[v] == costs[u] + weight(u, v)`. Following these edges backwards from any
    /// vertex leads to `source` along a cheapest path, provided `costs` were computed by
    /// [`ShortestPath::dijkstra`].
    ///
    /// Vertices are attached in order of increasing cost, and a predecessor is only accepted
    /// once it is attached itself, so zero-weight cycles do not become cycles of the tree.
    /// Vertices without any consistent predecessor are left out.
    fn shortest_path_tree(
        &self,
        source: Vertex,
        costs: &FxHashMap<Vertex, WeightOf<Self>>,
    ) -> Result<FxHashMap<Vertex, Edge>>
    where
        Self::EdgeData: Weighted,
    {
        if !self.contains_vertex(source) {
            return Err(GraphError::InvalidVertex(source));
        }

        let mut pending = costs
            .iter()
            .filter(|&(&v, _)| v != source)
            .map(|(&v, &cost)| (cost, v))
            .sorted()
            .collect_vec();

        let mut tree: FxHashMap<Vertex, Edge> = FxHashMap::from_capacity(pending.len());
        while !pending.is_empty() {
            let mut deferred = Vec::new();

            for (cost_v, v) in pending.iter().copied() {
                let mut predecessor = None;
                for e in self.incoming_edges(v)? {
                    let u = self.opposite(v, e)?;
                    if u != source && !tree.contains_key(&u) {
                        continue;
                    }
                    let Some(cost_u) = costs.get(&u) else {
                        continue;
                    };

                    let weight = self.edge_data(e)?.weight();
                    if CheckedAdd::checked_add(cost_u, &weight) == Some(cost_v) {
                        predecessor = Some(e);
                        break;
                    }
                }

                match predecessor {
                    Some(e) => {
                        tree.insert(v, e);
                    }
                    None => deferred.push((cost_v, v)),
                }
            }

            // zero-weight chains may need further rounds; stop once nothing attaches
            if deferred.len() == pending.len() {
                break;
            }
            pending = deferred;
        }

        tracing::debug!(%source, edges = tree.len(), "shortest path tree finished");
        Ok(tree)
    }
}

impl<G: Incidence> ShortestPath for G {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn complete_five_costs<G>()
    where
        G: Graph<VertexData = &'static str, EdgeData = Highway>,
    {
        let (graph, vs) = complete_five::<G>();
        let paths = graph.dijkstra(vs[0]).unwrap();

        assert_eq!(paths.source(), vs[0]);
        assert_eq!(paths.len(), 5);
        for (&v, cost) in vs.iter().zip([0, 5, 10, 15, 20]) {
            assert_eq!(paths.cost(v), Some(cost));
        }
        assert_eq!(paths.finalization_order(), vs.as_slice());

        let tree = graph.shortest_path_tree(vs[0], paths.costs()).unwrap();
        assert_eq!(tree.len(), 4);
        for &v in &vs[1..] {
            assert_eq!(graph.end_vertices(tree[&v]).unwrap(), (vs[0], v));
        }
    }

    fn directed_path_costs<G>()
    where
        G: Graph<VertexData = &'static str, EdgeData = Highway>,
    {
        let (graph, vs) = directed_path::<G>();

        let paths = graph.dijkstra(vs[0]).unwrap();
        assert_eq!(
            vs.iter().map(|&v| paths.cost(v)).collect_vec(),
            vec![Some(0), Some(1), Some(2)]
        );

        let paths = graph.dijkstra(vs[2]).unwrap();
        assert_eq!(paths.costs().len(), 1);
        assert_eq!(paths.cost(vs[2]), Some(0));
        assert!(!paths.is_reachable(vs[0]));
        assert!(!paths.is_reachable(vs[1]));

        let tree = graph.shortest_path_tree(vs[2], paths.costs()).unwrap();
        assert!(tree.is_empty());
    }

    /// Bellman-Ford style fixpoint iteration as reference
    fn reference_costs<G>(graph: &G, source: Vertex) -> FxHashMap<Vertex, u32>
    where
        G: Incidence<EdgeData = u32>,
    {
        let mut costs = FxHashMap::default();
        costs.insert(source, 0);

        let mut changed = true;
        while changed {
            changed = false;
            for e in graph.edges() {
                let (u, v) = graph.end_vertices(e).unwrap();
                let w = *graph.edge_data(e).unwrap();

                let mut relax = |from: Vertex, to: Vertex| {
                    if let Some(&c) = costs.get(&from) {
                        if costs.get(&to).is_none_or(|&d| c + w < d) {
                            costs.insert(to, c + w);
                            changed = true;
                        }
                    }
                };

                relax(u, v);
                if graph.is_undirected() {
                    relax(v, u);
                }
            }
        }

        costs
    }

    fn random_graphs_match_reference<G>()
    where
        G: Graph<VertexData = u32, EdgeData = u32>,
    {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for n in [1, 5, 20, 40] {
                for m in [n, 3 * n, n * n / 2] {
                    let (graph, vs) = random_weighted_graph::<G, _>(rng, n, m, directed);
                    let source = vs[0];

                    let paths = graph.dijkstra(source).unwrap();
                    assert_eq!(*paths.costs(), reference_costs(&graph, source));

                    // costs are finalized in non-decreasing order
                    let finalized = paths
                        .finalization_order()
                        .iter()
                        .map(|&v| paths.cost(v).unwrap())
                        .collect_vec();
                    assert!(finalized.is_sorted());
                    assert_eq!(finalized.len(), paths.costs().len());

                    let tree = graph.shortest_path_tree(source, paths.costs()).unwrap();
                    assert_eq!(tree.len() + 1, paths.len());
                    assert_tree_reaches_source(&graph, source, &tree);
                    for (&v, &e) in &tree {
                        let u = graph.opposite(v, e).unwrap();
                        assert_eq!(
                            paths.cost(u).unwrap() + graph.edge_data(e).unwrap(),
                            paths.cost(v).unwrap()
                        );
                    }
                }
            }
        }
    }

    fn invalid_source<G>()
    where
        G: Graph<VertexData = u32, EdgeData = u32>,
    {
        let mut graph = G::new_directed();
        let v = graph.insert_vertex(0);
        graph.remove_vertex(v).unwrap();

        assert_eq!(graph.dijkstra(v).unwrap_err(), GraphError::InvalidVertex(v));
        assert_eq!(
            graph
                .shortest_path_tree(v, &FxHashMap::default())
                .unwrap_err(),
            GraphError::InvalidVertex(v)
        );
    }

    fn saturating_weights<G>()
    where
        G: Graph<VertexData = u32, EdgeData = u8>,
    {
        let mut graph = G::new_directed();
        let vs = graph.insert_vertices(0..4);
        graph.insert_edge(vs[0], vs[1], 200).unwrap();
        graph.insert_edge(vs[1], vs[2], 100).unwrap();
        graph.insert_edge(vs[0], vs[3], 254).unwrap();

        let paths = graph.dijkstra(vs[0]).unwrap();
        assert_eq!(paths.cost(vs[1]), Some(200));
        assert_eq!(paths.cost(vs[2]), None);
        assert_eq!(paths.cost(vs[3]), Some(254));
    }

    /// Follows tree edges from every vertex and checks that each walk ends at the source
    fn assert_tree_reaches_source<G: Incidence>(
        graph: &G,
        source: Vertex,
        tree: &FxHashMap<Vertex, Edge>,
    ) {
        for &v in tree.keys() {
            let mut current = v;
            for _ in 0..tree.len() {
                if current == source {
                    break;
                }
                current = graph.opposite(current, tree[&current]).unwrap();
            }
            assert_eq!(current, source, "tree walk from {v} does not reach the source");
        }
    }

    fn maximum_cost<G>()
    where
        G: Graph<VertexData = u32, EdgeData = u8>,
    {
        let mut graph = G::new_directed();
        let vs = graph.insert_vertices(0..4);
        graph.insert_edge(vs[0], vs[1], 200).unwrap();
        graph.insert_edge(vs[1], vs[2], 55).unwrap();
        graph.insert_edge(vs[0], vs[3], 255).unwrap();

        let paths = graph.dijkstra(vs[0]).unwrap();
        assert_eq!(paths.cost(vs[2]), Some(255));
        assert_eq!(paths.cost(vs[3]), Some(255));
        assert_eq!(paths.len(), 4);

        let tree = graph.shortest_path_tree(vs[0], paths.costs()).unwrap();
        assert_eq!(tree.len(), 3);
        assert_tree_reaches_source(&graph, vs[0], &tree);
    }

    fn zero_weight_cycle<G>()
    where
        G: Graph<VertexData = u32, EdgeData = u32>,
    {
        // s -2- a
        //      / \
        //     0   0
        //    /     \
        //   c --0-- b
        //   |
        //   3
        //   |
        //   d
        let mut graph = G::new_undirected();
        let [s, a, b, c, d] = [0, 1, 2, 3, 4].map(|x| graph.insert_vertex(x));
        graph.insert_edge(s, a, 2).unwrap();
        graph.insert_edge(b, a, 0).unwrap();
        graph.insert_edge(c, b, 0).unwrap();
        graph.insert_edge(a, c, 0).unwrap();
        graph.insert_edge(c, d, 3).unwrap();

        let paths = graph.dijkstra(s).unwrap();
        assert_eq!(
            [s, a, b, c, d].map(|v| paths.cost(v)),
            [Some(0), Some(2), Some(2), Some(2), Some(5)]
        );

        let tree = graph.shortest_path_tree(s, paths.costs()).unwrap();
        assert_eq!(tree.len(), 4);
        assert_tree_reaches_source(&graph, s, &tree);
    }

    #[test]
    fn complete_graph_on_five_vertices() {
        for_each_representation!(complete_five_costs::<&'static str, Highway>);
    }

    #[test]
    fn reachability_along_directed_path() {
        for_each_representation!(directed_path_costs::<&'static str, Highway>);
    }

    #[test]
    fn random_graphs() {
        for_each_representation!(random_graphs_match_reference::<u32, u32>);
    }

    #[test]
    fn unknown_source() {
        for_each_representation!(invalid_source::<u32, u32>);
    }

    #[test]
    fn overflowing_paths_are_dropped() {
        for_each_representation!(saturating_weights::<u32, u8>);
    }

    #[test]
    fn cost_equal_to_weight_maximum() {
        for_each_representation!(maximum_cost::<u32, u8>);
    }

    #[test]
    fn zero_weight_cycles_stay_out_of_the_tree() {
        for_each_representation!(zero_weight_cycle::<u32, u32>);
    }
}
