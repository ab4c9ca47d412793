/*!
Minimum spanning trees of graphs with [`Weighted`] edge payloads.

Two classical algorithms are provided:
- [`MinimumSpanningTree::kruskal`] sorts all edges through a [`HeapPriorityQueue`] and joins
  components with an [`UpTreeDisjointSetForest`],
- [`MinimumSpanningTree::prim_jarnik`] grows trees from a start vertex, keeping the cheapest
  known connection of every vertex in a [`HeapAdaptablePriorityQueue`].

Both treat edges as undirected and are meant for undirected graphs. On disconnected graphs they
return a minimum spanning forest, ie. fewer than `n - 1` edges. Among edges of equal weight the
choice depends on queue order, so different algorithms (or representations) may return different
trees of the same total weight.
*/

use num::Zero;

use super::*;

/// Spanning tree algorithms, available on every graph whose edges are [`Weighted`]
pub trait MinimumSpanningTree: Incidence + Sized {
    /// Computes a minimum spanning tree (forest) with Kruskal's algorithm.
    ///
    /// # Example
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut graph = AdjacencyMatrixGraph::new_undirected();
    /// let [a, b, c] = ['a', 'b', 'c'].map(|x| graph.insert_vertex(x));
    /// let ab = graph.insert_edge(a, b, 1u32).unwrap();
    /// let bc = graph.insert_edge(b, c, 2).unwrap();
    /// graph.insert_edge(a, c, 3).unwrap();
    ///
    /// let mut tree = graph.kruskal().unwrap();
    /// tree.sort();
    /// assert_eq!(tree, vec![ab, bc]);
    /// ```
    fn kruskal(&self) -> Result<Vec<Edge>>
    where
        Self::EdgeData: Weighted,
    {
        let n = self.number_of_vertices() as usize;

        let mut components = UpTreeDisjointSetForest::with_capacity(n);
        for v in self.vertices() {
            components.make_set(v);
        }

        let mut queue = HeapPriorityQueue::with_capacity(self.number_of_edges() as usize);
        for e in self.edges() {
            queue.insert(self.edge_data(e)?.weight(), e);
        }

        let mut tree = Vec::with_capacity(n.saturating_sub(1));
        while tree.len() + 1 < n {
            let Some(entry) = queue.delete_min() else {
                break;
            };
            let (weight, e) = entry.into_parts();
            let (u, v) = self.end_vertices(e)?;

            let ru = components.find(&u).ok_or(GraphError::InvalidVertex(u))?;
            let rv = components.find(&v).ok_or(GraphError::InvalidVertex(v))?;
            if ru != rv {
                tracing::trace!(%e, ?weight, "kruskal joins two components");
                components.union(ru, rv)?;
                tree.push(e);
            }
        }

        tracing::debug!(
            vertices = n,
            edges = tree.len(),
            components = components.number_of_sets(),
            "kruskal finished"
        );
        Ok(tree)
    }

    /// Computes a minimum spanning tree (forest) with the Prim-Jarnik algorithm,
    /// starting at the first vertex of the graph
    fn prim_jarnik(&self) -> Result<Vec<Edge>>
    where
        Self::EdgeData: Weighted,
    {
        match self.vertices().next() {
            Some(start) => self.prim_jarnik_from(start),
            None => Ok(Vec::new()),
        }
    }

    /// Computes a minimum spanning tree (forest) with the Prim-Jarnik algorithm.
    ///
    /// The tree containing `start` is completed first. Vertices in other components are then
    /// picked up in queue order, each starting a tree of its own.
    fn prim_jarnik_from(&self, start: Vertex) -> Result<Vec<Edge>>
    where
        Self::EdgeData: Weighted,
    {
        if !self.contains_vertex(start) {
            return Err(GraphError::InvalidVertex(start));
        }

        let n = self.number_of_vertices() as usize;

        let mut queue = HeapAdaptablePriorityQueue::with_capacity(n);
        let mut locators: FxHashMap<Vertex, EntryLocator> = FxHashMap::from_capacity(n);
        for v in self.vertices() {
            let key = if v == start {
                Tentative::Known(<WeightOf<Self> as Zero>::zero())
            } else {
                Tentative::Unknown
            };
            locators.insert(v, queue.insert(key, v));
        }

        let mut connecting: FxHashMap<Vertex, Edge> = FxHashMap::default();
        let mut known = self.vertex_bitset_unset();
        let mut tree = Vec::with_capacity(n.saturating_sub(1));

        while let Some(entry) = queue.delete_min() {
            let (_, u) = entry.into_parts();
            known.set_bit(u.index());
            if let Some(&e) = connecting.get(&u) {
                tree.push(e);
            }

            for e in self.outgoing_edges(u)? {
                let v = self.opposite(u, e)?;
                if known.get_bit(v.index()) {
                    continue;
                }

                let locator = *locators.get(&v).ok_or(GraphError::InvalidVertex(v))?;
                let weight = self.edge_data(e)?.weight();
                if Tentative::Known(weight) < *queue.key(locator)? {
                    tracing::trace!(%v, %e, ?weight, "prim-jarnik found cheaper connection");
                    queue.replace_key(locator, Tentative::Known(weight))?;
                    connecting.insert(v, e);
                }
            }
        }

        tracing::debug!(%start, vertices = n, edges = tree.len(), "prim-jarnik finished");
        Ok(tree)
    }
}

impl<G: Incidence> MinimumSpanningTree for G {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use num::ToPrimitive;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn total_weight<G>(graph: &G, tree: &[Edge]) -> u64
    where
        G: Incidence,
        G::EdgeData: Weighted,
    {
        tree.iter()
            .map(|&e| graph.edge_data(e).unwrap().weight().to_u64().unwrap())
            .sum()
    }

    /// Number of connected components, ignoring edge directions
    fn components<G: Incidence>(graph: &G) -> usize {
        let mut forest = UpTreeDisjointSetForest::new();
        for v in graph.vertices() {
            forest.make_set(v);
        }
        for e in graph.edges() {
            let (u, v) = graph.end_vertices(e).unwrap();
            let ru = forest.find(&u).unwrap();
            let rv = forest.find(&v).unwrap();
            forest.union(ru, rv).unwrap();
        }
        forest.number_of_sets()
    }

    /// Checks that `tree` is an acyclic edge set spanning every component of `graph`
    fn assert_spanning_forest<G: Incidence>(graph: &G, tree: &[Edge]) {
        assert!(tree.iter().all_unique());

        let mut forest = UpTreeDisjointSetForest::new();
        for v in graph.vertices() {
            forest.make_set(v);
        }
        for &e in tree {
            assert!(graph.contains_edge(e));
            let (u, v) = graph.end_vertices(e).unwrap();
            let ru = forest.find(&u).unwrap();
            let rv = forest.find(&v).unwrap();
            assert_ne!(ru, rv, "tree contains a cycle");
            forest.union(ru, rv).unwrap();
        }

        assert_eq!(forest.number_of_sets(), components(graph));
        assert_eq!(
            tree.len(),
            graph.number_of_vertices() as usize - components(graph)
        );
    }

    fn complete_five_star<G>()
    where
        G: Graph<VertexData = &'static str, EdgeData = Highway>,
    {
        let (graph, vs) = complete_five::<G>();
        let star = vs[1..]
            .iter()
            .map(|&v| graph.get_edge(vs[0], v).unwrap().unwrap())
            .sorted()
            .collect_vec();

        for tree in [
            graph.kruskal().unwrap(),
            graph.prim_jarnik().unwrap(),
            graph.prim_jarnik_from(vs[3]).unwrap(),
        ] {
            assert_eq!(tree.len(), 4);
            assert_eq!(total_weight(&graph, &tree), 50);
            assert_eq!(tree.into_iter().sorted().collect_vec(), star);
        }
    }

    fn kruskal_matches_prim<G>()
    where
        G: Graph<VertexData = u32, EdgeData = u32>,
    {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1, 2, 10, 30] {
            for m in [0, n, 3 * n, n * n] {
                for _ in 0..5 {
                    let (graph, _) = random_weighted_graph::<G, _>(rng, n, m, false);

                    let kruskal = graph.kruskal().unwrap();
                    let prim = graph.prim_jarnik().unwrap();
                    assert_spanning_forest(&graph, &kruskal);
                    assert_spanning_forest(&graph, &prim);
                    assert_eq!(total_weight(&graph, &kruskal), total_weight(&graph, &prim));
                }
            }
        }
    }

    fn degenerate_inputs<G>()
    where
        G: Graph<VertexData = u32, EdgeData = u32>,
    {
        let mut graph = G::new_undirected();
        assert_eq!(graph.kruskal().unwrap(), vec![]);
        assert_eq!(graph.prim_jarnik().unwrap(), vec![]);

        let vs = graph.insert_vertices(0..3);
        let e = graph.insert_edge(vs[0], vs[1], 4).unwrap();
        assert_eq!(graph.kruskal().unwrap(), vec![e]);
        assert_eq!(graph.prim_jarnik_from(vs[2]).unwrap(), vec![e]);

        let mut other = G::new_undirected();
        let w = other.insert_vertex(0);
        assert_eq!(
            graph.prim_jarnik_from(w).unwrap_err(),
            GraphError::InvalidVertex(w)
        );
    }

    fn maximum_weights<G>()
    where
        G: Graph<VertexData = u32, EdgeData = u8>,
    {
        let mut graph = G::new_undirected();
        let vs = graph.insert_vertices(0..2);
        let e = graph.insert_edge(vs[0], vs[1], 255).unwrap();
        assert_eq!(graph.kruskal().unwrap(), vec![e]);
        assert_eq!(graph.prim_jarnik().unwrap(), vec![e]);

        // every tree edge ties with the key of a vertex that was not reached yet
        let vs = [vs[0], vs[1], graph.insert_vertex(2), graph.insert_vertex(3)];
        graph.insert_edge(vs[1], vs[2], 255).unwrap();
        graph.insert_edge(vs[2], vs[3], 255).unwrap();
        graph.insert_edge(vs[3], vs[0], 7).unwrap();

        for tree in [
            graph.kruskal().unwrap(),
            graph.prim_jarnik().unwrap(),
            graph.prim_jarnik_from(vs[2]).unwrap(),
        ] {
            assert_spanning_forest(&graph, &tree);
            assert_eq!(tree.len(), 3);
            assert_eq!(total_weight(&graph, &tree), 7 + 255 + 255);
        }
    }

    #[test]
    fn complete_graph_on_five_vertices() {
        for_each_representation!(complete_five_star::<&'static str, Highway>);
    }

    #[test]
    fn random_graphs() {
        for_each_representation!(kruskal_matches_prim::<u32, u32>);
    }

    #[test]
    fn empty_and_disconnected() {
        for_each_representation!(degenerate_inputs::<u32, u32>);
    }

    #[test]
    fn weights_at_type_maximum() {
        for_each_representation!(maximum_weights::<u32, u8>);
    }
}
