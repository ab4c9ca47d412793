/*!
Breadth-first and depth-first search.

Both searches follow outgoing edges (for undirected graphs: all incident edges) and record, for
every vertex they reach, the edge over which it was discovered. The result is a
[`DiscoveryForest`] rooted at the start vertex; vertices not reachable from the start are
absent from it.

Visited vertices are tracked in a bitset indexed by [`Vertex::index`], so a search allocates
`O(vertex_bound)` bits plus the discovery map.
*/

use std::collections::VecDeque;

use super::*;

/// Discovery edges of a graph search started at [`DiscoveryForest::start`]
#[derive(Clone, Debug)]
pub struct DiscoveryForest {
    start: Vertex,
    edges: FxHashMap<Vertex, Edge>,
    order: Vec<Vertex>,
}

impl DiscoveryForest {
    fn new(start: Vertex) -> Self {
        Self {
            start,
            edges: FxHashMap::default(),
            order: vec![start],
        }
    }

    fn discover(&mut self, v: Vertex, via: Edge) {
        self.edges.insert(v, via);
        self.order.push(v);
    }

    /// Returns the vertex the search started at
    pub fn start(&self) -> Vertex {
        self.start
    }

    /// Returns the edge over which `v` was discovered.
    /// Returns `None` for the start vertex and for vertices that were not reached.
    pub fn discovery_edge(&self, v: Vertex) -> Option<Edge> {
        self.edges.get(&v).copied()
    }

    /// Returns *true* if the search reached `v`
    pub fn contains(&self, v: Vertex) -> bool {
        v == self.start || self.edges.contains_key(&v)
    }

    /// Returns the number of reached vertices, including the start vertex
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always *false*, as the start vertex is part of every forest
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns all reached vertices in the order in which they were discovered
    pub fn discovery_order(&self) -> &[Vertex] {
        &self.order
    }

    /// Returns all pairs of reached vertices and their discovery edges
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Edge)> + '_ {
        self.edges.iter().map(|(&v, &e)| (v, e))
    }

    /// Returns the discovery edges leading from the start vertex to `v`.
    /// The path to the start vertex itself is empty; `None` if `v` was not reached.
    pub fn path_to<G: Incidence>(&self, graph: &G, v: Vertex) -> Result<Option<Vec<Edge>>> {
        if !self.contains(v) {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = v;
        while let Some(e) = self.discovery_edge(current) {
            path.push(e);
            current = graph.opposite(current, e)?;
        }

        debug_assert_eq!(current, self.start);
        path.reverse();
        Ok(Some(path))
    }
}

/// Graph searches, available on every graph
pub trait Traversal: Incidence + Sized {
    /// Searches the graph in breadth-first order starting at `start`.
    ///
    /// # Example
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut graph = EdgeListGraph::new_directed();
    /// let [a, b, c] = ['a', 'b', 'c'].map(|x| graph.insert_vertex(x));
    /// let ab = graph.insert_edge(a, b, ()).unwrap();
    /// let bc = graph.insert_edge(b, c, ()).unwrap();
    ///
    /// let forest = graph.breadth_first_search(a).unwrap();
    /// assert_eq!(forest.discovery_order(), &[a, b, c]);
    /// assert_eq!(forest.path_to(&graph, c).unwrap(), Some(vec![ab, bc]));
    ///
    /// let forest = graph.breadth_first_search(c).unwrap();
    /// assert!(!forest.contains(a));
    /// ```
    fn breadth_first_search(&self, start: Vertex) -> Result<DiscoveryForest> {
        if !self.contains_vertex(start) {
            return Err(GraphError::InvalidVertex(start));
        }

        let mut visited = self.vertex_bitset_unset();
        visited.set_bit(start.index());

        let mut forest = DiscoveryForest::new(start);
        let mut queue = VecDeque::from([start]);

        while let Some(u) = queue.pop_front() {
            for e in self.outgoing_edges(u)? {
                let v = self.opposite(u, e)?;
                if !visited.set_bit(v.index()) {
                    forest.discover(v, e);
                    queue.push_back(v);
                }
            }
        }

        tracing::debug!(%start, reached = forest.len(), "breadth-first search finished");
        Ok(forest)
    }

    /// Searches the graph in depth-first order starting at `start`.
    ///
    /// Vertices are marked as visited before their outgoing edges are explored, and each
    /// outgoing edge is followed as soon as it leads to an unvisited vertex, which yields the
    /// same forest as the recursive formulation without its recursion depth.
    fn depth_first_search(&self, start: Vertex) -> Result<DiscoveryForest> {
        if !self.contains_vertex(start) {
            return Err(GraphError::InvalidVertex(start));
        }

        let mut visited = self.vertex_bitset_unset();
        visited.set_bit(start.index());

        let mut forest = DiscoveryForest::new(start);
        let mut stack = vec![(start, self.outgoing_edges(start)?)];

        while let Some((u, edges)) = stack.last_mut() {
            let u = *u;
            let Some(e) = edges.next() else {
                stack.pop();
                continue;
            };

            let v = self.opposite(u, e)?;
            if !visited.set_bit(v.index()) {
                forest.discover(v, e);
                stack.push((v, self.outgoing_edges(v)?));
            }
        }

        tracing::debug!(%start, reached = forest.len(), "depth-first search finished");
        Ok(forest)
    }
}

impl<G: Incidence> Traversal for G {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::testing::for_each_representation;
    use itertools::Itertools;

    //  / 2 --- \
    // 1         4 - 3
    //  \ 0 - 5 /
    fn sample<G: Graph<VertexData = u32, EdgeData = ()>>(directed: bool) -> (G, Vec<Vertex>) {
        let mut graph = G::new(directed);
        let vs = graph.insert_vertices(0..6);
        for (u, v) in [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)] {
            graph.insert_edge(vs[u], vs[v], ()).unwrap();
        }
        (graph, vs)
    }

    /// Checks that every discovery edge connects its vertex to an earlier discovered one
    fn assert_valid_forest<G: Incidence>(graph: &G, forest: &DiscoveryForest) {
        let position = |v: Vertex| forest.discovery_order().iter().position(|&w| w == v);

        assert_eq!(forest.discovery_order()[0], forest.start());
        assert_eq!(forest.discovery_edge(forest.start()), None);
        assert_eq!(forest.iter().count() + 1, forest.len());

        for (v, e) in forest.iter() {
            let u = graph.opposite(v, e).unwrap();
            assert!(position(u).unwrap() < position(v).unwrap());
            if graph.is_directed() {
                assert_eq!(graph.end_vertices(e).unwrap(), (u, v));
            }
        }
    }

    fn bfs_order<G: Graph<VertexData = u32, EdgeData = ()>>() {
        let (graph, vs) = sample::<G>(false);
        let forest = graph.breadth_first_search(vs[1]).unwrap();
        assert_valid_forest(&graph, &forest);

        let order = forest
            .discovery_order()
            .iter()
            .map(|&v| *graph.vertex_data(v).unwrap())
            .collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
        assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
        assert_eq!(order[5], 3);

        let (graph, vs) = sample::<G>(true);
        let forest = graph.breadth_first_search(vs[5]).unwrap();
        assert_eq!(forest.discovery_order(), &[vs[5], vs[4], vs[3]]);
    }

    fn dfs_order<G: Graph<VertexData = u32, EdgeData = ()>>() {
        let (graph, vs) = sample::<G>(false);
        let forest = graph.depth_first_search(vs[3]).unwrap();
        assert_valid_forest(&graph, &forest);
        assert_eq!(forest.len(), 6);

        // 3 - 4 is a bridge, and from 4 the search completes one side of the cycle first
        let order = forest.discovery_order();
        assert_eq!(&order[..2], &[vs[3], vs[4]]);
        assert!(
            order[2..] == [vs[2], vs[1], vs[0], vs[5]]
                || order[2..] == [vs[5], vs[0], vs[1], vs[2]]
        );

        let (graph, vs) = sample::<G>(true);
        let forest = graph.depth_first_search(vs[1]).unwrap();
        assert_valid_forest(&graph, &forest);
        assert_eq!(forest.len(), 6);

        // 1 -> 2 -> 4 -> 3 and 1 -> 0 -> 5 -> 4 -> 3 are explored as far as possible
        let order = forest.discovery_order();
        assert!(
            order == [vs[1], vs[2], vs[4], vs[3], vs[0], vs[5]]
                || order == [vs[1], vs[0], vs[5], vs[4], vs[3], vs[2]]
        );
    }

    fn unreachable_vertices<G: Graph<VertexData = u32, EdgeData = ()>>() {
        let (graph, vs) = sample::<G>(true);

        for forest in [
            graph.breadth_first_search(vs[4]).unwrap(),
            graph.depth_first_search(vs[4]).unwrap(),
        ] {
            assert_eq!(forest.len(), 2);
            assert!(forest.contains(vs[3]));
            assert!(!forest.contains(vs[1]));
            assert_eq!(forest.path_to(&graph, vs[1]).unwrap(), None);
            assert_eq!(forest.path_to(&graph, vs[4]).unwrap(), Some(vec![]));
        }

        let mut other = G::new(true);
        let w = other.insert_vertex(0);
        assert_eq!(
            graph.breadth_first_search(w).unwrap_err(),
            GraphError::InvalidVertex(w)
        );
        assert_eq!(
            graph.depth_first_search(w).unwrap_err(),
            GraphError::InvalidVertex(w)
        );
    }

    fn paths<G: Graph<VertexData = u32, EdgeData = ()>>() {
        let (graph, vs) = sample::<G>(false);
        let forest = graph.breadth_first_search(vs[1]).unwrap();

        let path = forest.path_to(&graph, vs[3]).unwrap().unwrap();
        assert_eq!(path.len(), 3);

        let mut current = vs[1];
        for e in path {
            current = graph.opposite(current, e).unwrap();
        }
        assert_eq!(current, vs[3]);
    }

    #[test]
    fn breadth_first_search() {
        for_each_representation!(bfs_order::<u32, ()>);
    }

    #[test]
    fn depth_first_search() {
        for_each_representation!(dfs_order::<u32, ()>);
    }

    #[test]
    fn search_unreachable() {
        for_each_representation!(unreachable_vertices::<u32, ()>);
    }

    #[test]
    fn path_reconstruction() {
        for_each_representation!(paths::<u32, ()>);
    }
}
