use fxhash::FxHashMap;

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// Graph where each vertex owns a map from adjacent vertices to the connecting edge.
///
/// Directed graphs keep a separate map of incoming edges per vertex. Undirected graphs keep a
/// single map per vertex that serves as both the outgoing and the incoming view.
pub struct AdjacencyMapGraph<V, E> {
    directed: bool,
    vertices: Arena<Vertex, MapVertex<V>>,
    edges: Arena<Edge, EdgeEntry<E>>,
}

#[derive(Clone, Debug)]
struct MapVertex<V> {
    data: V,
    outgoing: FxHashMap<Vertex, Edge>,
    /// `None` for undirected graphs: incoming edges are `outgoing`
    incoming: Option<FxHashMap<Vertex, Edge>>,
}

impl<V> MapVertex<V> {
    fn new(data: V, directed: bool) -> Self {
        Self {
            data,
            outgoing: FxHashMap::default(),
            incoming: directed.then(FxHashMap::default),
        }
    }

    #[inline]
    fn incoming(&self) -> &FxHashMap<Vertex, Edge> {
        self.incoming.as_ref().unwrap_or(&self.outgoing)
    }

    #[inline]
    fn incoming_mut(&mut self) -> &mut FxHashMap<Vertex, Edge> {
        self.incoming.as_mut().unwrap_or(&mut self.outgoing)
    }
}

impl_common_graph_ops!(AdjacencyMapGraph => MapVertex);

impl<V, E> AdjacencyMapGraph<V, E> {
    /// Creates an empty graph with room for the given number of vertices and edges
    pub fn with_capacity(directed: bool, vertices: usize, edges: usize) -> Self {
        let owner = InstanceId::fresh();
        Self {
            directed,
            vertices: Arena::with_capacity(owner, vertices),
            edges: Arena::with_capacity(owner, edges),
        }
    }
}

impl<V, E> Incidence for AdjacencyMapGraph<V, E> {
    fn get_edge(&self, u: Vertex, v: Vertex) -> Result<Option<Edge>> {
        let outgoing = &self.vertex(u)?.outgoing;
        self.vertex(v)?;
        Ok(outgoing.get(&v).copied())
    }

    fn out_degree(&self, v: Vertex) -> Result<NumVertices> {
        Ok(self.vertex(v)?.outgoing.len() as NumVertices)
    }

    fn in_degree(&self, v: Vertex) -> Result<NumVertices> {
        Ok(self.vertex(v)?.incoming().len() as NumVertices)
    }

    fn outgoing_edges(&self, v: Vertex) -> Result<impl Iterator<Item = Edge> + '_> {
        Ok(self.vertex(v)?.outgoing.values().copied())
    }

    fn incoming_edges(&self, v: Vertex) -> Result<impl Iterator<Item = Edge> + '_> {
        Ok(self.vertex(v)?.incoming().values().copied())
    }
}

impl<V, E> GraphEditing for AdjacencyMapGraph<V, E> {
    fn insert_vertex(&mut self, data: V) -> Vertex {
        self.vertices.insert(MapVertex::new(data, self.directed))
    }

    fn insert_edge(&mut self, origin: Vertex, destination: Vertex, data: E) -> Result<Edge> {
        let outgoing = &self.vertex(origin)?.outgoing;
        self.vertex(destination)?;
        if outgoing.contains_key(&destination) {
            return Err(GraphError::EdgeExists {
                origin,
                destination,
            });
        }

        let e = self.edges.insert(EdgeEntry {
            data,
            origin,
            destination,
        });

        self.vertex_mut(origin)?.outgoing.insert(destination, e);
        self.vertex_mut(destination)?.incoming_mut().insert(origin, e);

        Ok(e)
    }

    fn remove_vertex(&mut self, v: Vertex) -> Result<V> {
        let entry = self.vertices.remove(v).ok_or(GraphError::InvalidVertex(v))?;

        // `v` is gone already, so self-loops only need to be dropped from the edge arena
        for (&w, &e) in &entry.outgoing {
            self.edges.remove(e);
            if let Some(neighbor) = self.vertices.get_mut(w) {
                neighbor.incoming_mut().remove(&v);
            }
        }

        if let Some(incoming) = &entry.incoming {
            for (&w, &e) in incoming {
                self.edges.remove(e);
                if let Some(neighbor) = self.vertices.get_mut(w) {
                    neighbor.outgoing.remove(&v);
                }
            }
        }

        Ok(entry.data)
    }

    fn remove_edge(&mut self, e: Edge) -> Result<E> {
        let entry = self.edges.remove(e).ok_or(GraphError::InvalidEdge(e))?;

        self.vertex_mut(entry.origin)?
            .outgoing
            .remove(&entry.destination);
        self.vertex_mut(entry.destination)?
            .incoming_mut()
            .remove(&entry.origin);

        Ok(entry.data)
    }
}

test_graph_ops!(
    test_adj_map_directed,
    AdjacencyMapGraph,
    true,
    (GraphNew, Incidence, GraphEditing, Handles, Graph)
);
test_graph_ops!(
    test_adj_map_undirected,
    AdjacencyMapGraph,
    false,
    (GraphNew, Incidence, GraphEditing, Handles, Graph)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_views_are_shared() {
        let mut graph = AdjacencyMapGraph::<char, u8>::new_undirected();
        let [a, b, c] = ['a', 'b', 'c'].map(|x| graph.insert_vertex(x));
        graph.insert_edge(a, b, 1).unwrap();
        graph.insert_edge(c, a, 2).unwrap();

        let vertex = graph.vertex(a).unwrap();
        assert!(vertex.incoming.is_none());
        assert_eq!(vertex.outgoing.len(), 2);
        assert!(std::ptr::eq(vertex.incoming(), &vertex.outgoing));
    }

    #[test]
    fn remove_edge_clears_both_endpoints() {
        for directed in [false, true] {
            let mut graph = AdjacencyMapGraph::<char, u8>::new(directed);
            let [a, b] = ['a', 'b'].map(|x| graph.insert_vertex(x));
            let e = graph.insert_edge(a, b, 1).unwrap();

            assert_eq!(graph.remove_edge(e).unwrap(), 1);
            assert!(graph.vertex(a).unwrap().outgoing.is_empty());
            assert!(graph.vertex(b).unwrap().incoming().is_empty());

            // the pair can be connected again
            graph.insert_edge(a, b, 2).unwrap();
        }
    }
}
