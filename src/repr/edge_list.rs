use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// Graph stored as a plain collection of vertices and a plain collection of edges.
///
/// Every adjacency query scans the full edge collection, which makes this the
/// smallest but also the slowest representation. Insertion of an edge has to rule out
/// parallel edges and thus is O(m) as well.
pub struct EdgeListGraph<V, E> {
    directed: bool,
    vertices: Arena<Vertex, ListVertex<V>>,
    edges: Arena<Edge, EdgeEntry<E>>,
}

#[derive(Clone, Debug)]
struct ListVertex<V> {
    data: V,
}

impl_common_graph_ops!(EdgeListGraph => ListVertex);

impl<V, E> EdgeListGraph<V, E> {
    /// Creates an empty graph with room for the given number of vertices and edges
    pub fn with_capacity(directed: bool, vertices: usize, edges: usize) -> Self {
        let owner = InstanceId::fresh();
        Self {
            directed,
            vertices: Arena::with_capacity(owner, vertices),
            edges: Arena::with_capacity(owner, edges),
        }
    }

    /// Edges leaving `v`, or for undirected graphs touching `v`
    fn edges_out_of(&self, v: Vertex) -> impl Iterator<Item = (Edge, &EdgeEntry<E>)> + '_ {
        let directed = self.directed;
        self.edges
            .iter()
            .filter(move |(_, entry)| entry.origin == v || (!directed && entry.destination == v))
    }

    fn edges_into(&self, v: Vertex) -> impl Iterator<Item = (Edge, &EdgeEntry<E>)> + '_ {
        let directed = self.directed;
        self.edges
            .iter()
            .filter(move |(_, entry)| entry.destination == v || (!directed && entry.origin == v))
    }
}

impl<V, E> Incidence for EdgeListGraph<V, E> {
    fn get_edge(&self, u: Vertex, v: Vertex) -> Result<Option<Edge>> {
        self.vertex(u)?;
        self.vertex(v)?;

        Ok(self
            .edges
            .iter()
            .find(|(_, entry)| {
                (entry.origin == u && entry.destination == v)
                    || (!self.directed && entry.origin == v && entry.destination == u)
            })
            .map(|(e, _)| e))
    }

    fn out_degree(&self, v: Vertex) -> Result<NumVertices> {
        self.vertex(v)?;
        Ok(self.edges_out_of(v).count() as NumVertices)
    }

    fn in_degree(&self, v: Vertex) -> Result<NumVertices> {
        self.vertex(v)?;
        Ok(self.edges_into(v).count() as NumVertices)
    }

    fn outgoing_edges(&self, v: Vertex) -> Result<impl Iterator<Item = Edge> + '_> {
        self.vertex(v)?;
        Ok(self.edges_out_of(v).map(|(e, _)| e))
    }

    fn incoming_edges(&self, v: Vertex) -> Result<impl Iterator<Item = Edge> + '_> {
        self.vertex(v)?;
        Ok(self.edges_into(v).map(|(e, _)| e))
    }
}

impl<V, E> GraphEditing for EdgeListGraph<V, E> {
    fn insert_vertex(&mut self, data: V) -> Vertex {
        self.vertices.insert(ListVertex { data })
    }

    fn insert_edge(&mut self, origin: Vertex, destination: Vertex, data: E) -> Result<Edge> {
        if self.get_edge(origin, destination)?.is_some() {
            return Err(GraphError::EdgeExists {
                origin,
                destination,
            });
        }

        Ok(self.edges.insert(EdgeEntry {
            data,
            origin,
            destination,
        }))
    }

    fn remove_vertex(&mut self, v: Vertex) -> Result<V> {
        self.vertex(v)?;

        let incident = self
            .edges
            .iter()
            .filter(|(_, entry)| entry.is_incident_to(v))
            .map(|(e, _)| e)
            .collect_vec();

        for e in incident {
            self.edges.remove(e);
        }

        self.vertices
            .remove(v)
            .map(|entry| entry.data)
            .ok_or(GraphError::InvalidVertex(v))
    }

    fn remove_edge(&mut self, e: Edge) -> Result<E> {
        self.edges
            .remove(e)
            .map(|entry| entry.data)
            .ok_or(GraphError::InvalidEdge(e))
    }
}

test_graph_ops!(
    test_edge_list_directed,
    EdgeListGraph,
    true,
    (GraphNew, Incidence, GraphEditing, Handles, Graph)
);
test_graph_ops!(
    test_edge_list_undirected,
    EdgeListGraph,
    false,
    (GraphNew, Incidence, GraphEditing, Handles, Graph)
);
