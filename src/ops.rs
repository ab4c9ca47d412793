/*!
# Graph Operations

The graph contract is split into small traits, each covering one concern:

- [`GraphType`]: directed or undirected, fixed at construction,
- [`GraphOrder`]: counts and iteration over the vertex/edge collections,
- [`GraphElements`]: access to the client elements and the endpoints of edges,
- [`Incidence`]: lookup of edges between vertices, degrees and incident edges,
- [`GraphNew`] / [`GraphEditing`]: construction and mutation.

[`Graph`] bundles all of them and is implemented for every type that implements the parts.
Algorithms in [`crate::algo`] are extension traits over these contracts and thus work on every
representation in [`crate::repr`].

All operations that take a handle validate it first and fail with
[`GraphError::InvalidVertex`] / [`GraphError::InvalidEdge`] if it was issued by another graph or
refers to a removed element. A failing mutation leaves the graph untouched.

# Example
```
use lgraphs::prelude::*;

let mut graph = AdjacencyMapGraph::<&str, u32>::new_undirected();
let a = graph.insert_vertex("A");
let b = graph.insert_vertex("B");
let e = graph.insert_edge(a, b, 7).unwrap();

assert_eq!(graph.get_edge(b, a).unwrap(), Some(e));
assert_eq!(graph.opposite(a, e).unwrap(), b);
assert_eq!(*graph.edge_data(e).unwrap(), 7);
assert_eq!(graph.out_degree(a).unwrap(), 1);
```
*/

use crate::{error::*, prelude::*, utils::FromCapacity};

/// Directedness of a graph
pub trait GraphType {
    /// Returns *true* if edges are ordered pairs
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges are unordered pairs
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the size of a graph
pub trait GraphOrder {
    /// Returns the number of live vertices
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns the number of live edges
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all vertices in insertion order
    fn vertices(&self) -> impl Iterator<Item = Vertex> + '_;

    /// Returns an iterator over all edges in insertion order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Returns an exclusive upper bound on [`Vertex::index`] of all live vertices
    fn vertex_bound(&self) -> NumVertices;

    /// Returns *true* if `v` is a live vertex of this graph
    fn contains_vertex(&self, v: Vertex) -> bool;

    /// Returns *true* if `e` is a live edge of this graph
    fn contains_edge(&self, e: Edge) -> bool;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }

    /// Returns an empty bitset with one entry per vertex slot
    fn vertex_bitset_unset(&self) -> VertexBitSet {
        VertexBitSet::from_capacity(self.vertex_bound() as usize)
    }
}

/// Access to the client elements stored at vertices and edges
pub trait GraphElements: GraphOrder {
    type VertexData;
    type EdgeData;

    /// Returns the element stored at `v`
    fn vertex_data(&self, v: Vertex) -> Result<&Self::VertexData>;

    /// Returns the element stored at `v` mutably
    fn vertex_data_mut(&mut self, v: Vertex) -> Result<&mut Self::VertexData>;

    /// Returns the element stored at `e`
    fn edge_data(&self, e: Edge) -> Result<&Self::EdgeData>;

    /// Returns the element stored at `e` mutably
    fn edge_data_mut(&mut self, e: Edge) -> Result<&mut Self::EdgeData>;

    /// Returns `(origin, destination)` of `e`.
    /// For undirected graphs, this is the order in which the edge was inserted.
    fn end_vertices(&self, e: Edge) -> Result<(Vertex, Vertex)>;
}

/// Edge lookup and incident edges of a vertex.
///
/// For undirected graphs, outgoing and incoming edges coincide, as do out- and in-degree.
/// A self-loop counts once towards both degrees.
pub trait Incidence: GraphType + GraphElements {
    /// Returns the edge from `u` to `v` (for undirected graphs: between `u` and `v`) if it exists
    fn get_edge(&self, u: Vertex, v: Vertex) -> Result<Option<Edge>>;

    /// Returns the number of outgoing edges of `v`
    fn out_degree(&self, v: Vertex) -> Result<NumVertices>;

    /// Returns the number of incoming edges of `v`
    fn in_degree(&self, v: Vertex) -> Result<NumVertices>;

    /// Returns an iterator over all outgoing edges of `v` in unspecified order
    fn outgoing_edges(&self, v: Vertex) -> Result<impl Iterator<Item = Edge> + '_>;

    /// Returns an iterator over all incoming edges of `v` in unspecified order
    fn incoming_edges(&self, v: Vertex) -> Result<impl Iterator<Item = Edge> + '_>;

    /// Returns *true* if there is an edge from `u` to `v`
    fn has_edge(&self, u: Vertex, v: Vertex) -> Result<bool> {
        Ok(self.get_edge(u, v)?.is_some())
    }

    /// Returns the endpoint of `e` that is not `v`.
    /// For a self-loop this is `v` itself.
    ///
    /// Fails with [`GraphError::NotIncident`] if `v` is not an endpoint of `e`.
    fn opposite(&self, v: Vertex, e: Edge) -> Result<Vertex> {
        if !self.contains_vertex(v) {
            return Err(GraphError::InvalidVertex(v));
        }

        let (origin, destination) = self.end_vertices(e)?;
        if v == origin {
            Ok(destination)
        } else if v == destination {
            Ok(origin)
        } else {
            Err(GraphError::NotIncident { vertex: v, edge: e })
        }
    }
}

/// Construction of empty graphs
pub trait GraphNew: Sized {
    /// Creates an empty graph
    fn new(directed: bool) -> Self;

    /// Creates an empty directed graph
    fn new_directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph
    fn new_undirected() -> Self {
        Self::new(false)
    }
}

/// Insertion and removal of vertices and edges
pub trait GraphEditing: GraphElements {
    /// Stores `data` at a new vertex and returns its handle
    fn insert_vertex(&mut self, data: Self::VertexData) -> Vertex;

    /// Inserts one vertex per element and returns their handles
    fn insert_vertices<I>(&mut self, data: I) -> Vec<Vertex>
    where
        I: IntoIterator<Item = Self::VertexData>,
    {
        data.into_iter().map(|x| self.insert_vertex(x)).collect()
    }

    /// Stores `data` at a new edge from `origin` to `destination` and returns its handle.
    ///
    /// Fails with [`GraphError::EdgeExists`] if both vertices are already connected
    /// (for undirected graphs regardless of orientation).
    fn insert_edge(
        &mut self,
        origin: Vertex,
        destination: Vertex,
        data: Self::EdgeData,
    ) -> Result<Edge>;

    /// Removes `v` together with all its incident edges and returns its element
    fn remove_vertex(&mut self, v: Vertex) -> Result<Self::VertexData>;

    /// Removes `e` and returns its element
    fn remove_edge(&mut self, e: Edge) -> Result<Self::EdgeData>;
}

/// The complete graph contract
pub trait Graph: GraphNew + GraphEditing + Incidence {}

impl<G: GraphNew + GraphEditing + Incidence> Graph for G {}
