use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// Graph backed by a square matrix of edge handles.
///
/// Every vertex receives a dense matrix index on insertion. Indices increase monotonically and
/// are never reused, hence the matrix only ever grows: removing a vertex clears its row and
/// column but keeps them allocated. The backing storage doubles its dimension when full, so
/// inserting a vertex is amortized linear in the dimension.
///
/// For undirected graphs, an edge between `u` and `v` occupies both cells `(u, v)` and `(v, u)`.
pub struct AdjacencyMatrixGraph<V, E> {
    directed: bool,
    vertices: Arena<Vertex, MatrixVertex<V>>,
    edges: Arena<Edge, EdgeEntry<E>>,

    /// Row-major cells with `stride * stride` entries
    matrix: Vec<Option<Edge>>,
    stride: usize,
    /// Number of matrix indices handed out so far
    dimension: usize,
}

#[derive(Clone, Debug)]
struct MatrixVertex<V> {
    data: V,
    index: usize,
}

impl_common_graph_ops!(AdjacencyMatrixGraph => MatrixVertex);

impl<V, E> AdjacencyMatrixGraph<V, E> {
    /// Creates an empty graph with room for the given number of vertices and edges
    pub fn with_capacity(directed: bool, vertices: usize, edges: usize) -> Self {
        let owner = InstanceId::fresh();
        Self {
            directed,
            vertices: Arena::with_capacity(owner, vertices),
            edges: Arena::with_capacity(owner, edges),
            matrix: vec![None; vertices * vertices],
            stride: vertices,
            dimension: 0,
        }
    }

    /// Returns the number of matrix indices handed out, including those of removed vertices
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn cell(&self, row: usize, col: usize) -> Option<Edge> {
        self.matrix[row * self.stride + col]
    }

    #[inline]
    fn cell_mut(&mut self, row: usize, col: usize) -> &mut Option<Edge> {
        &mut self.matrix[row * self.stride + col]
    }

    fn row(&self, index: usize) -> impl Iterator<Item = Edge> + '_ {
        let dim = self.dimension();
        (0..dim).filter_map(move |col| self.cell(index, col))
    }

    fn column(&self, index: usize) -> impl Iterator<Item = Edge> + '_ {
        let dim = self.dimension();
        (0..dim).filter_map(move |row| self.cell(row, index))
    }

    /// Makes room for one more matrix index by doubling the stride if needed
    fn grow(&mut self) {
        let dim = self.dimension();
        if dim < self.stride {
            return;
        }

        let stride = (2 * self.stride).max(4);
        let mut matrix = vec![None; stride * stride];
        for row in 0..dim {
            let old = row * self.stride;
            matrix[row * stride..row * stride + dim].copy_from_slice(&self.matrix[old..old + dim]);
        }

        tracing::trace!(from = self.stride, to = stride, "growing adjacency matrix");
        self.matrix = matrix;
        self.stride = stride;
    }
}

impl<V, E> Incidence for AdjacencyMatrixGraph<V, E> {
    fn get_edge(&self, u: Vertex, v: Vertex) -> Result<Option<Edge>> {
        let u = self.vertex(u)?.index;
        let v = self.vertex(v)?.index;
        Ok(self.cell(u, v))
    }

    fn out_degree(&self, v: Vertex) -> Result<NumVertices> {
        let index = self.vertex(v)?.index;
        Ok(self.row(index).count() as NumVertices)
    }

    fn in_degree(&self, v: Vertex) -> Result<NumVertices> {
        let index = self.vertex(v)?.index;
        Ok(self.column(index).count() as NumVertices)
    }

    fn outgoing_edges(&self, v: Vertex) -> Result<impl Iterator<Item = Edge> + '_> {
        let index = self.vertex(v)?.index;
        Ok(self.row(index))
    }

    fn incoming_edges(&self, v: Vertex) -> Result<impl Iterator<Item = Edge> + '_> {
        let index = self.vertex(v)?.index;
        Ok(self.column(index))
    }
}

impl<V, E> GraphEditing for AdjacencyMatrixGraph<V, E> {
    fn insert_vertex(&mut self, data: V) -> Vertex {
        self.grow();

        let index = self.dimension;
        self.dimension += 1;
        self.vertices.insert(MatrixVertex { data, index })
    }

    fn insert_edge(&mut self, origin: Vertex, destination: Vertex, data: E) -> Result<Edge> {
        let u = self.vertex(origin)?.index;
        let v = self.vertex(destination)?.index;

        if self.cell(u, v).is_some() {
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

        *self.cell_mut(u, v) = Some(e);
        if !self.directed {
            *self.cell_mut(v, u) = Some(e);
        }

        Ok(e)
    }

    fn remove_vertex(&mut self, v: Vertex) -> Result<V> {
        let index = self.vertex(v)?.index;

        let incident = self.row(index).chain(self.column(index)).unique().collect_vec();
        for e in incident {
            self.edges.remove(e);
        }

        for other in 0..self.dimension() {
            *self.cell_mut(index, other) = None;
            *self.cell_mut(other, index) = None;
        }

        self.vertices
            .remove(v)
            .map(|entry| entry.data)
            .ok_or(GraphError::InvalidVertex(v))
    }

    fn remove_edge(&mut self, e: Edge) -> Result<E> {
        let entry = self.edges.remove(e).ok_or(GraphError::InvalidEdge(e))?;

        let u = self.vertex(entry.origin)?.index;
        let v = self.vertex(entry.destination)?.index;

        *self.cell_mut(u, v) = None;
        if !self.directed {
            *self.cell_mut(v, u) = None;
        }

        Ok(entry.data)
    }
}

test_graph_ops!(
    test_adj_matrix_directed,
    AdjacencyMatrixGraph,
    true,
    (GraphNew, Incidence, GraphEditing, Handles, Graph)
);
test_graph_ops!(
    test_adj_matrix_undirected,
    AdjacencyMatrixGraph,
    false,
    (GraphNew, Incidence, GraphEditing, Handles, Graph)
);
