/*!
# Graph Representations

Three interchangeable storage backends for the contract in [`crate::ops`]:

| Representation           | `get_edge` | degree | `insert_vertex` | `remove_vertex` |
|--------------------------|------------|--------|-----------------|-----------------|
| [`EdgeListGraph`]        | O(m)       | O(m)   | O(1)            | O(m)            |
| [`AdjacencyMatrixGraph`] | O(1)       | O(k)   | O(k) amortized  | O(k)            |
| [`AdjacencyMapGraph`]    | O(1) exp.  | O(1)   | O(1)            | O(deg)          |

where `k` is the number of matrix indices ever handed out.

Vertices and edges live in generational arenas, so handles of removed elements are rejected and
[`GraphOrder::vertices`] / [`GraphOrder::edges`] report elements in insertion order for every
representation. Running the same sequence of operations on any two representations yields the
same observable results; only the order of incident edges may differ.
*/

use std::fmt::Debug;

use itertools::Itertools;

use crate::{error::*, ops::*, prelude::*, utils::InstanceId};

mod adj_map;
mod adj_matrix;
mod arena;
mod edge_list;

pub use adj_map::*;
pub use adj_matrix::*;
pub use edge_list::*;

pub(crate) use arena::Arena;

/// Stored per edge by every representation
#[derive(Clone, Debug)]
pub(crate) struct EdgeEntry<E> {
    pub data: E,
    pub origin: Vertex,
    pub destination: Vertex,
}

impl<E> EdgeEntry<E> {
    /// Returns *true* if `v` is an endpoint
    #[inline]
    pub fn is_incident_to(&self, v: Vertex) -> bool {
        self.origin == v || self.destination == v
    }
}

pub(crate) mod macros {
    /// Implements everything that only depends on the two arenas.
    /// Expects fields `directed: bool`, `vertices: Arena<Vertex, $entry<V>>` (with a `data`
    /// field) and `edges: Arena<Edge, EdgeEntry<E>>`, and an inherent
    /// `with_capacity(directed, vertices, edges)`.
    macro_rules! impl_common_graph_ops {
        ($struct:ident => $entry:ident) => {
            impl<V, E> GraphType for $struct<V, E> {
                fn is_directed(&self) -> bool {
                    self.directed
                }
            }

            impl<V, E> GraphOrder for $struct<V, E> {
                fn number_of_vertices(&self) -> NumVertices {
                    self.vertices.len()
                }

                fn number_of_edges(&self) -> NumEdges {
                    self.edges.len()
                }

                fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
                    self.vertices.handles()
                }

                fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
                    self.edges.handles()
                }

                fn vertex_bound(&self) -> NumVertices {
                    self.vertices.bound()
                }

                fn contains_vertex(&self, v: Vertex) -> bool {
                    self.vertices.contains(v)
                }

                fn contains_edge(&self, e: Edge) -> bool {
                    self.edges.contains(e)
                }
            }

            impl<V, E> GraphElements for $struct<V, E> {
                type VertexData = V;
                type EdgeData = E;

                fn vertex_data(&self, v: Vertex) -> Result<&V> {
                    Ok(&self.vertex(v)?.data)
                }

                fn vertex_data_mut(&mut self, v: Vertex) -> Result<&mut V> {
                    Ok(&mut self.vertex_mut(v)?.data)
                }

                fn edge_data(&self, e: Edge) -> Result<&E> {
                    Ok(&self.edge(e)?.data)
                }

                fn edge_data_mut(&mut self, e: Edge) -> Result<&mut E> {
                    Ok(&mut self
                        .edges
                        .get_mut(e)
                        .ok_or(GraphError::InvalidEdge(e))?
                        .data)
                }

                fn end_vertices(&self, e: Edge) -> Result<(Vertex, Vertex)> {
                    let entry = self.edge(e)?;
                    Ok((entry.origin, entry.destination))
                }
            }

            impl<V, E> GraphNew for $struct<V, E> {
                fn new(directed: bool) -> Self {
                    Self::with_capacity(directed, 0, 0)
                }
            }

            impl<V, E> Default for $struct<V, E> {
                fn default() -> Self {
                    Self::new(false)
                }
            }

            impl<V: Debug, E: Debug> Debug for $struct<V, E> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let kind = if self.directed { "directed" } else { "undirected" };
                    writeln!(f, "{} ({kind}) {{", stringify!($struct))?;
                    for (v, entry) in self.vertices.iter() {
                        writeln!(f, "  {v}: {:?}", entry.data)?;
                    }
                    let arrow = if self.directed { "->" } else { "--" };
                    for (e, entry) in self.edges.iter() {
                        writeln!(
                            f,
                            "  {e}: {} {arrow} {}: {:?}",
                            entry.origin, entry.destination, entry.data
                        )?;
                    }
                    write!(f, "}}")
                }
            }

            impl<V, E> $struct<V, E> {
                #[inline]
                fn vertex(&self, v: Vertex) -> Result<&$entry<V>> {
                    self.vertices.get(v).ok_or(GraphError::InvalidVertex(v))
                }

                #[inline]
                fn vertex_mut(&mut self, v: Vertex) -> Result<&mut $entry<V>> {
                    self.vertices.get_mut(v).ok_or(GraphError::InvalidVertex(v))
                }

                #[inline]
                fn edge(&self, e: Edge) -> Result<&EdgeEntry<E>> {
                    self.edges.get(e).ok_or(GraphError::InvalidEdge(e))
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}
