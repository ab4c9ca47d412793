/*!
# Errors

Every failure in this crate is a local programming error of the caller: a handle used on the
wrong graph (or after it was removed), a vertex that is not incident to an edge, a stale
priority-queue entry, or a union on non-root positions. None of them are retried internally.

Absent values are *not* errors: lookups such as [`Incidence::get_edge`](crate::ops::Incidence::get_edge)
return `Ok(None)`, and algorithms on disconnected graphs return partial results.
*/

use crate::{Edge, Vertex};

/// Errors raised by graph operations and the algorithms built on top of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Vertex handle was issued by another graph or refers to a removed vertex.
    #[error("invalid vertex handle {0:?}")]
    InvalidVertex(Vertex),

    /// Edge handle was issued by another graph or refers to a removed edge.
    #[error("invalid edge handle {0:?}")]
    InvalidEdge(Edge),

    /// `opposite(vertex, edge)` with a vertex that is not an endpoint of the edge.
    #[error("vertex {vertex} is not incident to edge {edge}")]
    NotIncident { vertex: Vertex, edge: Edge },

    /// The (ordered, or for undirected graphs unordered) vertex pair is already connected.
    #[error("an edge from {origin} to {destination} already exists")]
    EdgeExists { origin: Vertex, destination: Vertex },

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Forest(#[from] ForestError),
}

/// Errors raised by [`HeapAdaptablePriorityQueue`](crate::pq::HeapAdaptablePriorityQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// The entry was removed already or belongs to another queue instance.
    #[error("entry is not a live entry of this priority queue")]
    InvalidEntry,
}

/// Errors raised by [`UpTreeDisjointSetForest`](crate::utils::disjoint_set::UpTreeDisjointSetForest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ForestError {
    /// The position was issued by another forest.
    #[error("position does not belong to this forest")]
    InvalidPosition,

    /// `union` expects resolved roots; call `find` first.
    #[error("position is not the root of its up-tree")]
    NotARoot,
}

/// Result type for graph operations
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
