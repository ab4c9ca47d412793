/*!
# Vertex Handles

A [`Vertex`] is an opaque, `Copy` handle into the graph that issued it.
It does not own the client element; the graph does. Handles are validated on every use:

- the **owner** tag identifies the graph instance that created the handle,
- the **slot** is the position inside the graph's vertex arena,
- the **generation** is bumped whenever the slot is freed, so handles to removed vertices are
  rejected even if the slot is recycled later.

Slots are small dense integers (`0..vertex_bound`), which allows algorithms to keep per-vertex
state in bitsets instead of hash maps.
*/

use std::fmt::{Debug, Display};

use stream_bitset::bitset::BitSetImpl;

use crate::utils::InstanceId;

/// There can be at most `2^32 - 1` vertices in a graph
pub type NumVertices = u32;

/// BitSet over vertex slots; see [`Vertex::index`]
pub type VertexBitSet = BitSetImpl<NumVertices>;

/// Opaque handle of a vertex, valid only within the graph instance that issued it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    pub(crate) owner: InstanceId,
    pub(crate) slot: NumVertices,
    pub(crate) generation: u32,
}

impl Vertex {
    /// Returns the arena slot of the vertex.
    ///
    /// The slot is smaller than `graph.vertex_bound()` and unique among the live vertices
    /// of its graph. It may be reused by a later vertex once this one is removed.
    pub fn index(&self) -> NumVertices {
        self.slot
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.slot)
    }
}

impl Debug for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}#{}@{}", self.slot, self.generation, self.owner)
    }
}
