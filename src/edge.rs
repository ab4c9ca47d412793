use std::fmt::{Debug, Display};

use num::{PrimInt, Unsigned};

use crate::utils::InstanceId;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Opaque handle of an edge, valid only within the graph instance that issued it.
///
/// The graph stores the client element together with the ordered pair
/// `(origin, destination)`, see [`GraphElements::end_vertices`](crate::ops::GraphElements::end_vertices).
/// For undirected graphs the pair keeps insertion order but is treated as unordered.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub(crate) owner: InstanceId,
    pub(crate) slot: NumEdges,
    pub(crate) generation: u32,
}

impl Edge {
    /// Returns the arena slot of the edge
    pub fn index(&self) -> NumEdges {
        self.slot
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.slot)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}#{}@{}", self.slot, self.generation, self.owner)
    }
}

/// Edge payloads usable by the weighted algorithms (spanning trees, shortest paths).
///
/// Weights are non-negative integers; negative weights would invalidate the
/// relaxation step of Dijkstra's algorithm.
pub trait Weighted {
    /// Integer type of the weight
    type Weight: PrimInt + Unsigned + Debug;

    /// Returns the weight of the payload
    fn weight(&self) -> Self::Weight;
}

macro_rules! impl_weighted_for_unsigned {
    ($($t:ty),*) => {
        $(
            impl Weighted for $t {
                type Weight = $t;

                #[inline]
                fn weight(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_weighted_for_unsigned!(u8, u16, u32, u64, u128, usize);

impl<T: Weighted> Weighted for &T {
    type Weight = T::Weight;

    #[inline]
    fn weight(&self) -> Self::Weight {
        (**self).weight()
    }
}

/// Shorthand for the weight type of a graph's edge payload
pub type WeightOf<G> =
    <<G as crate::ops::GraphElements>::EdgeData as Weighted>::Weight;
