/*!
# Utilities

Provides helper structs and traits used throughout the crate:
- [`UpTreeDisjointSetForest`](self::disjoint_set::UpTreeDisjointSetForest): the union-find engine behind Kruskal's algorithm,
- [`InstanceId`]: the owner tag embedded in every handle/locator so that foreign handles can be rejected,
- [`FromCapacity`]: uniform pre-allocation of the maps and bitsets used by the algorithms.
*/

use std::{
    fmt::Display,
    sync::atomic::{AtomicU32, Ordering},
};

use fxhash::{FxBuildHasher, FxHashMap};

use crate::prelude::*;

pub mod disjoint_set;

pub use disjoint_set::{SetPosition, UpTreeDisjointSetForest};

/// Identifies one instance of a graph, priority queue or disjoint-set forest.
///
/// Ids are drawn from a process-wide counter and never handed out twice
/// (up to wrap-around after `2^32` instances).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u32);

impl InstanceId {
    /// Returns a fresh id
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Helper trait for datastructures that can be initialized with capacity.
///
/// For maps the capacity is the number of elements that will be stored.
/// For bitsets it is the universe size, ie. the exclusive upper bound on indices.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self;
}

impl FromCapacity for VertexBitSet {
    fn from_capacity(capacity: usize) -> Self {
        Self::new(capacity as NumVertices)
    }
}

impl<K, V> FromCapacity for FxHashMap<K, V> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}
