/*!
# Disjoint-Set Forest

Union-find over arbitrary hashable elements, implemented as a forest of up-trees stored in a
`Vec`. Each node keeps its element, the index of its parent (roots are their own parent) and the
size of the up-tree it roots.

- [`UpTreeDisjointSetForest::find`] and [`UpTreeDisjointSetForest::find_position`] apply full
  path compression: every node on the path is re-parented directly to the root.
- [`UpTreeDisjointSetForest::union`] is union-by-size on already resolved roots.

Together, both bound the amortized cost of `find` by `O(log* n)`.

An auxiliary `FxHashMap` maps elements to their nodes, so callers can `find` by element value
without keeping positions around.

# Example
```
use lgraphs::utils::UpTreeDisjointSetForest;

let mut forest = UpTreeDisjointSetForest::new();
for x in ["a", "b", "c"] {
    forest.make_set(x);
}

let a = forest.find(&"a").unwrap();
let b = forest.find(&"b").unwrap();
forest.union(a, b).unwrap();

assert_eq!(forest.find(&"a"), forest.find(&"b"));
assert_ne!(forest.find(&"a"), forest.find(&"c"));
assert_eq!(forest.number_of_sets(), 2);
```
*/

use std::hash::Hash;

use fxhash::FxHashMap;

use super::{FromCapacity, InstanceId};
use crate::error::{ForestError, Result};

/// Opaque position of an element inside an [`UpTreeDisjointSetForest`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetPosition {
    forest: InstanceId,
    index: u32,
}

#[derive(Clone, Debug)]
struct UpTreeNode<T> {
    element: T,
    parent: u32,
    /// Only meaningful at roots
    size: u32,
}

/// Union-find with path compression and union by size.
#[derive(Clone, Debug)]
pub struct UpTreeDisjointSetForest<T> {
    id: InstanceId,
    nodes: Vec<UpTreeNode<T>>,
    positions: FxHashMap<T, u32>,
    number_of_sets: usize,
}

impl<T> Default for UpTreeDisjointSetForest<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UpTreeDisjointSetForest<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty forest
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty forest with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: InstanceId::fresh(),
            nodes: Vec::with_capacity(capacity),
            positions: FxHashMap::from_capacity(capacity),
            number_of_sets: 0,
        }
    }

    /// Creates a singleton set `{value}` and returns its position.
    ///
    /// If `value` is already stored in the forest, its existing position is returned and the
    /// forest is left unchanged.
    pub fn make_set(&mut self, value: T) -> SetPosition {
        if let Some(&index) = self.positions.get(&value) {
            return self.position(index);
        }

        let index = self.nodes.len() as u32;
        self.nodes.push(UpTreeNode {
            element: value.clone(),
            parent: index,
            size: 1,
        });
        self.positions.insert(value, index);
        self.number_of_sets += 1;

        self.position(index)
    }

    /// Returns the root position of the set containing `value`, or `None` if `value` was never
    /// added via [`Self::make_set`]. Compresses the path from `value` to its root.
    pub fn find(&mut self, value: &T) -> Option<SetPosition> {
        let index = *self.positions.get(value)?;
        let root = self.compress(index);
        Some(self.position(root))
    }

    /// Returns the root position of the set containing the node at `position`.
    /// Compresses the path from `position` to its root.
    pub fn find_position(&mut self, position: SetPosition) -> Result<SetPosition, ForestError> {
        let index = self.validate(position)?;
        let root = self.compress(index);
        Ok(self.position(root))
    }

    /// Merges the sets rooted at `a` and `b` and returns the root of the merged set.
    ///
    /// The root of the smaller up-tree is attached below the root of the larger one;
    /// on ties `a` is attached below `b`. Both positions must be roots, ie. the result of
    /// [`Self::find`] / [`Self::find_position`]. Merging a root with itself is a no-op.
    pub fn union(&mut self, a: SetPosition, b: SetPosition) -> Result<SetPosition, ForestError> {
        let a = self.validate_root(a)?;
        let b = self.validate_root(b)?;

        if a == b {
            return Ok(self.position(a));
        }

        let size = self.nodes[a as usize].size + self.nodes[b as usize].size;
        let (child, root) = if self.nodes[a as usize].size > self.nodes[b as usize].size {
            (b, a)
        } else {
            (a, b)
        };

        self.nodes[child as usize].parent = root;
        self.nodes[root as usize].size = size;
        self.number_of_sets -= 1;

        tracing::trace!(child, root, size, "union of up-trees");
        Ok(self.position(root))
    }

    /// Returns the element stored at `position`
    pub fn element(&self, position: SetPosition) -> Result<&T, ForestError> {
        let index = self.validate(position)?;
        Ok(&self.nodes[index as usize].element)
    }

    /// Returns the current parent of `position` without compressing.
    /// A root is its own parent.
    pub fn parent_of(&self, position: SetPosition) -> Result<SetPosition, ForestError> {
        let index = self.validate(position)?;
        Ok(self.position(self.nodes[index as usize].parent))
    }

    /// Returns *true* if `position` is the root of its up-tree
    pub fn is_root(&self, position: SetPosition) -> Result<bool, ForestError> {
        Ok(self.parent_of(position)? == position)
    }

    /// Returns the number of elements in the set rooted at `root`
    pub fn size_of(&self, root: SetPosition) -> Result<usize, ForestError> {
        let index = self.validate_root(root)?;
        Ok(self.nodes[index as usize].size as usize)
    }

    /// Returns the number of elements stored in the forest
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if no element was added yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn number_of_sets(&self) -> usize {
        self.number_of_sets
    }

    fn position(&self, index: u32) -> SetPosition {
        SetPosition {
            forest: self.id,
            index,
        }
    }

    fn validate(&self, position: SetPosition) -> Result<u32, ForestError> {
        if position.forest != self.id || position.index as usize >= self.nodes.len() {
            return Err(ForestError::InvalidPosition);
        }
        Ok(position.index)
    }

    fn validate_root(&self, position: SetPosition) -> Result<u32, ForestError> {
        let index = self.validate(position)?;
        if self.nodes[index as usize].parent != index {
            return Err(ForestError::NotARoot);
        }
        Ok(index)
    }

    /// Walks up to the root, then points every node visited on the way directly at it
    fn compress(&mut self, index: u32) -> u32 {
        let mut root = index;
        while self.nodes[root as usize].parent != root {
            root = self.nodes[root as usize].parent;
        }

        let mut node = index;
        while node != root {
            let parent = self.nodes[node as usize].parent;
            self.nodes[node as usize].parent = root;
            node = parent;
        }

        root
    }
}
