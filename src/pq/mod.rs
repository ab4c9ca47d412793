/*!
# Priority Queues

Binary min-heaps over a `Vec`, ordered by a [`KeyComparator`]:

- [`HeapPriorityQueue`]: the plain queue (`insert`, `min`, `delete_min`),
- [`HeapAdaptablePriorityQueue`]: additionally hands out an [`EntryLocator`] per entry that can
  later be used to `remove` the entry or replace its key or value in `O(log n)`.

Both queues break ties between equal keys in an unspecified, but deterministic, order.

# Example
```
use lgraphs::pq::*;

let mut queue = HeapAdaptablePriorityQueue::new();
let a = queue.insert(5, 'a');
queue.insert(3, 'b');
queue.insert(7, 'c');

queue.replace_key(a, 1).unwrap();
assert_eq!(queue.min().map(|e| *e.value()), Some('a'));

let order: String = std::iter::from_fn(|| queue.delete_min())
    .map(|e| *e.value())
    .collect();
assert_eq!(order, "abc");
```
*/

use std::cmp::Ordering;

mod adaptable;
mod heap;

pub use adaptable::*;
pub use heap::*;

/// Total order on priority-queue keys; smaller keys are extracted first
pub trait KeyComparator<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation
#[derive(Copy, Clone, Debug, Default)]
pub struct NaturalOrder;

impl<K: Ord> KeyComparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by a closure, eg. `ByFn(|a: &u32, b: &u32| b.cmp(a))` for a max-heap
#[derive(Copy, Clone, Debug)]
pub struct ByFn<F>(pub F);

impl<K, F> KeyComparator<K> for ByFn<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}

/// Key/value pair stored in a priority queue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Operations shared by all priority queues
pub trait PriorityQueue<K, V> {
    /// What [`PriorityQueue::insert`] hands back to address the entry later
    type Locator;

    /// Inserts `value` with priority `key`
    fn insert(&mut self, key: K, value: V) -> Self::Locator;

    /// Returns the entry with minimum key without removing it
    fn min(&self) -> Option<&Entry<K, V>>;

    /// Removes and returns the entry with minimum key
    fn delete_min(&mut self) -> Option<Entry<K, V>>;

    /// Returns the number of entries
    fn len(&self) -> usize;

    /// Returns *true* if the queue has no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sift operations of an implicit binary heap stored at positions `0..heap_len()`.
/// Implementors only provide the comparison and the swap; every reordering goes through `swap`.
trait HeapOrder {
    fn heap_len(&self) -> usize;

    /// Returns *true* if the entry at `i` has to be above the entry at `j`
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);

    fn up_heap(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn down_heap(&mut self, mut i: usize) {
        let len = self.heap_len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };

            if !self.less(child, i) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
    }

    /// Restores heap order after the entry at `i` changed: up *or* down, never both
    fn bubble(&mut self, i: usize) {
        if i > 0 && self.less(i, (i - 1) / 2) {
            self.up_heap(i);
        } else {
            self.down_heap(i);
        }
    }
}
