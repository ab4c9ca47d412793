use crate::{error::QueueError, utils::InstanceId};

use super::*;

/// Handle of an entry in a [`HeapAdaptablePriorityQueue`].
///
/// Stays valid until the entry is removed, either by [`PriorityQueue::delete_min`] or by
/// [`HeapAdaptablePriorityQueue::remove`]. Using it afterwards, or on another queue,
/// fails with [`QueueError::InvalidEntry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntryLocator {
    queue: InstanceId,
    slot: u32,
    generation: u32,
}

#[derive(Clone, Debug)]
struct HeapItem<K, V> {
    entry: Entry<K, V>,
    slot: u32,
}

/// Maps a locator slot to the current heap position of its entry
#[derive(Clone, Debug)]
struct SlotState {
    generation: u32,
    index: usize,
}

/// Binary min-heap whose entries can be addressed after insertion.
///
/// Each entry remembers its position in the heap; the position is updated by the single
/// `swap` primitive that all sift operations go through.
#[derive(Clone, Debug)]
pub struct HeapAdaptablePriorityQueue<K, V, C = NaturalOrder> {
    id: InstanceId,
    heap: Vec<HeapItem<K, V>>,
    slots: Vec<SlotState>,
    free: Vec<u32>,
    comparator: C,
}

impl<K: Ord, V> HeapAdaptablePriorityQueue<K, V> {
    /// Creates an empty queue ordered by `K: Ord`
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty queue ordered by `K: Ord` with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<K: Ord, V> Default for HeapAdaptablePriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: KeyComparator<K>> HeapAdaptablePriorityQueue<K, V, C> {
    /// Creates an empty queue ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            id: InstanceId::fresh(),
            heap: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            comparator,
        }
    }

    /// Returns *true* if `locator` refers to an entry currently stored in this queue
    pub fn contains(&self, locator: EntryLocator) -> bool {
        self.position(locator).is_ok()
    }

    /// Returns the key of the entry
    pub fn key(&self, locator: EntryLocator) -> Result<&K, QueueError> {
        let i = self.position(locator)?;
        Ok(&self.heap[i].entry.key)
    }

    /// Returns the value of the entry
    pub fn value(&self, locator: EntryLocator) -> Result<&V, QueueError> {
        let i = self.position(locator)?;
        Ok(&self.heap[i].entry.value)
    }

    /// Removes the entry and returns it
    pub fn remove(&mut self, locator: EntryLocator) -> Result<Entry<K, V>, QueueError> {
        let i = self.position(locator)?;
        Ok(self.remove_at(i))
    }

    /// Changes the key of the entry, restores heap order and returns the previous key
    pub fn replace_key(&mut self, locator: EntryLocator, key: K) -> Result<K, QueueError> {
        let i = self.position(locator)?;
        let old = std::mem::replace(&mut self.heap[i].entry.key, key);
        self.bubble(i);
        Ok(old)
    }

    /// Changes the value of the entry and returns the previous value
    pub fn replace_value(&mut self, locator: EntryLocator, value: V) -> Result<V, QueueError> {
        let i = self.position(locator)?;
        Ok(std::mem::replace(&mut self.heap[i].entry.value, value))
    }

    fn position(&self, locator: EntryLocator) -> Result<usize, QueueError> {
        match self.slots.get(locator.slot as usize) {
            Some(state) if locator.queue == self.id && state.generation == locator.generation => {
                Ok(state.index)
            }
            _ => Err(QueueError::InvalidEntry),
        }
    }

    fn remove_at(&mut self, i: usize) -> Entry<K, V> {
        let last = self.heap.len() - 1;
        self.swap(i, last);

        let HeapItem { entry, slot } = self.heap.swap_remove(last);
        let state = &mut self.slots[slot as usize];
        state.generation = state.generation.wrapping_add(1);
        self.free.push(slot);

        if i < self.heap.len() {
            self.bubble(i);
        }

        entry
    }
}

impl<K, V, C: KeyComparator<K>> HeapOrder for HeapAdaptablePriorityQueue<K, V, C> {
    fn heap_len(&self) -> usize {
        self.heap.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.comparator
            .compare(&self.heap[i].entry.key, &self.heap[j].entry.key)
            == Ordering::Less
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.slots[self.heap[i].slot as usize].index = i;
        self.slots[self.heap[j].slot as usize].index = j;
    }
}

impl<K, V, C: KeyComparator<K>> PriorityQueue<K, V> for HeapAdaptablePriorityQueue<K, V, C> {
    type Locator = EntryLocator;

    fn insert(&mut self, key: K, value: V) -> EntryLocator {
        let index = self.heap.len();
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize].index = index;
                slot
            }
            None => {
                self.slots.push(SlotState {
                    generation: 0,
                    index,
                });
                (self.slots.len() - 1) as u32
            }
        };

        self.heap.push(HeapItem {
            entry: Entry::new(key, value),
            slot,
        });
        self.up_heap(index);

        EntryLocator {
            queue: self.id,
            slot,
            generation: self.slots[slot as usize].generation,
        }
    }

    fn min(&self) -> Option<&Entry<K, V>> {
        self.heap.first().map(|item| &item.entry)
    }

    fn delete_min(&mut self) -> Option<Entry<K, V>> {
        (!self.heap.is_empty()).then(|| self.remove_at(0))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    impl<K, V, C: KeyComparator<K>> HeapAdaptablePriorityQueue<K, V, C> {
        /// Checks heap order and that every entry knows its own position
        fn assert_consistent(&self) {
            for (i, item) in self.heap.iter().enumerate() {
                assert_eq!(self.slots[item.slot as usize].index, i);
                if i > 0 {
                    assert!(!self.less(i, (i - 1) / 2));
                }
            }
        }
    }

    #[test]
    fn locators_follow_their_entries() {
        let mut queue = HeapAdaptablePriorityQueue::new();
        let locators = (0..20u32).rev().map(|k| (queue.insert(k, k), k)).collect_vec();
        queue.assert_consistent();

        for &(locator, k) in &locators {
            assert_eq!(queue.key(locator), Ok(&k));
            assert_eq!(queue.value(locator), Ok(&k));
        }
    }

    #[test]
    fn replace_key_moves_up_and_down() {
        let mut queue = HeapAdaptablePriorityQueue::new();
        let locators = (0..10u32).map(|k| queue.insert(10 * k, k)).collect_vec();

        assert_eq!(queue.replace_key(locators[7], 5), Ok(70));
        queue.assert_consistent();
        assert_eq!(queue.delete_min().map(|e| e.into_parts()), Some((0, 0)));
        assert_eq!(queue.min().map(|e| *e.value()), Some(7));

        assert_eq!(queue.replace_key(locators[7], 1000), Ok(5));
        queue.assert_consistent();
        assert_eq!(queue.min().map(|e| *e.value()), Some(1));

        assert_eq!(queue.replace_value(locators[7], 77), Ok(7));
        let order = std::iter::from_fn(|| queue.delete_min())
            .map(|e| *e.value())
            .collect_vec();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 8, 9, 77]);
    }

    #[test]
    fn stale_and_foreign_locators() {
        let mut queue = HeapAdaptablePriorityQueue::new();
        let mut other = HeapAdaptablePriorityQueue::new();

        let a = queue.insert(1, 'a');
        let x = other.insert(1, 'x');

        assert_eq!(queue.key(x), Err(QueueError::InvalidEntry));
        assert_eq!(queue.remove(x), Err(QueueError::InvalidEntry));

        assert_eq!(queue.delete_min(), Some(Entry::new(1, 'a')));
        assert!(!queue.contains(a));
        assert_eq!(queue.replace_key(a, 0), Err(QueueError::InvalidEntry));

        // the slot of `a` is recycled, but `a` stays invalid
        let b = queue.insert(2, 'b');
        assert!(queue.contains(b));
        assert_eq!(queue.value(a), Err(QueueError::InvalidEntry));
        assert_eq!(queue.value(b), Ok(&'b'));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn random_operations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut queue = HeapAdaptablePriorityQueue::new();
        let mut live: Vec<(EntryLocator, u32)> = Vec::new();

        for step in 0..2000u32 {
            match rng.random_range(0..6) {
                0 | 1 => {
                    let key = rng.random_range(0..100);
                    live.push((queue.insert(key, step), key));
                }
                2 if !live.is_empty() => {
                    let i = rng.random_range(0..live.len());
                    let key = rng.random_range(0..100);
                    assert_eq!(queue.replace_key(live[i].0, key), Ok(live[i].1));
                    live[i].1 = key;
                }
                3 if !live.is_empty() => {
                    let (locator, key) = live.swap_remove(rng.random_range(0..live.len()));
                    assert_eq!(queue.remove(locator).map(|e| *e.key()), Ok(key));
                }
                4 => {
                    let min = live.iter().map(|&(_, k)| k).min();
                    let entry = queue.delete_min();
                    assert_eq!(entry.as_ref().map(|e| *e.key()), min);

                    if entry.is_some() {
                        let pos = live
                            .iter()
                            .position(|&(l, _)| !queue.contains(l))
                            .unwrap();
                        live.swap_remove(pos);
                    }
                }
                _ => {}
            }

            queue.assert_consistent();
            assert_eq!(queue.len(), live.len());
        }
    }
}
