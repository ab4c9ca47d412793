use super::*;

/// Binary min-heap of key/value entries
#[derive(Clone, Debug)]
pub struct HeapPriorityQueue<K, V, C = NaturalOrder> {
    heap: Vec<Entry<K, V>>,
    comparator: C,
}

impl<K: Ord, V> HeapPriorityQueue<K, V> {
    /// Creates an empty queue ordered by `K: Ord`
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty queue ordered by `K: Ord` with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<K: Ord, V> Default for HeapPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: KeyComparator<K>> HeapPriorityQueue<K, V, C> {
    /// Creates an empty queue ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            comparator,
        }
    }
}

impl<K, V, C: KeyComparator<K>> HeapOrder for HeapPriorityQueue<K, V, C> {
    fn heap_len(&self) -> usize {
        self.heap.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.comparator.compare(&self.heap[i].key, &self.heap[j].key) == Ordering::Less
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
    }
}

impl<K, V, C: KeyComparator<K>> PriorityQueue<K, V> for HeapPriorityQueue<K, V, C> {
    type Locator = ();

    fn insert(&mut self, key: K, value: V) -> Self::Locator {
        self.heap.push(Entry::new(key, value));
        self.up_heap(self.heap.len() - 1);
    }

    fn min(&self) -> Option<&Entry<K, V>> {
        self.heap.first()
    }

    fn delete_min(&mut self) -> Option<Entry<K, V>> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let min = self.heap.pop();
        self.down_heap(0);
        min
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
