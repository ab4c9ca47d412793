/*!
# Generational Arena

Slot storage shared by all graph representations. Every slot carries a generation counter that
is bumped when the slot is freed; a handle is only accepted if its owner tag and generation
match. Freed slots are recycled through a free list, so [`Arena::bound`] stays close to the
peak number of live elements.

Live slots are additionally threaded onto an intrusive doubly linked list, which lets
[`Arena::handles`] report elements in insertion order even after slots were recycled.
*/

use std::marker::PhantomData;

use crate::{Edge, Vertex, utils::InstanceId};

const NIL: u32 = u32::MAX;

/// Handle types that can address an [`Arena`]
pub(crate) trait ArenaHandle: Copy {
    fn from_parts(owner: InstanceId, slot: u32, generation: u32) -> Self;
    fn owner(&self) -> InstanceId;
    fn slot(&self) -> u32;
    fn generation(&self) -> u32;
}

macro_rules! impl_arena_handle {
    ($($handle:ident),*) => {
        $(
            impl ArenaHandle for $handle {
                #[inline]
                fn from_parts(owner: InstanceId, slot: u32, generation: u32) -> Self {
                    Self { owner, slot, generation }
                }

                #[inline]
                fn owner(&self) -> InstanceId {
                    self.owner
                }

                #[inline]
                fn slot(&self) -> u32 {
                    self.slot
                }

                #[inline]
                fn generation(&self) -> u32 {
                    self.generation
                }
            }
        )*
    };
}

impl_arena_handle!(Vertex, Edge);

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
    prev: u32,
    next: u32,
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<H, T> {
    owner: InstanceId,
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    head: u32,
    tail: u32,
    len: u32,
    _handle: PhantomData<H>,
}

impl<H: ArenaHandle, T> Arena<H, T> {
    pub fn with_capacity(owner: InstanceId, capacity: usize) -> Self {
        Self {
            owner,
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
            _handle: PhantomData,
        }
    }

    /// Stores `value` in a free slot (or a new one) and appends it to the iteration order
    pub fn insert(&mut self, value: T) -> H {
        let slot = match self.free.pop() {
            Some(slot) => {
                let entry = &mut self.slots[slot as usize];
                debug_assert!(entry.value.is_none());
                entry.value = Some(value);
                entry.prev = self.tail;
                entry.next = NIL;
                slot
            }
            None => {
                let slot = self.slots.len() as u32;
                assert!(slot != NIL, "arena is full");
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(value),
                    prev: self.tail,
                    next: NIL,
                });
                slot
            }
        };

        if self.tail == NIL {
            self.head = slot;
        } else {
            self.slots[self.tail as usize].next = slot;
        }
        self.tail = slot;
        self.len += 1;

        H::from_parts(self.owner, slot, self.slots[slot as usize].generation)
    }

    /// Removes the element addressed by `handle` and invalidates all copies of the handle
    pub fn remove(&mut self, handle: H) -> Option<T> {
        let slot = self.live_slot(handle)?;
        let entry = &mut self.slots[slot as usize];

        let value = entry.value.take();
        entry.generation = entry.generation.wrapping_add(1);
        let (prev, next) = (entry.prev, entry.next);
        entry.prev = NIL;
        entry.next = NIL;

        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev as usize].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next as usize].prev = prev;
        }

        self.free.push(slot);
        self.len -= 1;
        value
    }

    pub fn get(&self, handle: H) -> Option<&T> {
        let slot = self.live_slot(handle)?;
        self.slots[slot as usize].value.as_ref()
    }

    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        let slot = self.live_slot(handle)?;
        self.slots[slot as usize].value.as_mut()
    }

    pub fn contains(&self, handle: H) -> bool {
        self.live_slot(handle).is_some()
    }

    /// Number of live elements
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Exclusive upper bound on the slots of all live handles
    pub fn bound(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Live handles in insertion order
    pub fn handles(&self) -> impl Iterator<Item = H> + '_ {
        self.iter().map(|(handle, _)| handle)
    }

    /// Live handles with their values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (H, &T)> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            if cursor == NIL {
                return None;
            }

            let slot = &self.slots[cursor as usize];
            let handle = H::from_parts(self.owner, cursor, slot.generation);
            cursor = slot.next;

            slot.value.as_ref().map(|value| (handle, value))
        })
    }

    fn live_slot(&self, handle: H) -> Option<u32> {
        if handle.owner() != self.owner {
            return None;
        }

        let slot = self.slots.get(handle.slot() as usize)?;
        (slot.generation == handle.generation() && slot.value.is_some()).then_some(handle.slot())
    }
}
