//! Ordered, append-only storage for signal slots.
//!
//! Slots are boxed and kept in subscription order. There is no removal: a
//! slot lives until the list that owns it is dropped.

use std::fmt;

/// A slot of a [`Signal`](crate::Signal): a callable taking a reference to the
/// signal's arguments. It may mutate its own captures.
pub type Slot<'a, Args> = Box<dyn FnMut(&Args) + 'a>;

/// A slot of a [`SendSignal`](crate::SendSignal).
pub type SendSlot<'a, Args> = Box<dyn FnMut(&Args) + Send + 'a>;

/// A slot of a [`TrySignal`](crate::TrySignal) that may abort dispatch.
pub type TrySlot<'a, Args, E> = Box<dyn FnMut(&Args) -> Result<(), E> + 'a>;

/// A slot of a [`SendTrySignal`](crate::SendTrySignal).
pub type SendTrySlot<'a, Args, E> = Box<dyn FnMut(&Args) -> Result<(), E> + Send + 'a>;

/// The registry behind every signal type.
///
/// `S` is the (usually unsized) callable type being stored.
pub(crate) struct SlotList<S: ?Sized> {
    slots: Vec<Box<S>>,
}

impl<S: ?Sized> SlotList<S> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create an empty list with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Append a slot after every existing one.
    pub fn push(&mut self, slot: Box<S>) {
        self.slots.push(slot);
    }

    /// Iterate the slots in subscription order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut S> + '_ {
        self.slots.iter_mut().map(|slot| &mut **slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<S: ?Sized> Default for SlotList<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> fmt::Debug for SlotList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotList")
            .field("len", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut list: SlotList<dyn Fn() -> u32> = SlotList::new();
        list.push(Box::new(|| 1));
        list.push(Box::new(|| 2));
        list.push(Box::new(|| 3));

        let results: Vec<u32> = list.iter_mut().map(|slot| slot()).collect();
        assert_eq!(results, vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_empty_list() {
        let mut list: SlotList<dyn Fn()> = SlotList::with_capacity(4);
        assert!(list.is_empty());
        assert_eq!(list.iter_mut().count(), 0);
        assert_eq!(format!("{:?}", list), "SlotList { len: 0 }");
    }

    #[test]
    fn test_stateful_slots_keep_their_state() {
        let mut list: SlotList<dyn FnMut() -> u32> = SlotList::new();
        let mut calls = 0;
        list.push(Box::new(move || {
            calls += 1;
            calls
        }));

        for expected in 1..=3 {
            let results: Vec<u32> = list.iter_mut().map(|slot| slot()).collect();
            assert_eq!(results, vec![expected]);
        }
    }

    #[test]
    fn test_duplicate_slots_are_kept() {
        let mut list: SlotList<dyn Fn() -> &'static str> = SlotList::default();
        let slot = || "same";
        list.push(Box::new(slot));
        list.push(Box::new(slot));
        assert_eq!(list.len(), 2);
    }
}
