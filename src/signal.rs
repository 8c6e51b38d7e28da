//! Multicast signals: ordered, synchronous fan-out to subscribed slots.

use crate::slots::{SendSlot, SendTrySlot, Slot, SlotList, TrySlot};
use std::fmt;
use std::ops::AddAssign;

// The plain and `Send` flavors differ only in the bound on the stored slots.
macro_rules! define_signal {
    (
        $(#[$meta:meta])*
        $name:ident, $slot:ident, [$($send:tt)*]
    ) => {
        $(#[$meta])*
        pub struct $name<'a, Args: ?Sized = ()> {
            slots: SlotList<dyn FnMut(&Args) $($send)* + 'a>,
        }

        impl<'a, Args: ?Sized> $name<'a, Args> {
            /// Create a signal with no slots.
            pub fn new() -> Self {
                Self {
                    slots: SlotList::new(),
                }
            }

            /// Create a signal with room for `capacity` slots.
            pub fn with_capacity(capacity: usize) -> Self {
                Self {
                    slots: SlotList::with_capacity(capacity),
                }
            }

            /// Append a slot after all existing ones.
            ///
            /// No handle is returned; the slot stays registered for the
            /// lifetime of the signal.
            pub fn subscribe(&mut self, slot: impl FnMut(&Args) $($send)* + 'a) {
                self.subscribe_boxed(Box::new(slot));
            }

            /// Append an already boxed slot.
            pub fn subscribe_boxed(&mut self, slot: $slot<'a, Args>) {
                self.slots.push(slot);
                tracing::trace!(slots = self.slots.len(), "slot subscribed");
            }

            /// Call every slot once, in subscription order, with `args`.
            ///
            /// Returns only after the last slot has returned. `invoke` borrows
            /// the signal mutably for the whole dispatch, so a slot cannot
            /// subscribe to the signal it is called from; a signal kept in a
            /// `RefCell` panics with a borrow error if a slot tries.
            ///
            /// # Panics
            ///
            /// A panicking slot unwinds straight out of `invoke`. Slots
            /// subscribed before it have run; slots after it are not called.
            pub fn invoke(&mut self, args: &Args) {
                tracing::trace!(slots = self.slots.len(), "invoking signal");
                for slot in self.slots.iter_mut() {
                    slot(args);
                }
            }

            /// Get the number of subscribed slots.
            pub fn len(&self) -> usize {
                self.slots.len()
            }

            /// Check whether no slot is subscribed.
            pub fn is_empty(&self) -> bool {
                self.slots.is_empty()
            }
        }

        impl<'a, Args> $name<'a, Args> {
            /// Invoke the signal with an owned argument value.
            pub fn emit(&mut self, args: Args) {
                self.invoke(&args);
            }
        }

        impl<'a, Args: ?Sized> Default for $name<'a, Args> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<'a, Args: ?Sized> fmt::Debug for $name<'a, Args> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("slots", &self.slots.len())
                    .finish()
            }
        }

        // `signal += slot` subscribes.
        impl<'a, Args: ?Sized, F> AddAssign<F> for $name<'a, Args>
        where
            F: FnMut(&Args) $($send)* + 'a,
        {
            fn add_assign(&mut self, slot: F) {
                self.subscribe(slot);
            }
        }
    };
}

macro_rules! define_try_signal {
    (
        $(#[$meta:meta])*
        $name:ident, $slot:ident, [$($send:tt)*]
    ) => {
        $(#[$meta])*
        pub struct $name<'a, Args: ?Sized, E> {
            slots: SlotList<dyn FnMut(&Args) -> Result<(), E> $($send)* + 'a>,
        }

        impl<'a, Args: ?Sized, E> $name<'a, Args, E> {
            /// Create a signal with no slots.
            pub fn new() -> Self {
                Self {
                    slots: SlotList::new(),
                }
            }

            /// Append a slot after all existing ones.
            pub fn subscribe(&mut self, slot: impl FnMut(&Args) -> Result<(), E> $($send)* + 'a) {
                self.subscribe_boxed(Box::new(slot));
            }

            /// Append an already boxed slot.
            pub fn subscribe_boxed(&mut self, slot: $slot<'a, Args, E>) {
                self.slots.push(slot);
                tracing::trace!(slots = self.slots.len(), "fallible slot subscribed");
            }

            /// Call every slot in subscription order until one fails.
            ///
            /// Returns `Ok(())` if all slots succeeded, otherwise the first error.
            pub fn try_invoke(&mut self, args: &Args) -> Result<(), E> {
                let total = self.slots.len();
                tracing::trace!(slots = total, "invoking fallible signal");
                for (index, slot) in self.slots.iter_mut().enumerate() {
                    if let Err(err) = slot(args) {
                        tracing::debug!(index, slots = total, "slot failed, dispatch aborted");
                        return Err(err);
                    }
                }
                Ok(())
            }

            /// Get the number of subscribed slots.
            pub fn len(&self) -> usize {
                self.slots.len()
            }

            /// Check whether no slot is subscribed.
            pub fn is_empty(&self) -> bool {
                self.slots.is_empty()
            }
        }

        impl<'a, Args, E> $name<'a, Args, E> {
            /// Invoke the signal with an owned argument value.
            pub fn try_emit(&mut self, args: Args) -> Result<(), E> {
                self.try_invoke(&args)
            }
        }

        impl<'a, Args: ?Sized, E> Default for $name<'a, Args, E> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<'a, Args: ?Sized, E> fmt::Debug for $name<'a, Args, E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("slots", &self.slots.len())
                    .finish()
            }
        }

        impl<'a, Args: ?Sized, E, F> AddAssign<F> for $name<'a, Args, E>
        where
            F: FnMut(&Args) -> Result<(), E> $($send)* + 'a,
        {
            fn add_assign(&mut self, slot: F) {
                self.subscribe(slot);
            }
        }
    };
}

define_signal! {
    /// A multicast event dispatcher.
    ///
    /// A `Signal` owns an ordered list of slots, each a callable taking
    /// `&Args`. [`invoke`](Signal::invoke) calls every slot once, in
    /// subscription order, with the same arguments. Slots can only be added,
    /// never removed; they are dropped together with the signal. Slots are
    /// `FnMut`, so a `move` closure may keep and update its own state.
    ///
    /// Multiple arguments are passed as a tuple, e.g. `Signal<(u32, String)>`.
    /// The lifetime `'a` bounds anything slots borrow, so a slot can never
    /// outlive the data it captured by reference.
    ///
    /// Slots need not be `Send`, so a `Signal` stays on its thread. Use
    /// [`SendSignal`] to move a signal between threads or share it behind a
    /// mutex.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use esp_utils::prelude::*;
    ///
    /// let mut pressed: Signal<u8> = Signal::new();
    /// pressed.subscribe(|button| println!("button {button} pressed"));
    /// let mut presses = 0;
    /// pressed += move |_: &u8| presses += 1;
    /// pressed.emit(3);
    /// ```
    Signal, Slot, []
}

define_signal! {
    /// A [`Signal`] whose slots are `Send`.
    ///
    /// The signal itself is then `Send`: it can be owned by a component that
    /// moves to another thread, or wrapped in a `Mutex` so several threads
    /// can subscribe and invoke. The signal does no locking of its own.
    SendSignal, SendSlot, [+ Send]
}

define_try_signal! {
    /// A multicast dispatcher whose slots can fail.
    ///
    /// Like [`Signal`], but each slot returns `Result<(), E>`.
    /// [`try_invoke`](TrySignal::try_invoke) stops at the first error and
    /// hands it back to the caller; later slots do not run for that call.
    TrySignal, TrySlot, []
}

define_try_signal! {
    /// A [`TrySignal`] whose slots are `Send`.
    SendTrySignal, SendTrySlot, [+ Send]
}
