//! # ESP Utils
//!
//! Small generic helpers shared across the firmware and its host tools.
//!
//! ## Features
//!
//! - **Typesafe enums**: `typesafe_enum!` declares an open enumeration with
//!   name/value reflection (`stringify`, `parse`, `Display`, `FromStr`)
//! - **Multicast signals**: `Signal` fans an event out to every subscribed
//!   slot, synchronously and in subscription order; `SendSignal` can cross
//!   threads behind an external lock
//! - **Numeric helpers**: `clamp` and `map_value`
//! - **Markers**: `NonCopyable` and `NonMovable` field types
//!
//! ## Example
//!
//! ```rust,ignore
//! use esp_utils::prelude::*;
//!
//! typesafe_enum! {
//!     pub enum Mode: u8 {
//!         Idle,
//!         Running,
//!     }
//! }
//!
//! let mut mode_changed: Signal<Mode> = Signal::new();
//! mode_changed += |mode: &Mode| println!("mode is now {mode}");
//! mode_changed.emit(Mode::Running);
//! ```

mod marker;
mod num;
mod reflect;
mod signal;
mod slots;

pub use marker::{NonCopyable, NonMovable};
pub use num::{clamp, map_value};
pub use reflect::{EnumError, TypesafeEnum};
pub use signal::{SendSignal, SendTrySignal, Signal, TrySignal};
pub use slots::{SendSlot, SendTrySlot, Slot, TrySlot};

// Used by `typesafe_enum!` expansions.
#[doc(hidden)]
pub mod __private {
    pub use crate::reflect::{checked_from_repr, fmt_symbol, parse_symbol};
}

// Re-export the prelude
pub mod prelude {
    pub use crate::{
        clamp, map_value, typesafe_enum, NonCopyable, NonMovable, SendSignal, SendTrySignal,
        Signal, TrySignal, TypesafeEnum,
    };
}
