//! Zero-sized markers that opt a type out of copying or moving.
//!
//! Rust values are move-only and not `Clone` unless a type says otherwise, so
//! these markers exist to make the intent explicit and to stop a later
//! `#[derive(Clone, Copy)]` from compiling.

use std::fmt;
use std::marker::{PhantomData, PhantomPinned};

/// A field type that is neither `Clone` nor `Copy`.
///
/// Embedding it in a struct makes `#[derive(Clone)]` or `#[derive(Copy)]` on
/// that struct a compile error.
///
/// ```rust,ignore
/// struct Device {
///     handle: u32,
///     _no_copy: NonCopyable,
/// }
/// ```
#[derive(Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonCopyable(PhantomData<()>);

impl NonCopyable {
    /// Creates a new `NonCopyable` marker.
    #[inline(always)]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl fmt::Debug for NonCopyable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NonCopyable")
    }
}

/// A field type that makes its owner `!Unpin`.
///
/// Once the owner is pinned (`Box::pin`, `std::pin::pin!`) it can no longer be
/// moved out of its location. Also neither `Clone` nor `Copy`.
#[derive(Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonMovable {
    _copy: NonCopyable,
    _pin: PhantomPinned,
}

impl NonMovable {
    /// Creates a new `NonMovable` marker.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            _copy: NonCopyable::new(),
            _pin: PhantomPinned,
        }
    }
}

impl fmt::Debug for NonMovable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NonMovable")
    }
}
