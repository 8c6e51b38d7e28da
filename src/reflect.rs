//! Declarative enumerations with name/value reflection.
//!
//! [`typesafe_enum!`](crate::typesafe_enum!) turns an ordered list of symbol
//! names into an *open* enumeration: a transparent newtype over the declared
//! integer representation with one associated constant per symbol, plus a
//! static `(name, value)` table. Every integer of the representation is a
//! valid value, so an undeclared one (say, read from a register) can be held
//! and printed as `Unknown Name(n)` instead of being undefined behavior.
//!
//! ```rust,ignore
//! use esp_utils::prelude::*;
//!
//! typesafe_enum! {
//!     /// Status LED colors.
//!     pub enum Color: u8 {
//!         Red,
//!         Green,
//!         Blue,
//!     }
//! }
//!
//! assert_eq!(Color::parse("Green"), Some(Color::Green));
//! assert_eq!(Color::Green.to_string(), "Green");
//! assert_eq!(Color::parse("Purple"), None);
//! assert_eq!(Color::from_repr(99).to_string(), "Unknown Color(99)");
//! ```

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Errors from the checked conversions generated by
/// [`typesafe_enum!`](crate::typesafe_enum!).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// Text did not match any declared symbol.
    #[error("unknown {type_name} symbol '{name}'")]
    UnknownName {
        /// Name of the enumeration type
        type_name: &'static str,
        /// The rejected text
        name: String,
    },

    /// An integer did not match any declared value.
    #[error("unknown {type_name} value {value}")]
    UnknownValue {
        /// Name of the enumeration type
        type_name: &'static str,
        /// The rejected value, in decimal
        value: String,
    },
}

/// Reflection over an enumeration declared with
/// [`typesafe_enum!`](crate::typesafe_enum!).
///
/// The macro supplies the constants and conversions; the lookups are provided
/// here and all walk [`VARIANTS`](TypesafeEnum::VARIANTS) in declaration order.
pub trait TypesafeEnum: Copy + Eq + 'static {
    /// The underlying integer type.
    type Repr: Copy + fmt::Display;

    /// Name of the enumeration type, used in fallback text and errors.
    const TYPE_NAME: &'static str;

    /// Declared symbols and their values, in declaration order.
    const VARIANTS: &'static [(&'static str, Self)];

    /// Wrap an underlying integer without checking it is declared.
    fn from_repr(raw: Self::Repr) -> Self;

    /// Get the underlying integer.
    fn to_repr(self) -> Self::Repr;

    /// Get the declared symbol name for this value, if any.
    ///
    /// If several symbols share the value, the first declared one wins.
    fn name(self) -> Option<&'static str> {
        Self::VARIANTS
            .iter()
            .find(|(_, value)| *value == self)
            .map(|(name, _)| *name)
    }

    /// Get the symbol name, or `Unknown <TypeName>(<n>)` for undeclared values.
    fn stringify(self) -> Cow<'static, str> {
        match self.name() {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("Unknown {}({})", Self::TYPE_NAME, self.to_repr())),
        }
    }

    /// Look up a value by exact, case-sensitive symbol name.
    ///
    /// If several symbols share the name, the first declared one wins.
    fn parse(text: &str) -> Option<Self> {
        let found = Self::VARIANTS
            .iter()
            .find(|(name, _)| *name == text)
            .map(|(_, value)| *value);
        if found.is_none() {
            tracing::trace!(type_name = Self::TYPE_NAME, text, "no matching symbol");
        }
        found
    }

    /// Check whether this value has a declared symbol.
    fn is_known(self) -> bool {
        self.name().is_some()
    }

    /// Iterate the declared values in declaration order.
    fn variants() -> impl Iterator<Item = Self> {
        Self::VARIANTS.iter().map(|(_, value)| *value)
    }
}

/// Write the symbol name of `value`, or its fallback text.
///
/// Backs the generated `Display` and `Debug` impls.
#[doc(hidden)]
pub fn fmt_symbol<E: TypesafeEnum>(value: E, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(&value.stringify())
}

#[doc(hidden)]
pub fn parse_symbol<E: TypesafeEnum>(text: &str) -> Result<E, EnumError> {
    E::parse(text).ok_or_else(|| EnumError::UnknownName {
        type_name: E::TYPE_NAME,
        name: text.to_owned(),
    })
}

#[doc(hidden)]
pub fn checked_from_repr<E: TypesafeEnum>(raw: E::Repr) -> Result<E, EnumError> {
    let value = E::from_repr(raw);
    if value.is_known() {
        Ok(value)
    } else {
        Err(EnumError::UnknownValue {
            type_name: E::TYPE_NAME,
            value: raw.to_string(),
        })
    }
}

/// Declare an open enumeration with name/value reflection.
///
/// ```rust,ignore
/// typesafe_enum! {
///     #[doc = "Power states."]
///     pub enum PowerState: i8 {
///         Off,          // 0
///         Standby,      // 1
///         On = 10,      // 10
///         Boost,        // 11
///     }
/// }
/// ```
///
/// Values follow the rules of native enum discriminants: they count up from
/// 0 in declaration order, `= value` sets the value of that symbol and the
/// count continues from it, and two symbols may not share a value. `Repr`
/// must be a primitive integer type. The generated type is a
/// `#[repr(transparent)]` newtype with:
///
/// - one associated constant per symbol, usable in `match` patterns
/// - `const fn from_repr` / `const fn to_repr`
/// - [`TypesafeEnum`], `Display`, `Debug`, `FromStr`, `From<Self> for Repr`
///   and `TryFrom<Repr>`
///
/// `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd` and `Ord` are
/// derived, so do not derive them again in the attributes.
#[macro_export]
macro_rules! typesafe_enum {
    (
        @define [$(#[$meta:meta])*] [$vis:vis] $name:ident $repr:ident $symbols:tt {
            $($(#[$vmeta:meta])* $variant:ident $(= $value:expr)?),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        $vis struct $name($repr);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: Self = {
                    // Native discriminant rules assign the values.
                    #[allow(dead_code)]
                    #[repr($repr)]
                    enum Discriminant $symbols
                    Self(Discriminant::$variant as $repr)
                };
            )*

            /// Wrap an underlying integer without checking it is declared.
            #[inline]
            pub const fn from_repr(raw: $repr) -> Self {
                Self(raw)
            }

            /// Get the underlying integer.
            #[inline]
            pub const fn to_repr(self) -> $repr {
                self.0
            }
        }

        impl $crate::TypesafeEnum for $name {
            type Repr = $repr;

            const TYPE_NAME: &'static str = stringify!($name);

            const VARIANTS: &'static [(&'static str, Self)] =
                &[$((stringify!($variant), Self::$variant)),*];

            #[inline]
            fn from_repr(raw: $repr) -> Self {
                Self(raw)
            }

            #[inline]
            fn to_repr(self) -> $repr {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::__private::fmt_symbol(*self, f)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::__private::fmt_symbol(*self, f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::EnumError;

            fn from_str(text: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::__private::parse_symbol(text)
            }
        }

        impl ::std::convert::From<$name> for $repr {
            #[inline]
            fn from(value: $name) -> $repr {
                value.0
            }
        }

        impl ::std::convert::TryFrom<$repr> for $name {
            type Error = $crate::EnumError;

            fn try_from(raw: $repr) -> ::std::result::Result<Self, Self::Error> {
                $crate::__private::checked_from_repr(raw)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident { $($body:tt)* }
    ) => {
        $crate::typesafe_enum!(
            @define [$(#[$meta])*] [$vis] $name $repr { $($body)* } { $($body)* }
        );
    };
}
