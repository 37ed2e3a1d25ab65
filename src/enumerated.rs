//! Conversion between enumerated types and their underlying representations.
use std::fmt::Debug;

use num_traits::{CheckedAdd, PrimInt};

/// An interface for tying an enumerated type to its underlying integral
/// representation.
///
/// The two conversions must be mutually consistent:
/// `Self::from_repr(v.to_repr())` must return `Some(v)` for every value `v` of
/// the implementing type, and [`None`] for every representation that names no
/// value. Representations that name no value are passed over during iteration,
/// so enumerations with gaps in their explicit values are walked correctly.
///
/// Identity implementations are provided for the primitive integer types, for
/// which every representation names a value.
///
/// # Examples
///
/// ```
/// use enumrange::Enumerated;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Season {
///     Spring,
///     Summer,
///     Autumn,
///     Winter,
/// }
///
/// impl Enumerated for Season {
///     type Repr = u8;
///
///     fn to_repr(self) -> u8 {
///         self as u8
///     }
///
///     fn from_repr(repr: u8) -> Option<Self> {
///         match repr {
///             0 => Some(Self::Spring),
///             1 => Some(Self::Summer),
///             2 => Some(Self::Autumn),
///             3 => Some(Self::Winter),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Season::Autumn.to_repr(), 2);
/// assert_eq!(Season::from_repr(1), Some(Season::Summer));
/// assert_eq!(Season::from_repr(9), None);
/// ```
pub trait Enumerated: Copy + Eq {
    /// Underlying integral representation.
    type Repr: PrimInt + CheckedAdd + Debug;

    /// Converts the value into its underlying representation.
    fn to_repr(self) -> Self::Repr;

    /// Converts a representation back into a value, or [`None`] if `repr`
    /// names no value of the type.
    fn from_repr(repr: Self::Repr) -> Option<Self>;
}

macro_rules! common_def {
    ($int:ident) => {
        impl Enumerated for $int {
            type Repr = $int;

            #[inline(always)]
            fn to_repr(self) -> Self::Repr {
                self
            }

            #[inline(always)]
            fn from_repr(repr: Self::Repr) -> Option<Self> {
                Some(repr)
            }
        }
    };
}

common_def!(u8);
common_def!(u16);
common_def!(u32);
common_def!(u64);
common_def!(usize);
common_def!(i8);
common_def!(i16);
common_def!(i32);
common_def!(i64);
common_def!(isize);
