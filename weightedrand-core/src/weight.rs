//! Integer weight types.
//!
//! Weights may be any primitive integer. Internally every weight is widened
//! into a single `u64` accumulator, so the overflow checks in
//! [`Chooser::new`](crate::Chooser::new) hold for every width and signedness.

use std::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// A primitive integer usable as a [`Choice`](crate::Choice) weight.
///
/// Sealed: only the primitive integer types implement it.
pub trait Weight: private::Sealed + Copy + Ord + Debug + Send + Sync + 'static {
    /// True for weights below zero. Such choices are kept but never picked.
    fn is_negative(self) -> bool;

    /// Widen a non-negative weight into the accumulator type.
    ///
    /// Returns `None` when the value does not fit in a `u64`. Only meaningful
    /// once [`is_negative`](Weight::is_negative) has returned false.
    fn to_total(self) -> Option<u64>;
}

macro_rules! impl_signed_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Weight for $t {
                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn to_total(self) -> Option<u64> {
                    u64::try_from(self).ok()
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Weight for $t {
                #[inline]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline]
                fn to_total(self) -> Option<u64> {
                    u64::try_from(self).ok()
                }
            }
        )*
    };
}

impl_signed_weight!(i8, i16, i32, i64, i128, isize);
impl_unsigned_weight!(u8, u16, u32, u64, u128, usize);
