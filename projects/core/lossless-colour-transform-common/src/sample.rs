//! Sample widths rows are stored at.
//!
//! Rows are stored either at native 32-bit width or widened to 64 bits so that the
//! intermediate sums of the colour transform cannot overflow at high bit depths.
//! [`Sample`] abstracts over both, so every scalar kernel is written once and
//! instantiated per width.
//!
//! All arithmetic wraps, matching the lane arithmetic of the SIMD kernels bit for bit.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, Not};

mod private {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// A signed integer sample at one of the supported storage widths (`i32` or `i64`).
pub trait Sample:
    private::Sealed
    + Copy
    + Default
    + Debug
    + Eq
    + Ord
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + 'static
{
    /// Width of the sample in bits.
    const BITS: u32;

    /// The zero sample.
    const ZERO: Self;

    /// Two's complement addition, wrapping on overflow.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Two's complement subtraction, wrapping on overflow.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Two's complement negation, wrapping on overflow (`MIN` stays `MIN`).
    fn wrapping_neg(self) -> Self;

    /// Arithmetic right shift, i.e. floor division by `2^amount`.
    ///
    /// `amount` must be less than [`Self::BITS`].
    fn shr_floor(self, amount: u32) -> Self;

    /// Sign-extends a 32-bit sample to this width.
    fn from_i32(value: i32) -> Self;

    /// Keeps the low 32 bits of the sample, discarding the high half of widened samples.
    fn low_i32(self) -> i32;

    /// Returns a sample with all bits set when `condition` holds, all bits clear otherwise.
    fn mask(condition: bool) -> Self;
}

macro_rules! impl_sample {
    ($ty:ty) => {
        impl Sample for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                <$ty>::wrapping_neg(self)
            }

            #[inline(always)]
            fn shr_floor(self, amount: u32) -> Self {
                debug_assert!(amount < Self::BITS, "shift amount out of range");
                self >> amount
            }

            #[inline(always)]
            fn from_i32(value: i32) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn low_i32(self) -> i32 {
                self as i32
            }

            #[inline(always)]
            fn mask(condition: bool) -> Self {
                (condition as $ty).wrapping_neg()
            }
        }
    };
}

impl_sample!(i32);
impl_sample!(i64);
