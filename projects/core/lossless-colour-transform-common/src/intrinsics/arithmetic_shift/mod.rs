//! # Signed Right Shift on 64-bit Lanes
//!
//! The reversible colour transform divides by 4 with floor rounding, i.e. an arithmetic
//! right shift. At 32-bit width every vector ISA has one. At 64-bit width SSE2 and AVX2
//! only offer a *logical* shift (`psrlq`); a native `vpsraq` arrives with AVX-512.
//!
//! The missing instruction is emulated with a bias constant `m = 1 << (63 - k)`:
//!
//! ```text
//! x      = a >>> k          // logical, shifts in zeroes
//! result = (x ^ m) - m      // re-extends the sign bit that landed at bit (63 - k)
//! ```
//!
//! After the logical shift the original sign bit sits at bit `63 - k` and everything above
//! it is zero. XOR with `m` flips that bit, and subtracting `m` then borrows through the
//! upper bits exactly when the sign bit was set, which is sign extension.
//!
//! [`ArithmeticShiftRight`] hides which strategy is used, so a kernel written against it
//! runs unchanged on hardware that does have a native 64-bit arithmetic shift.
//!
//! ## Implementations
//!
//! - [`portable::EmulatedSrai64`] - scalar bias trick, the reference form
//! - [`sse2::Sse2EmulatedSrai64`] - 2 lanes, SSE2 logical shift + bias
//! - [`avx2::Avx2EmulatedSrai64`] - 4 lanes, AVX2 logical shift + bias
//! - [`avx512::Avx512Srai64`] - 4 lanes, native AVX-512F/VL shift (requires `nightly` feature)

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod avx2;

#[cfg(feature = "nightly")]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod avx512;

/// A lane-wise signed right shift by an amount fixed at construction.
///
/// Constructing an implementation precomputes whatever it needs for the amount (shift count
/// register, bias constant), so applying it inside a row loop costs only the shift itself.
pub trait ArithmeticShiftRight {
    /// The register (or scalar) type the shift operates on.
    type Lanes: Copy;

    /// Number of 64-bit lanes in [`Self::Lanes`].
    const LANES: usize;

    /// Shifts every lane of `value` right, rounding towards negative infinity.
    ///
    /// # Safety
    ///
    /// The CPU must support the instruction set the implementation is written for.
    unsafe fn shift_right(&self, value: Self::Lanes) -> Self::Lanes;
}

/// Computes the bias constant `1 << (63 - amount)` used to sign-extend a logically
/// shifted 64-bit lane.
///
/// `amount` must be less than 64.
#[inline(always)]
pub const fn sign_bias_64(amount: u32) -> i64 {
    debug_assert!(amount < 64);
    (1u64 << (63 - amount)) as i64
}
