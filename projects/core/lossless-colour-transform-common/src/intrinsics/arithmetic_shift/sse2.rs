#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::{sign_bias_64, ArithmeticShiftRight};

/// Signed right shift of 2 x i64 lanes for SSE2, which only has `psrlq`.
#[derive(Debug, Clone, Copy)]
pub struct Sse2EmulatedSrai64 {
    count: __m128i,
    bias: __m128i,
}

impl Sse2EmulatedSrai64 {
    /// Creates the shift for a fixed `amount`.
    ///
    /// # Safety
    ///
    /// Requires `sse2`. `amount` must be less than 64.
    #[inline(always)]
    pub unsafe fn new(amount: u32) -> Self {
        debug_assert!(amount < 64, "shift amount must be less than 64");
        Self {
            count: _mm_cvtsi32_si128(amount as i32),
            bias: _mm_set1_epi64x(sign_bias_64(amount)),
        }
    }
}

impl ArithmeticShiftRight for Sse2EmulatedSrai64 {
    type Lanes = __m128i;
    const LANES: usize = 2;

    #[inline(always)]
    unsafe fn shift_right(&self, value: __m128i) -> __m128i {
        let shifted = _mm_srl_epi64(value, self.count);
        let flipped = _mm_xor_si128(shifted, self.bias);
        _mm_sub_epi64(flipped, self.bias)
    }
}
