#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::{sign_bias_64, ArithmeticShiftRight};

/// Signed right shift of 4 x i64 lanes for AVX2, which only has `vpsrlq`.
///
/// Same trick libdivide uses for its AVX2 64-bit signed shift: logical shift, then
/// `(x ^ m) - m` with `m = 1 << (63 - amount)`.
#[derive(Debug, Clone, Copy)]
pub struct Avx2EmulatedSrai64 {
    count: __m128i,
    bias: __m256i,
}

impl Avx2EmulatedSrai64 {
    /// Creates the shift for a fixed `amount`.
    ///
    /// # Safety
    ///
    /// Requires `avx2`. `amount` must be less than 64.
    #[inline(always)]
    pub unsafe fn new(amount: u32) -> Self {
        debug_assert!(amount < 64, "shift amount must be less than 64");
        Self {
            count: _mm_cvtsi32_si128(amount as i32),
            bias: _mm256_set1_epi64x(sign_bias_64(amount)),
        }
    }
}

impl ArithmeticShiftRight for Avx2EmulatedSrai64 {
    type Lanes = __m256i;
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn shift_right(&self, value: __m256i) -> __m256i {
        let shifted = _mm256_srl_epi64(value, self.count);
        let flipped = _mm256_xor_si256(shifted, self.bias);
        _mm256_sub_epi64(flipped, self.bias)
    }
}
