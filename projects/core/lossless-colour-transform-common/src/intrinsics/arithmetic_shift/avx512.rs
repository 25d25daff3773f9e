#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::ArithmeticShiftRight;

/// Signed right shift of 4 x i64 lanes using the native AVX-512 `vpsraq` on 256-bit registers.
///
/// Needs no bias; the instruction sign-extends by itself.
#[derive(Debug, Clone, Copy)]
pub struct Avx512Srai64 {
    count: __m128i,
}

impl Avx512Srai64 {
    /// Creates the shift for a fixed `amount`.
    ///
    /// # Safety
    ///
    /// Requires `avx512f` and `avx512vl`. `amount` must be less than 64.
    #[inline(always)]
    pub unsafe fn new(amount: u32) -> Self {
        debug_assert!(amount < 64, "shift amount must be less than 64");
        Self {
            count: _mm_cvtsi32_si128(amount as i32),
        }
    }
}

impl ArithmeticShiftRight for Avx512Srai64 {
    type Lanes = __m256i;
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn shift_right(&self, value: __m256i) -> __m256i {
        _mm256_sra_epi64(value, self.count)
    }
}
