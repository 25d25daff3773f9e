#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Narrows 4 + 4 i64 lanes into 8 i32 lanes: `[A0, A1, A2, A3, B0, B1, B2, B3]`.
///
/// `vpshufd` only moves dwords within a 128-bit half, which would give
/// `[A0, A1, B0, B1, A2, A3, B2, B3]`. A cross-lane `vpermd` gathers the four low
/// dwords of each input first, and a blend takes the top half from `second`.
///
/// # Safety
///
/// Requires `avx2` target feature to be enabled.
#[target_feature(enable = "avx2")]
#[inline]
pub unsafe fn repack_epi64_to_epi32(first: __m256i, second: __m256i) -> __m256i {
    let low_dwords = _mm256_setr_epi32(0, 2, 4, 6, 0, 2, 4, 6);
    let first = _mm256_permutevar8x32_epi32(first, low_dwords);
    let second = _mm256_permutevar8x32_epi32(second, low_dwords);
    _mm256_blend_epi32(first, second, 0b1111_0000)
}
