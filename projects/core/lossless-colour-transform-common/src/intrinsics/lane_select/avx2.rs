#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Picks `if_set` lanes where `mask` is all ones and `if_clear` lanes where it is all zeros.
///
/// Bitwise, so it works for any lane width.
///
/// # Safety
///
/// Requires `avx2` target feature to be enabled.
#[target_feature(enable = "avx2")]
#[inline]
pub unsafe fn select_si256(mask: __m256i, if_set: __m256i, if_clear: __m256i) -> __m256i {
    let kept = _mm256_and_si256(mask, if_set);
    let other = _mm256_andnot_si256(mask, if_clear);
    _mm256_or_si256(kept, other)
}

/// Mask of 8 x i32 lanes: all ones where the lane is `>= 0`.
///
/// # Safety
///
/// Requires `avx2` target feature to be enabled.
#[target_feature(enable = "avx2")]
#[inline]
pub unsafe fn non_negative_mask_epi32(value: __m256i) -> __m256i {
    let zero = _mm256_setzero_si256();
    let positive = _mm256_cmpgt_epi32(value, zero);
    let is_zero = _mm256_cmpeq_epi32(value, zero);
    _mm256_or_si256(positive, is_zero)
}

/// Mask of 4 x i64 lanes: all ones where the lane is `>= 0`.
///
/// # Safety
///
/// Requires `avx2` target feature to be enabled.
#[target_feature(enable = "avx2")]
#[inline]
pub unsafe fn non_negative_mask_epi64(value: __m256i) -> __m256i {
    let zero = _mm256_setzero_si256();
    let positive = _mm256_cmpgt_epi64(value, zero);
    let is_zero = _mm256_cmpeq_epi64(value, zero);
    _mm256_or_si256(positive, is_zero)
}
