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
/// Requires `sse2` target feature to be enabled.
#[target_feature(enable = "sse2")]
#[inline]
pub unsafe fn select_si128(mask: __m128i, if_set: __m128i, if_clear: __m128i) -> __m128i {
    let kept = _mm_and_si128(mask, if_set);
    let other = _mm_andnot_si128(mask, if_clear);
    _mm_or_si128(kept, other)
}

/// Mask of 4 x i32 lanes: all ones where the lane is `>= 0`.
///
/// # Safety
///
/// Requires `sse2` target feature to be enabled.
#[target_feature(enable = "sse2")]
#[inline]
pub unsafe fn non_negative_mask_epi32(value: __m128i) -> __m128i {
    let zero = _mm_setzero_si128();
    let positive = _mm_cmpgt_epi32(value, zero);
    let is_zero = _mm_cmpeq_epi32(value, zero);
    _mm_or_si128(positive, is_zero)
}
