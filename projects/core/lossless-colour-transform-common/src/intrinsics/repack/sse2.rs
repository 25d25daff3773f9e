#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Narrows 2 + 2 i64 lanes into 4 i32 lanes: `[A0, A1, B0, B1]`.
///
/// # Safety
///
/// Requires `sse2` target feature to be enabled.
#[target_feature(enable = "sse2")]
#[inline]
pub unsafe fn repack_epi64_to_epi32(first: __m128i, second: __m128i) -> __m128i {
    // Gather the low dword of each qword into the bottom half: [x0, x1, x0, x1]
    let first = _mm_shuffle_epi32(first, 0b10_00_10_00);
    let second = _mm_shuffle_epi32(second, 0b10_00_10_00);
    _mm_unpacklo_epi64(first, second)
}
