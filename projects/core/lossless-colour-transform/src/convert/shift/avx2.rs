#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::portable;

/// AVX2 level shift of 32-bit samples, 8 per iteration.
///
/// # Safety
///
/// Same as [`super::convert_shift_i32`], and the CPU must support `avx2`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn convert_shift_i32(
    mut src: *const i32,
    mut dst: *mut i32,
    shift: i32,
    width: usize,
) {
    let vectorized = width & !7;
    let src_end = src.add(vectorized);
    let shift_v = _mm256_set1_epi32(shift);

    while src < src_end {
        let samples = _mm256_loadu_si256(src as *const __m256i);
        _mm256_storeu_si256(dst as *mut __m256i, _mm256_add_epi32(samples, shift_v));
        src = src.add(8);
        dst = dst.add(8);
    }

    portable::convert_shift(src, dst, shift, width - vectorized);
}

/// AVX2 level shift of 64-bit samples, 4 per iteration.
///
/// # Safety
///
/// Same as [`super::convert_shift_i64`], and the CPU must support `avx2`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn convert_shift_i64(
    mut src: *const i64,
    mut dst: *mut i64,
    shift: i64,
    width: usize,
) {
    let vectorized = width & !3;
    let src_end = src.add(vectorized);
    let shift_v = _mm256_set1_epi64x(shift);

    while src < src_end {
        let samples = _mm256_loadu_si256(src as *const __m256i);
        _mm256_storeu_si256(dst as *mut __m256i, _mm256_add_epi64(samples, shift_v));
        src = src.add(4);
        dst = dst.add(4);
    }

    portable::convert_shift(src, dst, shift, width - vectorized);
}
