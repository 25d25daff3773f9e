#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::portable;
use lossless_colour_transform_common::intrinsics::lane_select::avx2::{
    non_negative_mask_epi32, non_negative_mask_epi64, select_si256,
};

/// AVX2 sign fold of 32-bit samples, 8 per iteration.
///
/// # Safety
///
/// Same as [`super::convert_sign_fold_i32`], and the CPU must support `avx2`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn convert_sign_fold_i32(
    mut src: *const i32,
    mut dst: *mut i32,
    shift: i32,
    width: usize,
) {
    let vectorized = width & !7;
    let src_end = src.add(vectorized);
    let negated_shift = _mm256_set1_epi32(shift.wrapping_neg());

    while src < src_end {
        let samples = _mm256_loadu_si256(src as *const __m256i);
        let folded = _mm256_sub_epi32(negated_shift, samples);
        let keep = non_negative_mask_epi32(samples);
        _mm256_storeu_si256(dst as *mut __m256i, select_si256(keep, samples, folded));
        src = src.add(8);
        dst = dst.add(8);
    }

    portable::convert_sign_fold(src, dst, shift, width - vectorized);
}

/// AVX2 sign fold of 64-bit samples, 4 per iteration.
///
/// # Safety
///
/// Same as [`super::convert_sign_fold_i64`], and the CPU must support `avx2`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn convert_sign_fold_i64(
    mut src: *const i64,
    mut dst: *mut i64,
    shift: i64,
    width: usize,
) {
    let vectorized = width & !3;
    let src_end = src.add(vectorized);
    let negated_shift = _mm256_set1_epi64x(shift.wrapping_neg());

    while src < src_end {
        let samples = _mm256_loadu_si256(src as *const __m256i);
        let folded = _mm256_sub_epi64(negated_shift, samples);
        let keep = non_negative_mask_epi64(samples);
        _mm256_storeu_si256(dst as *mut __m256i, select_si256(keep, samples, folded));
        src = src.add(4);
        dst = dst.add(4);
    }

    portable::convert_sign_fold(src, dst, shift, width - vectorized);
}
