#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::portable;
use lossless_colour_transform_common::intrinsics::lane_select::sse2::{
    non_negative_mask_epi32, select_si128,
};

/// SSE2 sign fold of 32-bit samples, 4 per iteration.
///
/// # Safety
///
/// Same as [`super::convert_sign_fold_i32`], and the CPU must support `sse2`.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn convert_sign_fold_i32(
    mut src: *const i32,
    mut dst: *mut i32,
    shift: i32,
    width: usize,
) {
    let vectorized = width & !3;
    let src_end = src.add(vectorized);
    let negated_shift = _mm_set1_epi32(shift.wrapping_neg());

    while src < src_end {
        let samples = _mm_loadu_si128(src as *const __m128i);
        let folded = _mm_sub_epi32(negated_shift, samples);
        let keep = non_negative_mask_epi32(samples);
        _mm_storeu_si128(dst as *mut __m128i, select_si128(keep, samples, folded));
        src = src.add(4);
        dst = dst.add(4);
    }

    portable::convert_sign_fold(src, dst, shift, width - vectorized);
}
