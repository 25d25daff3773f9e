#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::portable;

/// SSE2 level shift of 32-bit samples, 4 per iteration.
///
/// # Safety
///
/// Same as [`super::convert_shift_i32`], and the CPU must support `sse2`.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn convert_shift_i32(
    mut src: *const i32,
    mut dst: *mut i32,
    shift: i32,
    width: usize,
) {
    let vectorized = width & !3;
    let src_end = src.add(vectorized);
    let shift_v = _mm_set1_epi32(shift);

    while src < src_end {
        let samples = _mm_loadu_si128(src as *const __m128i);
        _mm_storeu_si128(dst as *mut __m128i, _mm_add_epi32(samples, shift_v));
        src = src.add(4);
        dst = dst.add(4);
    }

    portable::convert_shift(src, dst, shift, width - vectorized);
}

/// SSE2 level shift of 64-bit samples, 2 per iteration.
///
/// # Safety
///
/// Same as [`super::convert_shift_i64`], and the CPU must support `sse2`.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn convert_shift_i64(
    mut src: *const i64,
    mut dst: *mut i64,
    shift: i64,
    width: usize,
) {
    let vectorized = width & !1;
    let src_end = src.add(vectorized);
    let shift_v = _mm_set1_epi64x(shift);

    while src < src_end {
        let samples = _mm_loadu_si128(src as *const __m128i);
        _mm_storeu_si128(dst as *mut __m128i, _mm_add_epi64(samples, shift_v));
        src = src.add(2);
        dst = dst.add(2);
    }

    portable::convert_shift(src, dst, shift, width - vectorized);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(convert_shift_i32, "sse2")]
    fn sse2_i32_unaligned(#[case] convert_fn: ConvertFn<i32>, #[case] impl_name: &str) {
        if !has_sse2() {
            return;
        }

        run_convert_unaligned_test(convert_fn, portable::convert_shift, 1000, 11, impl_name);
        run_convert_unaligned_test(convert_fn, portable::convert_shift, -32768, 11, impl_name);
    }

    #[rstest]
    #[case(convert_shift_i64, "sse2")]
    fn sse2_i64_unaligned(#[case] convert_fn: ConvertFn<i64>, #[case] impl_name: &str) {
        if !has_sse2() {
            return;
        }

        run_convert_unaligned_test(convert_fn, portable::convert_shift, i64::MAX, 5, impl_name);
    }
}
