#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::portable;
use lossless_colour_transform_common::intrinsics::arithmetic_shift::avx2::Avx2EmulatedSrai64;
use lossless_colour_transform_common::intrinsics::arithmetic_shift::ArithmeticShiftRight;

/// AVX2 forward transform into 32-bit rows, 8 samples per iteration.
///
/// # Safety
///
/// Same as [`super::rct_forward_32`], and the CPU must support `avx2`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn rct_forward_32(
    mut r: *const i32,
    mut g: *const i32,
    mut b: *const i32,
    mut y: *mut i32,
    mut cb: *mut i32,
    mut cr: *mut i32,
    repeat: usize,
) {
    let vectorized = repeat & !7;
    let r_end = r.add(vectorized);

    while r < r_end {
        let red = _mm256_loadu_si256(r as *const __m256i);
        let green = _mm256_loadu_si256(g as *const __m256i);
        let blue = _mm256_loadu_si256(b as *const __m256i);

        let sum = _mm256_add_epi32(_mm256_add_epi32(red, _mm256_slli_epi32(green, 1)), blue);
        _mm256_storeu_si256(y as *mut __m256i, _mm256_srai_epi32(sum, 2));
        _mm256_storeu_si256(cb as *mut __m256i, _mm256_sub_epi32(blue, green));
        _mm256_storeu_si256(cr as *mut __m256i, _mm256_sub_epi32(red, green));

        r = r.add(8);
        g = g.add(8);
        b = b.add(8);
        y = y.add(8);
        cb = cb.add(8);
        cr = cr.add(8);
    }

    portable::rct_forward(r, g, b, y, cb, cr, repeat - vectorized);
}

/// AVX2 forward transform into widened 64-bit rows, 4 samples per iteration.
///
/// Colour samples are sign-extended before the sum, so `R + 2G + B` cannot overflow.
///
/// # Safety
///
/// Same as [`super::rct_forward_64`], and the CPU must support `avx2`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn rct_forward_64(
    mut r: *const i32,
    mut g: *const i32,
    mut b: *const i32,
    mut y: *mut i64,
    mut cb: *mut i64,
    mut cr: *mut i64,
    repeat: usize,
) {
    let shift = Avx2EmulatedSrai64::new(2);
    let vectorized = repeat & !3;
    let r_end = r.add(vectorized);

    while r < r_end {
        let red = _mm256_cvtepi32_epi64(_mm_loadu_si128(r as *const __m128i));
        let green = _mm256_cvtepi32_epi64(_mm_loadu_si128(g as *const __m128i));
        let blue = _mm256_cvtepi32_epi64(_mm_loadu_si128(b as *const __m128i));

        let sum = _mm256_add_epi64(_mm256_add_epi64(red, _mm256_slli_epi64(green, 1)), blue);
        _mm256_storeu_si256(y as *mut __m256i, shift.shift_right(sum));
        _mm256_storeu_si256(cb as *mut __m256i, _mm256_sub_epi64(blue, green));
        _mm256_storeu_si256(cr as *mut __m256i, _mm256_sub_epi64(red, green));

        r = r.add(4);
        g = g.add(4);
        b = b.add(4);
        y = y.add(4);
        cb = cb.add(4);
        cr = cr.add(4);
    }

    portable::rct_forward(r, g, b, y, cb, cr, repeat - vectorized);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(rct_forward_32, "avx2")]
    fn avx2_narrow_unaligned(#[case] kernel: RctForwardFn<i32>, #[case] impl_name: &str) {
        if !has_avx2() {
            return;
        }

        run_rct_forward_unaligned_test(kernel, 23, impl_name);
    }

    #[rstest]
    #[case(rct_forward_64, "avx2")]
    fn avx2_widened_unaligned(#[case] kernel: RctForwardFn<i64>, #[case] impl_name: &str) {
        if !has_avx2() {
            return;
        }

        run_rct_forward_unaligned_test(kernel, 11, impl_name);
    }
}
