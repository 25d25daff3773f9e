#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::portable;
use lossless_colour_transform_common::intrinsics::arithmetic_shift::sse2::Sse2EmulatedSrai64;
use lossless_colour_transform_common::intrinsics::arithmetic_shift::ArithmeticShiftRight;
use lossless_colour_transform_common::intrinsics::repack::sse2::repack_epi64_to_epi32;

/// SSE2 backward transform of 32-bit rows, 4 samples per iteration.
///
/// # Safety
///
/// Same as [`super::rct_backward_32`], and the CPU must support `sse2`.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn rct_backward_32(
    mut y: *const i32,
    mut cb: *const i32,
    mut cr: *const i32,
    mut r: *mut i32,
    mut g: *mut i32,
    mut b: *mut i32,
    repeat: usize,
) {
    let vectorized = repeat & !3;
    let y_end = y.add(vectorized);

    while y < y_end {
        let luma = _mm_loadu_si128(y as *const __m128i);
        let chroma_b = _mm_loadu_si128(cb as *const __m128i);
        let chroma_r = _mm_loadu_si128(cr as *const __m128i);

        let quarter = _mm_srai_epi32(_mm_add_epi32(chroma_b, chroma_r), 2);
        let green = _mm_sub_epi32(luma, quarter);
        let blue = _mm_add_epi32(chroma_b, green);
        let red = _mm_add_epi32(chroma_r, green);

        _mm_storeu_si128(r as *mut __m128i, red);
        _mm_storeu_si128(g as *mut __m128i, green);
        _mm_storeu_si128(b as *mut __m128i, blue);

        y = y.add(4);
        cb = cb.add(4);
        cr = cr.add(4);
        r = r.add(4);
        g = g.add(4);
        b = b.add(4);
    }

    portable::rct_backward(y, cb, cr, r, g, b, repeat - vectorized);
}

/// SSE2 backward transform of widened rows, 4 samples (two groups of 2) per iteration.
///
/// # Safety
///
/// Same as [`super::rct_backward_64`], and the CPU must support `sse2`.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn rct_backward_64(
    mut y: *const i64,
    mut cb: *const i64,
    mut cr: *const i64,
    mut r: *mut i32,
    mut g: *mut i32,
    mut b: *mut i32,
    repeat: usize,
) {
    let shift = Sse2EmulatedSrai64::new(2);
    let vectorized = repeat & !3;
    let y_end = y.add(vectorized);

    while y < y_end {
        let (red_lo, green_lo, blue_lo) = backward_group(&shift, y, cb, cr);
        let (red_hi, green_hi, blue_hi) = backward_group(&shift, y.add(2), cb.add(2), cr.add(2));

        _mm_storeu_si128(r as *mut __m128i, repack_epi64_to_epi32(red_lo, red_hi));
        _mm_storeu_si128(g as *mut __m128i, repack_epi64_to_epi32(green_lo, green_hi));
        _mm_storeu_si128(b as *mut __m128i, repack_epi64_to_epi32(blue_lo, blue_hi));

        y = y.add(4);
        cb = cb.add(4);
        cr = cr.add(4);
        r = r.add(4);
        g = g.add(4);
        b = b.add(4);
    }

    portable::rct_backward(y, cb, cr, r, g, b, repeat - vectorized);
}

#[inline(always)]
unsafe fn backward_group(
    shift: &Sse2EmulatedSrai64,
    y: *const i64,
    cb: *const i64,
    cr: *const i64,
) -> (__m128i, __m128i, __m128i) {
    let luma = _mm_loadu_si128(y as *const __m128i);
    let chroma_b = _mm_loadu_si128(cb as *const __m128i);
    let chroma_r = _mm_loadu_si128(cr as *const __m128i);

    let quarter = shift.shift_right(_mm_add_epi64(chroma_b, chroma_r));
    let green = _mm_sub_epi64(luma, quarter);
    let blue = _mm_add_epi64(chroma_b, green);
    let red = _mm_add_epi64(chroma_r, green);
    (red, green, blue)
}
