#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::portable;
use lossless_colour_transform_common::intrinsics::arithmetic_shift::avx2::Avx2EmulatedSrai64;
use lossless_colour_transform_common::intrinsics::arithmetic_shift::ArithmeticShiftRight;
use lossless_colour_transform_common::intrinsics::repack::avx2::repack_epi64_to_epi32;

/// AVX2 backward transform of 32-bit rows, 8 samples per iteration.
///
/// # Safety
///
/// Same as [`super::rct_backward_32`], and the CPU must support `avx2`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn rct_backward_32(
    mut y: *const i32,
    mut cb: *const i32,
    mut cr: *const i32,
    mut r: *mut i32,
    mut g: *mut i32,
    mut b: *mut i32,
    repeat: usize,
) {
    let vectorized = repeat & !7;
    let y_end = y.add(vectorized);

    while y < y_end {
        let luma = _mm256_loadu_si256(y as *const __m256i);
        let chroma_b = _mm256_loadu_si256(cb as *const __m256i);
        let chroma_r = _mm256_loadu_si256(cr as *const __m256i);

        let quarter = _mm256_srai_epi32(_mm256_add_epi32(chroma_b, chroma_r), 2);
        let green = _mm256_sub_epi32(luma, quarter);
        let blue = _mm256_add_epi32(chroma_b, green);
        let red = _mm256_add_epi32(chroma_r, green);

        _mm256_storeu_si256(r as *mut __m256i, red);
        _mm256_storeu_si256(g as *mut __m256i, green);
        _mm256_storeu_si256(b as *mut __m256i, blue);

        y = y.add(8);
        cb = cb.add(8);
        cr = cr.add(8);
        r = r.add(8);
        g = g.add(8);
        b = b.add(8);
    }

    portable::rct_backward(y, cb, cr, r, g, b, repeat - vectorized);
}

/// AVX2 backward transform of widened rows, 8 samples (two groups of 4) per iteration.
///
/// # Safety
///
/// Same as [`super::rct_backward_64`], and the CPU must support `avx2`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn rct_backward_64(
    y: *const i64,
    cb: *const i64,
    cr: *const i64,
    r: *mut i32,
    g: *mut i32,
    b: *mut i32,
    repeat: usize,
) {
    let shift = Avx2EmulatedSrai64::new(2);
    rct_backward_64_with(&shift, y, cb, cr, r, g, b, repeat);
}

/// Widened backward loop, generic over how the 64-bit floor shift is done.
///
/// Must be inlined into a function with at least `avx2` enabled, plus whatever
/// `shift` itself requires.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub(super) unsafe fn rct_backward_64_with<Shift>(
    shift: &Shift,
    mut y: *const i64,
    mut cb: *const i64,
    mut cr: *const i64,
    mut r: *mut i32,
    mut g: *mut i32,
    mut b: *mut i32,
    repeat: usize,
) where
    Shift: ArithmeticShiftRight<Lanes = __m256i>,
{
    let vectorized = repeat & !7;
    let y_end = y.add(vectorized);

    while y < y_end {
        let (red_lo, green_lo, blue_lo) = backward_group(shift, y, cb, cr);
        let (red_hi, green_hi, blue_hi) = backward_group(shift, y.add(4), cb.add(4), cr.add(4));

        _mm256_storeu_si256(r as *mut __m256i, repack_epi64_to_epi32(red_lo, red_hi));
        _mm256_storeu_si256(g as *mut __m256i, repack_epi64_to_epi32(green_lo, green_hi));
        _mm256_storeu_si256(b as *mut __m256i, repack_epi64_to_epi32(blue_lo, blue_hi));

        y = y.add(8);
        cb = cb.add(8);
        cr = cr.add(8);
        r = r.add(8);
        g = g.add(8);
        b = b.add(8);
    }

    portable::rct_backward(y, cb, cr, r, g, b, repeat - vectorized);
}

/// Reconstructs 4 widened lanes, returning `(R, G, B)` still at 64 bits.
#[inline(always)]
unsafe fn backward_group<Shift>(
    shift: &Shift,
    y: *const i64,
    cb: *const i64,
    cr: *const i64,
) -> (__m256i, __m256i, __m256i)
where
    Shift: ArithmeticShiftRight<Lanes = __m256i>,
{
    let luma = _mm256_loadu_si256(y as *const __m256i);
    let chroma_b = _mm256_loadu_si256(cb as *const __m256i);
    let chroma_r = _mm256_loadu_si256(cr as *const __m256i);

    let quarter = shift.shift_right(_mm256_add_epi64(chroma_b, chroma_r));
    let green = _mm256_sub_epi64(luma, quarter);
    let blue = _mm256_add_epi64(chroma_b, green);
    let red = _mm256_add_epi64(chroma_r, green);
    (red, green, blue)
}
