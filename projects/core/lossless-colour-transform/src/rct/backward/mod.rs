pub(crate) mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;

#[cfg(feature = "nightly")]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx512;

/// Reconstructs `R`, `G` and `B` rows from 32-bit `Y`, `Cb` and `Cr` rows.
///
/// ```text
/// G = Y - ((Cb + Cr) >> 2)
/// B = Cb + G
/// R = Cr + G
/// ```
///
/// # Safety
///
/// - `y`, `cb` and `cr` must be valid for reads of `repeat` samples
/// - `r`, `g` and `b` must be valid for writes of `repeat` samples
/// - output rows must not overlap each other or any input row
/// - all six rows must belong to a reversibly coded component; this is not checked
#[inline]
pub unsafe fn rct_backward_32(
    y: *const i32,
    cb: *const i32,
    cr: *const i32,
    r: *mut i32,
    g: *mut i32,
    b: *mut i32,
    repeat: usize,
) {
    debug_assert!(
        !y.is_null() && !cb.is_null() && !cr.is_null(),
        "input rows must not be null"
    );
    debug_assert!(
        !r.is_null() && !g.is_null() && !b.is_null(),
        "output rows must not be null"
    );

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        rct_backward_32_x86(y, cb, cr, r, g, b, repeat);
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable::rct_backward(y, cb, cr, r, g, b, repeat);
    }
}

/// Reconstructs 32-bit `R`, `G` and `B` rows from widened 64-bit `Y`, `Cb` and `Cr` rows.
///
/// Same arithmetic as [`rct_backward_32`], carried out at 64 bits. Each result keeps
/// only its low 32 bits, which is exact whenever the colour value fits in an `i32`.
///
/// # Safety
///
/// - `y`, `cb` and `cr` must be valid for reads of `repeat` samples
/// - `r`, `g` and `b` must be valid for writes of `repeat` samples
/// - output rows must not overlap each other or any input row
/// - all six rows must belong to a reversibly coded component; this is not checked
#[inline]
pub unsafe fn rct_backward_64(
    y: *const i64,
    cb: *const i64,
    cr: *const i64,
    r: *mut i32,
    g: *mut i32,
    b: *mut i32,
    repeat: usize,
) {
    debug_assert!(
        !y.is_null() && !cb.is_null() && !cr.is_null(),
        "input rows must not be null"
    );
    debug_assert!(
        !r.is_null() && !g.is_null() && !b.is_null(),
        "output rows must not be null"
    );

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        rct_backward_64_x86(y, cb, cr, r, g, b, repeat);
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable::rct_backward(y, cb, cr, r, g, b, repeat);
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn rct_backward_32_x86(
    y: *const i32,
    cb: *const i32,
    cr: *const i32,
    r: *mut i32,
    g: *mut i32,
    b: *mut i32,
    repeat: usize,
) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use lossless_colour_transform_common::cpu_detect::*;

        if has_avx2() {
            avx2::rct_backward_32(y, cb, cr, r, g, b, repeat);
            return;
        }

        if has_sse2() {
            sse2::rct_backward_32(y, cb, cr, r, g, b, repeat);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            avx2::rct_backward_32(y, cb, cr, r, g, b, repeat);
            return;
        }

        if cfg!(target_feature = "sse2") {
            sse2::rct_backward_32(y, cb, cr, r, g, b, repeat);
            return;
        }
    }

    portable::rct_backward(y, cb, cr, r, g, b, repeat);
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn rct_backward_64_x86(
    y: *const i64,
    cb: *const i64,
    cr: *const i64,
    r: *mut i32,
    g: *mut i32,
    b: *mut i32,
    repeat: usize,
) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use lossless_colour_transform_common::cpu_detect::*;

        #[cfg(feature = "nightly")]
        if has_avx512f() && has_avx512vl() {
            avx512::rct_backward_64(y, cb, cr, r, g, b, repeat);
            return;
        }

        if has_avx2() {
            avx2::rct_backward_64(y, cb, cr, r, g, b, repeat);
            return;
        }

        if has_sse2() {
            sse2::rct_backward_64(y, cb, cr, r, g, b, repeat);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        #[cfg(feature = "nightly")]
        if cfg!(target_feature = "avx512f") && cfg!(target_feature = "avx512vl") {
            avx512::rct_backward_64(y, cb, cr, r, g, b, repeat);
            return;
        }

        if cfg!(target_feature = "avx2") {
            avx2::rct_backward_64(y, cb, cr, r, g, b, repeat);
            return;
        }

        if cfg!(target_feature = "sse2") {
            sse2::rct_backward_64(y, cb, cr, r, g, b, repeat);
            return;
        }
    }

    portable::rct_backward(y, cb, cr, r, g, b, repeat);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn narrow_reconstructs_known_triple() {
        let (y, cb, cr) = ([10; 9], [2; 9], [-1; 9]);
        let (mut r, mut g, mut b) = ([0; 9], [0; 9], [0; 9]);
        unsafe {
            rct_backward_32(
                y.as_ptr(),
                cb.as_ptr(),
                cr.as_ptr(),
                r.as_mut_ptr(),
                g.as_mut_ptr(),
                b.as_mut_ptr(),
                9,
            );
        }
        assert_eq!((r, g, b), ([9; 9], [10; 9], [12; 9]));
    }

    #[test]
    fn widened_reconstructs_negated_triple() {
        let (y, cb, cr) = ([-10_i64; 9], [-2_i64; 9], [1_i64; 9]);
        let (mut r, mut g, mut b) = ([0; 9], [0; 9], [0; 9]);
        unsafe {
            rct_backward_64(
                y.as_ptr(),
                cb.as_ptr(),
                cr.as_ptr(),
                r.as_mut_ptr(),
                g.as_mut_ptr(),
                b.as_mut_ptr(),
                9,
            );
        }
        assert_eq!((r, g, b), ([-8; 9], [-9; 9], [-11; 9]));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(8)]
    #[case(100)]
    fn dispatched_kernels_match_portable(#[case] repeat: usize) {
        run_rct_backward_unaligned_test::<i32>(rct_backward_32, repeat, "dispatch");
        run_rct_backward_unaligned_test::<i64>(rct_backward_64, repeat, "dispatch");
    }

    #[test]
    fn empty_row_writes_nothing() {
        let (mut r, mut g, mut b) = ([7], [7], [7]);
        unsafe {
            rct_backward_32(
                [0].as_ptr(),
                [0].as_ptr(),
                [0].as_ptr(),
                r.as_mut_ptr(),
                g.as_mut_ptr(),
                b.as_mut_ptr(),
                0,
            );
        }
        assert_eq!((r, g, b), ([7], [7], [7]));
    }
}
