pub(crate) mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;

/// Decorrelates 32-bit `R`, `G` and `B` rows into 32-bit `Y`, `Cb` and `Cr` rows.
///
/// ```text
/// Y  = (R + 2G + B) >> 2
/// Cb = B - G
/// Cr = R - G
/// ```
///
/// Exact inverse of [`rct_backward_32`](crate::rct::rct_backward_32) while no sum overflows.
///
/// # Safety
///
/// - `r`, `g` and `b` must be valid for reads of `repeat` samples
/// - `y`, `cb` and `cr` must be valid for writes of `repeat` samples
/// - output rows must not overlap each other or any input row
#[inline]
pub unsafe fn rct_forward_32(
    r: *const i32,
    g: *const i32,
    b: *const i32,
    y: *mut i32,
    cb: *mut i32,
    cr: *mut i32,
    repeat: usize,
) {
    debug_assert!(
        !r.is_null() && !g.is_null() && !b.is_null(),
        "input rows must not be null"
    );
    debug_assert!(
        !y.is_null() && !cb.is_null() && !cr.is_null(),
        "output rows must not be null"
    );

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        #[cfg(not(feature = "no-runtime-cpu-detection"))]
        if lossless_colour_transform_common::cpu_detect::has_avx2() {
            avx2::rct_forward_32(r, g, b, y, cb, cr, repeat);
            return;
        }

        #[cfg(feature = "no-runtime-cpu-detection")]
        if cfg!(target_feature = "avx2") {
            avx2::rct_forward_32(r, g, b, y, cb, cr, repeat);
            return;
        }
    }

    portable::rct_forward(r, g, b, y, cb, cr, repeat);
}

/// Decorrelates 32-bit `R`, `G` and `B` rows into widened 64-bit `Y`, `Cb` and `Cr` rows.
///
/// Every `i32` triple round-trips through
/// [`rct_backward_64`](crate::rct::rct_backward_64).
///
/// # Safety
///
/// - `r`, `g` and `b` must be valid for reads of `repeat` samples
/// - `y`, `cb` and `cr` must be valid for writes of `repeat` samples
/// - output rows must not overlap each other or any input row
#[inline]
pub unsafe fn rct_forward_64(
    r: *const i32,
    g: *const i32,
    b: *const i32,
    y: *mut i64,
    cb: *mut i64,
    cr: *mut i64,
    repeat: usize,
) {
    debug_assert!(
        !r.is_null() && !g.is_null() && !b.is_null(),
        "input rows must not be null"
    );
    debug_assert!(
        !y.is_null() && !cb.is_null() && !cr.is_null(),
        "output rows must not be null"
    );

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        #[cfg(not(feature = "no-runtime-cpu-detection"))]
        if lossless_colour_transform_common::cpu_detect::has_avx2() {
            avx2::rct_forward_64(r, g, b, y, cb, cr, repeat);
            return;
        }

        #[cfg(feature = "no-runtime-cpu-detection")]
        if cfg!(target_feature = "avx2") {
            avx2::rct_forward_64(r, g, b, y, cb, cr, repeat);
            return;
        }
    }

    portable::rct_forward(r, g, b, y, cb, cr, repeat);
}
