pub(crate) mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;

/// Sign-folds a line of 32-bit samples ("non-linear type 3").
///
/// Samples `>= 0` are copied unchanged, negative samples `s` become `-shift - s`.
/// Arithmetic wraps, so `i32::MIN` folds without overflow checks.
///
/// # Safety
///
/// - `src` must be valid for reads of `width` samples
/// - `dst` must be valid for writes of `width` samples
/// - `src` and `dst` must either not overlap or be equal (in-place conversion)
#[inline]
pub unsafe fn convert_sign_fold_i32(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
    debug_assert!(
        src == dst as *const i32
            || src.add(width) <= dst as *const i32
            || dst.add(width) as *const i32 <= src,
        "src and dst must not partially overlap"
    );

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        convert_sign_fold_i32_x86(src, dst, shift, width);
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable::convert_sign_fold(src, dst, shift, width);
    }
}

/// Sign-folds a line of 64-bit samples ("non-linear type 3").
///
/// See [`convert_sign_fold_i32`].
///
/// # Safety
///
/// - `src` must be valid for reads of `width` samples
/// - `dst` must be valid for writes of `width` samples
/// - `src` and `dst` must either not overlap or be equal (in-place conversion)
#[inline]
pub unsafe fn convert_sign_fold_i64(src: *const i64, dst: *mut i64, shift: i64, width: usize) {
    debug_assert!(
        src == dst as *const i64
            || src.add(width) <= dst as *const i64
            || dst.add(width) as *const i64 <= src,
        "src and dst must not partially overlap"
    );

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        convert_sign_fold_i64_x86(src, dst, shift, width);
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable::convert_sign_fold(src, dst, shift, width);
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn convert_sign_fold_i32_x86(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use lossless_colour_transform_common::cpu_detect::*;

        if has_avx2() {
            avx2::convert_sign_fold_i32(src, dst, shift, width);
            return;
        }

        if has_sse2() {
            sse2::convert_sign_fold_i32(src, dst, shift, width);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            avx2::convert_sign_fold_i32(src, dst, shift, width);
            return;
        }

        if cfg!(target_feature = "sse2") {
            sse2::convert_sign_fold_i32(src, dst, shift, width);
            return;
        }
    }

    portable::convert_sign_fold(src, dst, shift, width);
}

// SSE2 has no 64-bit compare, so widened rows go straight to the scalar form below AVX2.
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn convert_sign_fold_i64_x86(src: *const i64, dst: *mut i64, shift: i64, width: usize) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use lossless_colour_transform_common::cpu_detect::*;

        if has_avx2() {
            avx2::convert_sign_fold_i64(src, dst, shift, width);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            avx2::convert_sign_fold_i64(src, dst, shift, width);
            return;
        }
    }

    portable::convert_sign_fold(src, dst, shift, width);
}
