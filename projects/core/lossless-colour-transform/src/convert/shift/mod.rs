pub(crate) mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;

/// Level-shifts a line of 32-bit samples: `dst[i] = src[i] + shift`, wrapping.
///
/// # Safety
///
/// - `src` must be valid for reads of `width` samples
/// - `dst` must be valid for writes of `width` samples
/// - `src` and `dst` must either not overlap or be equal (in-place conversion)
#[inline]
pub unsafe fn convert_shift_i32(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
    debug_assert!(
        src == dst as *const i32
            || src.add(width) <= dst as *const i32
            || dst.add(width) as *const i32 <= src,
        "src and dst must not partially overlap"
    );

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        convert_shift_i32_x86(src, dst, shift, width);
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable::convert_shift(src, dst, shift, width);
    }
}

/// Level-shifts a line of 64-bit samples: `dst[i] = src[i] + shift`, wrapping.
///
/// # Safety
///
/// - `src` must be valid for reads of `width` samples
/// - `dst` must be valid for writes of `width` samples
/// - `src` and `dst` must either not overlap or be equal (in-place conversion)
#[inline]
pub unsafe fn convert_shift_i64(src: *const i64, dst: *mut i64, shift: i64, width: usize) {
    debug_assert!(
        src == dst as *const i64
            || src.add(width) <= dst as *const i64
            || dst.add(width) as *const i64 <= src,
        "src and dst must not partially overlap"
    );

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        convert_shift_i64_x86(src, dst, shift, width);
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable::convert_shift(src, dst, shift, width);
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn convert_shift_i32_x86(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use lossless_colour_transform_common::cpu_detect::*;

        if has_avx2() {
            avx2::convert_shift_i32(src, dst, shift, width);
            return;
        }

        if has_sse2() {
            sse2::convert_shift_i32(src, dst, shift, width);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            avx2::convert_shift_i32(src, dst, shift, width);
            return;
        }

        if cfg!(target_feature = "sse2") {
            sse2::convert_shift_i32(src, dst, shift, width);
            return;
        }
    }

    portable::convert_shift(src, dst, shift, width);
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn convert_shift_i64_x86(src: *const i64, dst: *mut i64, shift: i64, width: usize) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use lossless_colour_transform_common::cpu_detect::*;

        if has_avx2() {
            avx2::convert_shift_i64(src, dst, shift, width);
            return;
        }

        if has_sse2() {
            sse2::convert_shift_i64(src, dst, shift, width);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            avx2::convert_shift_i64(src, dst, shift, width);
            return;
        }

        if cfg!(target_feature = "sse2") {
            sse2::convert_shift_i64(src, dst, shift, width);
            return;
        }
    }

    portable::convert_shift(src, dst, shift, width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    #[case(8)]
    #[case(33)]
    fn dispatched_i32_matches_portable(#[case] width: usize) {
        let src = generate_row_i32(width, 0x1234);
        let mut expected = vec![0; width];
        let mut actual = vec![0; width];
        unsafe {
            portable::convert_shift(src.as_ptr(), expected.as_mut_ptr(), -128, width);
            convert_shift_i32(src.as_ptr(), actual.as_mut_ptr(), -128, width);
        }
        assert_eq!(expected, actual);
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(4)]
    #[case(17)]
    fn dispatched_i64_matches_portable(#[case] width: usize) {
        let src = generate_row_i64(width, 0x5678);
        let mut expected = vec![0; width];
        let mut actual = vec![0; width];
        unsafe {
            portable::convert_shift(src.as_ptr(), expected.as_mut_ptr(), 1 << 40, width);
            convert_shift_i64(src.as_ptr(), actual.as_mut_ptr(), 1 << 40, width);
        }
        assert_eq!(expected, actual);
    }

    #[test]
    fn converts_in_place() {
        let mut row = [1, 2, 3, 4, 5, 6, 7, 8, 9, i32::MAX];
        let ptr = row.as_mut_ptr();
        unsafe { convert_shift_i32(ptr, ptr, 1, row.len()) };
        assert_eq!(row, [2, 3, 4, 5, 6, 7, 8, 9, 10, i32::MIN]);
    }
}
