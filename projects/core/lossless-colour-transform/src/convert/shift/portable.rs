use core::ptr::{read_unaligned, write_unaligned};
use lossless_colour_transform_common::sample::Sample;

/// Scalar level shift, `dst[i] = src[i] + shift`.
///
/// Reference implementation for the vector kernels, which also call it for the row tail.
///
/// # Safety
///
/// - `src` must be valid for reads of `width` samples
/// - `dst` must be valid for writes of `width` samples
/// - `src` and `dst` must either not overlap or be equal
#[inline]
pub(crate) unsafe fn convert_shift<S: Sample>(src: *const S, dst: *mut S, shift: S, width: usize) {
    for index in 0..width {
        let sample = read_unaligned(src.add(index));
        write_unaligned(dst.add(index), sample.wrapping_add(shift));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0, 0)]
    #[case(5, -5)]
    #[case(i32::MAX, 1)]
    #[case(i32::MIN, -1)]
    #[case(-2048, 2048)]
    fn shifts_and_wraps(#[case] sample: i32, #[case] shift: i32) {
        let mut output = [0];
        unsafe { convert_shift([sample].as_ptr(), output.as_mut_ptr(), shift, 1) };
        assert_eq!(output[0], sample.wrapping_add(shift));
    }

    #[test]
    fn shifts_widened_samples() {
        let input = [i64::MAX, -1, 0, 1 << 40];
        let mut output = [0_i64; 4];
        unsafe { convert_shift(input.as_ptr(), output.as_mut_ptr(), 1, input.len()) };
        assert_eq!(output, [i64::MIN, 0, 1, (1 << 40) + 1]);
    }
}
