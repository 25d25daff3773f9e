use core::ptr::{read_unaligned, write_unaligned};
use lossless_colour_transform_common::intrinsics::lane_select::portable::{
    non_negative_mask, select,
};
use lossless_colour_transform_common::sample::Sample;

/// Scalar sign fold: non-negative samples pass through, negative samples become `-shift - s`.
///
/// Computes both candidates and selects by mask, same as the vector kernels.
///
/// # Safety
///
/// - `src` must be valid for reads of `width` samples
/// - `dst` must be valid for writes of `width` samples
/// - `src` and `dst` must either not overlap or be equal
#[inline]
pub(crate) unsafe fn convert_sign_fold<S: Sample>(
    src: *const S,
    dst: *mut S,
    shift: S,
    width: usize,
) {
    let negated_shift = shift.wrapping_neg();
    for index in 0..width {
        let sample = read_unaligned(src.add(index));
        let folded = negated_shift.wrapping_sub(sample);
        let keep = non_negative_mask(sample);
        write_unaligned(dst.add(index), select(keep, sample, folded));
    }
}
