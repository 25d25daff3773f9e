use super::avx2::rct_backward_64_with;
use lossless_colour_transform_common::intrinsics::arithmetic_shift::avx512::Avx512Srai64;

/// AVX-512 backward transform of widened rows.
///
/// Same loop as the AVX2 kernel, with `vpsraq` on 256-bit registers in place of the
/// emulated shift.
///
/// # Safety
///
/// Same as [`super::rct_backward_64`], and the CPU must support `avx2`, `avx512f`
/// and `avx512vl`.
#[target_feature(enable = "avx2,avx512f,avx512vl")]
pub(crate) unsafe fn rct_backward_64(
    y: *const i64,
    cb: *const i64,
    cr: *const i64,
    r: *mut i32,
    g: *mut i32,
    b: *mut i32,
    repeat: usize,
) {
    let shift = Avx512Srai64::new(2);
    rct_backward_64_with(&shift, y, cb, cr, r, g, b, repeat);
}
