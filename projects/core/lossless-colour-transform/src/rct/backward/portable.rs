use core::ptr::{read_unaligned, write_unaligned};
use lossless_colour_transform_common::sample::Sample;

/// Reconstructs one `(R, G, B)` triple from `(Y, Cb, Cr)`, keeping the low 32 bits.
#[inline(always)]
pub(crate) fn backward_sample<S: Sample>(y: S, cb: S, cr: S) -> (i32, i32, i32) {
    let g = y.wrapping_sub(cb.wrapping_add(cr).shr_floor(2));
    let b = cb.wrapping_add(g);
    let r = cr.wrapping_add(g);
    (r.low_i32(), g.low_i32(), b.low_i32())
}

/// Scalar backward colour transform over `repeat` samples of each row.
///
/// Serves both width paths: `S = i32` is the narrow path, `S = i64` the widened one.
///
/// # Safety
///
/// - `y`, `cb` and `cr` must be valid for reads of `repeat` samples
/// - `r`, `g` and `b` must be valid for writes of `repeat` samples
/// - output rows must not overlap each other or any input row
#[inline]
pub(crate) unsafe fn rct_backward<S: Sample>(
    y: *const S,
    cb: *const S,
    cr: *const S,
    r: *mut i32,
    g: *mut i32,
    b: *mut i32,
    repeat: usize,
) {
    for index in 0..repeat {
        let (red, green, blue) = backward_sample(
            read_unaligned(y.add(index)),
            read_unaligned(cb.add(index)),
            read_unaligned(cr.add(index)),
        );
        write_unaligned(r.add(index), red);
        write_unaligned(g.add(index), green);
        write_unaligned(b.add(index), blue);
    }
}
