use core::ptr::{read_unaligned, write_unaligned};
use lossless_colour_transform_common::sample::Sample;

/// Decorrelates one `(R, G, B)` triple, widening to `S` before any arithmetic.
#[inline(always)]
pub(crate) fn forward_sample<S: Sample>(r: i32, g: i32, b: i32) -> (S, S, S) {
    let (r, g, b) = (S::from_i32(r), S::from_i32(g), S::from_i32(b));
    let y = r.wrapping_add(g.wrapping_add(g)).wrapping_add(b).shr_floor(2);
    (y, b.wrapping_sub(g), r.wrapping_sub(g))
}

/// Scalar forward colour transform over `repeat` samples of each row.
///
/// `S = i32` writes 32-bit decorrelated rows, `S = i64` widened ones.
///
/// # Safety
///
/// - `r`, `g` and `b` must be valid for reads of `repeat` samples
/// - `y`, `cb` and `cr` must be valid for writes of `repeat` samples
/// - output rows must not overlap each other or any input row
#[inline]
pub(crate) unsafe fn rct_forward<S: Sample>(
    r: *const i32,
    g: *const i32,
    b: *const i32,
    y: *mut S,
    cb: *mut S,
    cr: *mut S,
    repeat: usize,
) {
    for index in 0..repeat {
        let (luma, chroma_b, chroma_r) = forward_sample::<S>(
            read_unaligned(r.add(index)),
            read_unaligned(g.add(index)),
            read_unaligned(b.add(index)),
        );
        write_unaligned(y.add(index), luma);
        write_unaligned(cb.add(index), chroma_b);
        write_unaligned(cr.add(index), chroma_r);
    }
}
