//! Per-ISA kernels re-exported for the criterion benches.
#![allow(clippy::missing_safety_doc)]
#![cfg(not(tarpaulin_include))]
#![allow(missing_docs)]

pub mod rct_backward {
    use crate::rct::backward::portable;

    pub unsafe fn portable_32(
        y: *const i32,
        cb: *const i32,
        cr: *const i32,
        r: *mut i32,
        g: *mut i32,
        b: *mut i32,
        repeat: usize,
    ) {
        portable::rct_backward(y, cb, cr, r, g, b, repeat)
    }

    pub unsafe fn portable_64(
        y: *const i64,
        cb: *const i64,
        cr: *const i64,
        r: *mut i32,
        g: *mut i32,
        b: *mut i32,
        repeat: usize,
    ) {
        portable::rct_backward(y, cb, cr, r, g, b, repeat)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn sse2_32(
        y: *const i32,
        cb: *const i32,
        cr: *const i32,
        r: *mut i32,
        g: *mut i32,
        b: *mut i32,
        repeat: usize,
    ) {
        crate::rct::backward::sse2::rct_backward_32(y, cb, cr, r, g, b, repeat)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn sse2_64(
        y: *const i64,
        cb: *const i64,
        cr: *const i64,
        r: *mut i32,
        g: *mut i32,
        b: *mut i32,
        repeat: usize,
    ) {
        crate::rct::backward::sse2::rct_backward_64(y, cb, cr, r, g, b, repeat)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn avx2_32(
        y: *const i32,
        cb: *const i32,
        cr: *const i32,
        r: *mut i32,
        g: *mut i32,
        b: *mut i32,
        repeat: usize,
    ) {
        crate::rct::backward::avx2::rct_backward_32(y, cb, cr, r, g, b, repeat)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn avx2_64(
        y: *const i64,
        cb: *const i64,
        cr: *const i64,
        r: *mut i32,
        g: *mut i32,
        b: *mut i32,
        repeat: usize,
    ) {
        crate::rct::backward::avx2::rct_backward_64(y, cb, cr, r, g, b, repeat)
    }

    #[cfg(feature = "nightly")]
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn avx512_64(
        y: *const i64,
        cb: *const i64,
        cr: *const i64,
        r: *mut i32,
        g: *mut i32,
        b: *mut i32,
        repeat: usize,
    ) {
        crate::rct::backward::avx512::rct_backward_64(y, cb, cr, r, g, b, repeat)
    }
}

pub mod convert {
    pub unsafe fn portable_shift_i32(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
        crate::convert::shift::portable::convert_shift(src, dst, shift, width)
    }

    pub unsafe fn portable_sign_fold_i32(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
        crate::convert::sign_fold::portable::convert_sign_fold(src, dst, shift, width)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn sse2_shift_i32(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
        crate::convert::shift::sse2::convert_shift_i32(src, dst, shift, width)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn sse2_sign_fold_i32(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
        crate::convert::sign_fold::sse2::convert_sign_fold_i32(src, dst, shift, width)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn avx2_shift_i32(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
        crate::convert::shift::avx2::convert_shift_i32(src, dst, shift, width)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn avx2_sign_fold_i32(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
        crate::convert::sign_fold::avx2::convert_sign_fold_i32(src, dst, shift, width)
    }
}
