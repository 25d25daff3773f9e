//! Safe slice-based wrappers
//!
//! This module provides safe wrappers around the unsafe pointer-based kernels in
//! [`crate::convert`] and [`crate::rct`]. Every wrapper validates its arguments first and
//! either runs the kernel over the full row or returns an error without writing anything.
//!
//! Two flavours are provided:
//! - slice functions generic over the sample width ([`LineSample`]), e.g. [`rct_backward`]
//! - line functions taking [`Line`](crate::Line) descriptors, which also check the
//!   reversible flag and pick the width path at runtime, e.g. [`rct_backward_lines`]
//!
//! With the `logging` feature, rejected calls are logged at debug level and the path chosen
//! by the line functions at trace level.

mod convert;
mod rct;

pub use convert::{
    convert_shift, convert_shift_in_place, convert_shift_line, convert_sign_fold,
    convert_sign_fold_in_place, convert_sign_fold_line, ConvertValidationError,
};
pub use rct::{rct_backward, rct_backward_lines, rct_forward, rct_forward_lines, RctValidationError};

use crate::line::WidthClass;
use core::fmt::Display;
use lossless_colour_transform_common::sample::Sample;

/// A sample width with a full set of line kernels.
///
/// Implemented for `i32` and `i64`; each method forwards to the matching raw kernel.
pub trait LineSample: Sample {
    /// Width class rows of this sample type belong to.
    const WIDTH_CLASS: WidthClass;

    /// See [`crate::convert::convert_shift_i32`].
    ///
    /// # Safety
    ///
    /// Same as the forwarded kernel.
    unsafe fn convert_shift_raw(src: *const Self, dst: *mut Self, shift: Self, width: usize);

    /// See [`crate::convert::convert_sign_fold_i32`].
    ///
    /// # Safety
    ///
    /// Same as the forwarded kernel.
    unsafe fn convert_sign_fold_raw(src: *const Self, dst: *mut Self, shift: Self, width: usize);

    /// See [`crate::rct::rct_backward_32`] and [`crate::rct::rct_backward_64`].
    ///
    /// # Safety
    ///
    /// Same as the forwarded kernel.
    unsafe fn rct_backward_raw(
        y: *const Self,
        cb: *const Self,
        cr: *const Self,
        r: *mut i32,
        g: *mut i32,
        b: *mut i32,
        repeat: usize,
    );

    /// See [`crate::rct::rct_forward_32`] and [`crate::rct::rct_forward_64`].
    ///
    /// # Safety
    ///
    /// Same as the forwarded kernel.
    unsafe fn rct_forward_raw(
        r: *const i32,
        g: *const i32,
        b: *const i32,
        y: *mut Self,
        cb: *mut Self,
        cr: *mut Self,
        repeat: usize,
    );
}

impl LineSample for i32 {
    const WIDTH_CLASS: WidthClass = WidthClass::Native32;

    #[inline(always)]
    unsafe fn convert_shift_raw(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
        crate::convert::convert_shift_i32(src, dst, shift, width)
    }

    #[inline(always)]
    unsafe fn convert_sign_fold_raw(src: *const i32, dst: *mut i32, shift: i32, width: usize) {
        crate::convert::convert_sign_fold_i32(src, dst, shift, width)
    }

    #[inline(always)]
    unsafe fn rct_backward_raw(
        y: *const i32,
        cb: *const i32,
        cr: *const i32,
        r: *mut i32,
        g: *mut i32,
        b: *mut i32,
        repeat: usize,
    ) {
        crate::rct::rct_backward_32(y, cb, cr, r, g, b, repeat)
    }

    #[inline(always)]
    unsafe fn rct_forward_raw(
        r: *const i32,
        g: *const i32,
        b: *const i32,
        y: *mut i32,
        cb: *mut i32,
        cr: *mut i32,
        repeat: usize,
    ) {
        crate::rct::rct_forward_32(r, g, b, y, cb, cr, repeat)
    }
}

impl LineSample for i64 {
    const WIDTH_CLASS: WidthClass = WidthClass::Widened64;

    #[inline(always)]
    unsafe fn convert_shift_raw(src: *const i64, dst: *mut i64, shift: i64, width: usize) {
        crate::convert::convert_shift_i64(src, dst, shift, width)
    }

    #[inline(always)]
    unsafe fn convert_sign_fold_raw(src: *const i64, dst: *mut i64, shift: i64, width: usize) {
        crate::convert::convert_sign_fold_i64(src, dst, shift, width)
    }

    #[inline(always)]
    unsafe fn rct_backward_raw(
        y: *const i64,
        cb: *const i64,
        cr: *const i64,
        r: *mut i32,
        g: *mut i32,
        b: *mut i32,
        repeat: usize,
    ) {
        crate::rct::rct_backward_64(y, cb, cr, r, g, b, repeat)
    }

    #[inline(always)]
    unsafe fn rct_forward_raw(
        r: *const i32,
        g: *const i32,
        b: *const i32,
        y: *mut i64,
        cb: *mut i64,
        cr: *mut i64,
        repeat: usize,
    ) {
        crate::rct::rct_forward_64(r, g, b, y, cb, cr, repeat)
    }
}

/// Logs a rejected call and hands the error back.
#[inline]
fn rejected<E: Display>(operation: &str, error: E) -> E {
    ldebug!("{} rejected: {}", operation, error);
    error
}
