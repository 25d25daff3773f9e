//! # Sample Conversion
//!
//! Per-sample reformatting of a line, applied by the codec before or after the colour
//! transform. Both converters read `width` samples from `src` and write `width` samples to
//! `dst`, and both accept `src == dst` for in-place conversion.
//!
//! - [`convert_shift_i32`] / [`convert_shift_i64`]: level shift, `dst = src + shift`.
//! - [`convert_sign_fold_i32`] / [`convert_sign_fold_i64`]: "non-linear type 3" sign fold,
//!   which keeps non-negative samples and maps negative ones to `-shift - s`.
//!
//! All arithmetic wraps.

pub(crate) mod shift;
pub(crate) mod sign_fold;

pub use shift::{convert_shift_i32, convert_shift_i64};
pub use sign_fold::{convert_sign_fold_i32, convert_sign_fold_i64};
