//! Level shift and sign fold (safe wrappers).

use super::{rejected, LineSample};
use crate::line::{Line, LineMut, LineSamples, LineSamplesMut};
use thiserror::Error;

/// Validation errors for sample conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertValidationError {
    /// Output buffer is too small to hold the converted line.
    #[error("Output buffer too small: needed {needed} samples, got {actual}")]
    OutputBufferTooSmall {
        /// Number of samples in the source line.
        needed: usize,
        /// Number of samples the output can hold.
        actual: usize,
    },

    /// Source and destination lines are stored at different widths.
    #[error("Source and destination lines are stored at different widths")]
    WidthClassMismatch,
}

/// Level-shifts `src` into `dst`: `dst[i] = src[i] + shift`, wrapping.
///
/// Converts `src.len()` samples; any extra samples in `dst` are left untouched.
///
/// # Errors
///
/// - [`ConvertValidationError::OutputBufferTooSmall`] if `dst` is shorter than `src`
///
/// # Examples
///
/// ```
/// use lossless_colour_transform::convert_shift;
/// # use lossless_colour_transform::ConvertValidationError;
///
/// # fn main() -> Result<(), ConvertValidationError> {
/// let samples = [0_i32, 127, 255];
/// let mut shifted = [0_i32; 3];
/// convert_shift(&samples, &mut shifted, -128)?;
/// assert_eq!(shifted, [-128, -1, 127]);
/// # Ok(())
/// # }
/// ```
pub fn convert_shift<S: LineSample>(
    src: &[S],
    dst: &mut [S],
    shift: S,
) -> Result<(), ConvertValidationError> {
    check_output(src.len(), dst.len()).map_err(|err| rejected("convert_shift", err))?;

    // Safety: dst holds at least src.len() samples, and a shared and a mutable slice cannot overlap
    unsafe { S::convert_shift_raw(src.as_ptr(), dst.as_mut_ptr(), shift, src.len()) };
    Ok(())
}

/// Level-shifts `samples` in place.
pub fn convert_shift_in_place<S: LineSample>(samples: &mut [S], shift: S) {
    let ptr = samples.as_mut_ptr();
    // Safety: src == dst is allowed, and the slice is valid for its own length
    unsafe { S::convert_shift_raw(ptr, ptr, shift, samples.len()) };
}

/// Sign-folds `src` into `dst` ("non-linear type 3").
///
/// Samples `>= 0` are copied, negative samples `s` become `-shift - s`, wrapping.
/// Converts `src.len()` samples; any extra samples in `dst` are left untouched.
///
/// # Errors
///
/// - [`ConvertValidationError::OutputBufferTooSmall`] if `dst` is shorter than `src`
///
/// # Examples
///
/// ```
/// use lossless_colour_transform::convert_sign_fold;
/// # use lossless_colour_transform::ConvertValidationError;
///
/// # fn main() -> Result<(), ConvertValidationError> {
/// let samples = [5_i64, -1, -3];
/// let mut folded = [0_i64; 3];
/// convert_sign_fold(&samples, &mut folded, 1)?;
/// assert_eq!(folded, [5, 0, 2]);
/// # Ok(())
/// # }
/// ```
pub fn convert_sign_fold<S: LineSample>(
    src: &[S],
    dst: &mut [S],
    shift: S,
) -> Result<(), ConvertValidationError> {
    check_output(src.len(), dst.len()).map_err(|err| rejected("convert_sign_fold", err))?;

    // Safety: dst holds at least src.len() samples, and a shared and a mutable slice cannot overlap
    unsafe { S::convert_sign_fold_raw(src.as_ptr(), dst.as_mut_ptr(), shift, src.len()) };
    Ok(())
}

/// Sign-folds `samples` in place.
pub fn convert_sign_fold_in_place<S: LineSample>(samples: &mut [S], shift: S) {
    let ptr = samples.as_mut_ptr();
    // Safety: src == dst is allowed, and the slice is valid for its own length
    unsafe { S::convert_sign_fold_raw(ptr, ptr, shift, samples.len()) };
}

/// Level-shifts line `src` into line `dst`.
///
/// Both lines must be stored at the same width. `shift` is given at 64 bits; for
/// 32-bit lines only its low 32 bits are used.
///
/// # Errors
///
/// - [`ConvertValidationError::WidthClassMismatch`] if the lines differ in width
/// - [`ConvertValidationError::OutputBufferTooSmall`] if `dst` is shorter than `src`
pub fn convert_shift_line(
    src: Line<'_>,
    dst: &mut LineMut<'_>,
    shift: i64,
) -> Result<(), ConvertValidationError> {
    match (src.samples, &mut dst.samples) {
        (LineSamples::I32(src), LineSamplesMut::I32(dst)) => {
            ltrace!("convert_shift_line: 32-bit path, width {}", src.len());
            convert_shift::<i32>(src, dst, shift as i32)
        }
        (LineSamples::I64(src), LineSamplesMut::I64(dst)) => {
            ltrace!("convert_shift_line: 64-bit path, width {}", src.len());
            convert_shift::<i64>(src, dst, shift)
        }
        _ => Err(rejected(
            "convert_shift_line",
            ConvertValidationError::WidthClassMismatch,
        )),
    }
}

/// Sign-folds line `src` into line `dst`.
///
/// Both lines must be stored at the same width. `shift` is given at 64 bits; for
/// 32-bit lines only its low 32 bits are used.
///
/// # Errors
///
/// - [`ConvertValidationError::WidthClassMismatch`] if the lines differ in width
/// - [`ConvertValidationError::OutputBufferTooSmall`] if `dst` is shorter than `src`
pub fn convert_sign_fold_line(
    src: Line<'_>,
    dst: &mut LineMut<'_>,
    shift: i64,
) -> Result<(), ConvertValidationError> {
    match (src.samples, &mut dst.samples) {
        (LineSamples::I32(src), LineSamplesMut::I32(dst)) => {
            ltrace!("convert_sign_fold_line: 32-bit path, width {}", src.len());
            convert_sign_fold::<i32>(src, dst, shift as i32)
        }
        (LineSamples::I64(src), LineSamplesMut::I64(dst)) => {
            ltrace!("convert_sign_fold_line: 64-bit path, width {}", src.len());
            convert_sign_fold::<i64>(src, dst, shift)
        }
        _ => Err(rejected(
            "convert_sign_fold_line",
            ConvertValidationError::WidthClassMismatch,
        )),
    }
}

#[inline]
fn check_output(needed: usize, actual: usize) -> Result<(), ConvertValidationError> {
    if actual < needed {
        return Err(ConvertValidationError::OutputBufferTooSmall { needed, actual });
    }
    Ok(())
}
