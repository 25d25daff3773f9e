//! Reversible colour transform (safe wrappers).

use super::{rejected, LineSample};
use crate::line::{Line, LineMut, LineSamples, LineSamplesMut};
use thiserror::Error;

/// Validation errors for the reversible colour transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RctValidationError {
    /// An input row has a different length from the first input row.
    #[error("Input row length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the first input row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// An output row is too small to hold the transformed samples.
    #[error("Output buffer too small: needed {needed} samples, got {actual}")]
    OutputBufferTooSmall {
        /// Number of samples per input row.
        needed: usize,
        /// Number of samples the smallest output row can hold.
        actual: usize,
    },

    /// A line belongs to an irreversibly coded component.
    #[error("Line is not reversible, the integer colour transform does not apply")]
    NotReversible,

    /// The three rows on one side of the transform are stored at different widths.
    #[error("Rows of one colour triple are stored at different widths")]
    MixedWidthClass,

    /// Colour rows must be 32-bit; decorrelated rows may be 32-bit or 64-bit.
    #[error("Unsupported width pair: colour rows must be 32-bit")]
    UnsupportedWidthPair,
}

/// Reconstructs `R`, `G` and `B` rows from decorrelated `Y`, `Cb` and `Cr` rows.
///
/// `S = i32` runs the 32-bit path, `S = i64` the widened path. Transforms `y.len()` samples;
/// any extra samples in the output rows are left untouched.
///
/// # Errors
///
/// - [`RctValidationError::LengthMismatch`] if `cb` or `cr` differs in length from `y`
/// - [`RctValidationError::OutputBufferTooSmall`] if an output row is shorter than `y`
///
/// # Examples
///
/// ```
/// use lossless_colour_transform::rct_backward;
/// # use lossless_colour_transform::RctValidationError;
///
/// # fn main() -> Result<(), RctValidationError> {
/// let (y, cb, cr) = ([10_i64], [2_i64], [-1_i64]);
/// let (mut r, mut g, mut b) = ([0], [0], [0]);
/// rct_backward(&y, &cb, &cr, &mut r, &mut g, &mut b)?;
/// assert_eq!((r, g, b), ([9], [10], [12]));
/// # Ok(())
/// # }
/// ```
pub fn rct_backward<S: LineSample>(
    y: &[S],
    cb: &[S],
    cr: &[S],
    r: &mut [i32],
    g: &mut [i32],
    b: &mut [i32],
) -> Result<(), RctValidationError> {
    let repeat = check_rows(
        [y.len(), cb.len(), cr.len()],
        [r.len(), g.len(), b.len()],
    )
    .map_err(|err| rejected("rct_backward", err))?;

    // Safety: every row was checked to hold `repeat` samples, and the borrows guarantee
    // the output rows are disjoint from each other and from the inputs
    unsafe {
        S::rct_backward_raw(
            y.as_ptr(),
            cb.as_ptr(),
            cr.as_ptr(),
            r.as_mut_ptr(),
            g.as_mut_ptr(),
            b.as_mut_ptr(),
            repeat,
        );
    }
    Ok(())
}

/// Decorrelates `R`, `G` and `B` rows into `Y`, `Cb` and `Cr` rows.
///
/// `S = i32` writes 32-bit rows, `S = i64` widened rows. Transforms `r.len()` samples;
/// any extra samples in the output rows are left untouched.
///
/// # Errors
///
/// - [`RctValidationError::LengthMismatch`] if `g` or `b` differs in length from `r`
/// - [`RctValidationError::OutputBufferTooSmall`] if an output row is shorter than `r`
pub fn rct_forward<S: LineSample>(
    r: &[i32],
    g: &[i32],
    b: &[i32],
    y: &mut [S],
    cb: &mut [S],
    cr: &mut [S],
) -> Result<(), RctValidationError> {
    let repeat = check_rows(
        [r.len(), g.len(), b.len()],
        [y.len(), cb.len(), cr.len()],
    )
    .map_err(|err| rejected("rct_forward", err))?;

    // Safety: every row was checked to hold `repeat` samples, and the borrows guarantee
    // the output rows are disjoint from each other and from the inputs
    unsafe {
        S::rct_forward_raw(
            r.as_ptr(),
            g.as_ptr(),
            b.as_ptr(),
            y.as_mut_ptr(),
            cb.as_mut_ptr(),
            cr.as_mut_ptr(),
            repeat,
        );
    }
    Ok(())
}

/// Reconstructs `R`, `G` and `B` lines from `Y`, `Cb` and `Cr` lines.
///
/// The width path follows the decorrelated lines: 32-bit input takes the narrow path,
/// 64-bit input the widened one. Output lines are always 32-bit.
///
/// # Errors
///
/// - [`RctValidationError::NotReversible`] if any of the six lines is not reversible
/// - [`RctValidationError::MixedWidthClass`] if `y`, `cb` and `cr` differ in width
/// - [`RctValidationError::UnsupportedWidthPair`] if an output line is not 32-bit
/// - [`RctValidationError::LengthMismatch`] / [`RctValidationError::OutputBufferTooSmall`]
///   as for [`rct_backward`]
pub fn rct_backward_lines(
    y: Line<'_>,
    cb: Line<'_>,
    cr: Line<'_>,
    r: &mut LineMut<'_>,
    g: &mut LineMut<'_>,
    b: &mut LineMut<'_>,
) -> Result<(), RctValidationError> {
    let all_reversible = y.reversible
        && cb.reversible
        && cr.reversible
        && r.reversible
        && g.reversible
        && b.reversible;
    if !all_reversible {
        return Err(rejected(
            "rct_backward_lines",
            RctValidationError::NotReversible,
        ));
    }

    let (r, g, b) = match (&mut r.samples, &mut g.samples, &mut b.samples) {
        (LineSamplesMut::I32(r), LineSamplesMut::I32(g), LineSamplesMut::I32(b)) => (r, g, b),
        _ => {
            return Err(rejected(
                "rct_backward_lines",
                RctValidationError::UnsupportedWidthPair,
            ))
        }
    };

    match (y.samples, cb.samples, cr.samples) {
        (LineSamples::I32(y), LineSamples::I32(cb), LineSamples::I32(cr)) => {
            ltrace!("rct_backward_lines: 32-bit path, width {}", y.len());
            rct_backward::<i32>(y, cb, cr, r, g, b)
        }
        (LineSamples::I64(y), LineSamples::I64(cb), LineSamples::I64(cr)) => {
            ltrace!("rct_backward_lines: widened 64-bit path, width {}", y.len());
            rct_backward::<i64>(y, cb, cr, r, g, b)
        }
        _ => Err(rejected(
            "rct_backward_lines",
            RctValidationError::MixedWidthClass,
        )),
    }
}

/// Decorrelates `R`, `G` and `B` lines into `Y`, `Cb` and `Cr` lines.
///
/// Colour lines must be 32-bit. The output lines pick the path: 32-bit output is
/// computed at 32 bits, 64-bit output is widened before any arithmetic.
///
/// # Errors
///
/// - [`RctValidationError::NotReversible`] if any of the six lines is not reversible
/// - [`RctValidationError::UnsupportedWidthPair`] if an input line is not 32-bit
/// - [`RctValidationError::MixedWidthClass`] if `y`, `cb` and `cr` differ in width
/// - [`RctValidationError::LengthMismatch`] / [`RctValidationError::OutputBufferTooSmall`]
///   as for [`rct_forward`]
pub fn rct_forward_lines(
    r: Line<'_>,
    g: Line<'_>,
    b: Line<'_>,
    y: &mut LineMut<'_>,
    cb: &mut LineMut<'_>,
    cr: &mut LineMut<'_>,
) -> Result<(), RctValidationError> {
    let all_reversible = r.reversible
        && g.reversible
        && b.reversible
        && y.reversible
        && cb.reversible
        && cr.reversible;
    if !all_reversible {
        return Err(rejected(
            "rct_forward_lines",
            RctValidationError::NotReversible,
        ));
    }

    let (r, g, b) = match (r.samples, g.samples, b.samples) {
        (LineSamples::I32(r), LineSamples::I32(g), LineSamples::I32(b)) => (r, g, b),
        _ => {
            return Err(rejected(
                "rct_forward_lines",
                RctValidationError::UnsupportedWidthPair,
            ))
        }
    };

    match (&mut y.samples, &mut cb.samples, &mut cr.samples) {
        (LineSamplesMut::I32(y), LineSamplesMut::I32(cb), LineSamplesMut::I32(cr)) => {
            ltrace!("rct_forward_lines: 32-bit path, width {}", r.len());
            rct_forward::<i32>(r, g, b, y, cb, cr)
        }
        (LineSamplesMut::I64(y), LineSamplesMut::I64(cb), LineSamplesMut::I64(cr)) => {
            ltrace!("rct_forward_lines: widening 64-bit path, width {}", r.len());
            rct_forward::<i64>(r, g, b, y, cb, cr)
        }
        _ => Err(rejected(
            "rct_forward_lines",
            RctValidationError::MixedWidthClass,
        )),
    }
}

/// Checks that all inputs share one length and every output holds it.
#[inline]
fn check_rows(inputs: [usize; 3], outputs: [usize; 3]) -> Result<usize, RctValidationError> {
    let repeat = inputs[0];
    if let Some(&actual) = inputs.iter().find(|&&len| len != repeat) {
        return Err(RctValidationError::LengthMismatch {
            expected: repeat,
            actual,
        });
    }

    let smallest = outputs.iter().copied().min().unwrap_or(repeat);
    if smallest < repeat {
        return Err(RctValidationError::OutputBufferTooSmall {
            needed: repeat,
            actual: smallest,
        });
    }

    Ok(repeat)
}
