//! # Reversible Colour Transform
//!
//! The integer colour transform of lossless JPEG 2000, decorrelating a device RGB triple
//! into a luma row `Y` and two chroma difference rows `Cb` and `Cr`:
//!
//! ```text
//! forward                        backward
//! Y  = (R + 2G + B) >> 2         G = Y - ((Cb + Cr) >> 2)
//! Cb = B - G                     B = Cb + G
//! Cr = R - G                     R = Cr + G
//! ```
//!
//! `>>` is an arithmetic shift, i.e. floor division by 4. Truncating towards zero would
//! break invertibility for negative sums.
//!
//! ## Width Paths
//!
//! Colour rows are always 32-bit. Decorrelated rows are stored either at 32 bits
//! ([`rct_backward_32`], [`rct_forward_32`]) or widened to 64 bits when the component bit
//! depth leaves no headroom for `R + 2G + B` ([`rct_backward_64`], [`rct_forward_64`]).
//! The widened backward path computes in 64 bits and keeps the low 32 bits of each result.
//!
//! All arithmetic wraps. The 32-bit path round-trips exactly while `|sample| < 2^29`,
//! the widened path for every `i32`.

pub(crate) mod backward;
pub(crate) mod forward;

pub use backward::{rct_backward_32, rct_backward_64};
pub use forward::{rct_forward_32, rct_forward_64};
