#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
// Not yet in stable today, but will be in 1.89.0
#![allow(stable_features)]
#![cfg_attr(
    all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")),
    feature(stdarch_x86_avx512)
)]
#![warn(missing_docs)]

#[macro_use]
mod log;

pub mod convert;
pub mod line;
pub mod rct;
pub mod safe;

#[cfg(feature = "bench")]
pub mod bench;

pub use line::{Line, LineFlags, LineMut, LineSamples, LineSamplesMut, WidthClass};
pub use lossless_colour_transform_common::sample::Sample;
pub use safe::*;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;

#[cfg(test)]
mod tests;
