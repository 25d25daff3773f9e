//! Lane-level operations on SIMD registers (and their scalar equivalents).
//!
//! Each operation has a portable scalar form, which the row kernels use as their reference
//! implementation and for row tails, plus one form per supported vector ISA.

pub mod arithmetic_shift;
pub mod lane_select;
pub mod repack;
