//! # Branchless Lane Select
//!
//! Vector units cannot branch per lane. Per-sample piecewise functions therefore compute
//! every branch for all lanes, build a mask that is all ones where the predicate holds
//! and all zeros elsewhere, and combine:
//!
//! ```text
//! result = (mask & if_set) | (!mask & if_clear)
//! ```
//!
//! The scalar form in [`portable`] performs the same mask arithmetic on single samples, so
//! scalar and vector kernels built on this module are structurally identical.

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod avx2;
