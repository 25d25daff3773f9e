//! # Narrowing Widened Lanes
//!
//! Rows stored at 64-bit width hold half as many samples per register as 32-bit rows.
//! A kernel reading widened input and writing 32-bit output therefore computes two
//! registers of results (`A`, covering row indices `0..N`, and `B`, covering `N..2N`)
//! for every register it stores. Repacking keeps the low 32 bits of every lane and
//! concatenates in row order:
//!
//! ```text
//! A: [A0 .. ..|A1 .. ..|A2 .. ..|A3 .. ..]     (4 x i64)
//! B: [B0 .. ..|B1 .. ..|B2 .. ..|B3 .. ..]     (4 x i64)
//!                      |
//!                      v
//!    [A0|A1|A2|A3|B0|B1|B2|B3]                 (8 x i32)
//! ```
//!
//! Only the high half of each lane is dropped. Callers guarantee the true value already
//! fits in 32 bits, the widening was only needed for intermediate arithmetic.

pub mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod avx2;
