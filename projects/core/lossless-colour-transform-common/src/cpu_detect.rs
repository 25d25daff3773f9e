//! Helpers for CPU feature detection without using std.
//!
//! Backed by the `cpufeatures` crate. Each check runs `cpuid` once and caches the answer,
//! every later call is a load and compare, so kernels can dispatch per row.

/// Checks if the CPU supports AVX512F (AVX-512 Foundation) instructions.
///
/// Only available with the `nightly` feature.
#[inline]
#[cfg(feature = "nightly")]
pub fn has_avx512f() -> bool {
    cpufeatures::new!(cpuid_avx512f, "avx512f");
    cpuid_avx512f::get()
}

/// Checks if the CPU supports AVX512VL (AVX-512 Vector Length) instructions.
///
/// AVX512VL exposes the AVX-512 operations on 256-bit registers. The widened colour
/// transform uses it for a native 64-bit arithmetic shift, which plain AVX2 lacks.
///
/// Only available with the `nightly` feature.
#[inline]
#[cfg(feature = "nightly")]
pub fn has_avx512vl() -> bool {
    cpufeatures::new!(cpuid_avx512vl, "avx512vl");
    cpuid_avx512vl::get()
}

/// Checks if the CPU supports AVX2 (Advanced Vector Extensions 2) instructions.
///
/// AVX2 provides 256-bit integer SIMD, i.e. 8 samples per register at 32-bit width
/// and 4 at 64-bit width.
#[inline]
pub fn has_avx2() -> bool {
    cpufeatures::new!(cpuid_avx2, "avx2");
    cpuid_avx2::get()
}

/// Checks if the CPU supports SSE2 (Streaming SIMD Extensions 2) instructions.
///
/// SSE2 is available on virtually every x86-64 processor and is the baseline SIMD tier.
#[inline]
pub fn has_sse2() -> bool {
    cpufeatures::new!(cpuid_sse2, "sse2");
    cpuid_sse2::get()
}
