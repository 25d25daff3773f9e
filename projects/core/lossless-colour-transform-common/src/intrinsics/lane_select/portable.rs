use crate::sample::Sample;

/// Picks `if_set` where `mask` is all ones and `if_clear` where it is all zeros.
#[inline(always)]
pub fn select<S: Sample>(mask: S, if_set: S, if_clear: S) -> S {
    (mask & if_set) | (!mask & if_clear)
}

/// All ones for samples `>= 0`, all zeros for negative samples.
///
/// Built from a greater-than and an equality compare, the two compares SIMD integer units have.
#[inline(always)]
pub fn non_negative_mask<S: Sample>(value: S) -> S {
    S::mask(value > S::ZERO) | S::mask(value == S::ZERO)
}
