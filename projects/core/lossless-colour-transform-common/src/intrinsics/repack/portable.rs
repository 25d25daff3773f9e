use crate::sample::Sample;

/// Narrows `first` then `second` into `output`, keeping the low 32 bits of each sample.
///
/// `output` must hold exactly `first.len() + second.len()` samples.
#[inline]
pub fn repack_narrow(first: &[i64], second: &[i64], output: &mut [i32]) {
    debug_assert_eq!(
        output.len(),
        first.len() + second.len(),
        "output must hold both halves"
    );

    let (output_first, output_second) = output.split_at_mut(first.len());
    for (out, value) in output_first.iter_mut().zip(first) {
        *out = value.low_i32();
    }
    for (out, value) in output_second.iter_mut().zip(second) {
        *out = value.low_i32();
    }
}
