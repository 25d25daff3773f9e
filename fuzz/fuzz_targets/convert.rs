#![no_main]

// Checks the level shift and sign fold converters against their per-sample definitions,
// out of place and in place, at both sample widths.

use libfuzzer_sys::{arbitrary, fuzz_target};
use lossless_colour_transform::{
    convert_shift, convert_shift_in_place, convert_sign_fold, convert_sign_fold_in_place,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct ConvertInput {
    pub narrow: Vec<i32>,
    pub narrow_shift: i32,
    pub wide: Vec<i64>,
    pub wide_shift: i64,
}

fuzz_target!(|input: ConvertInput| {
    let ConvertInput {
        narrow,
        narrow_shift,
        wide,
        wide_shift,
    } = input;

    // Level shift
    let expected: Vec<i32> = narrow.iter().map(|s| s.wrapping_add(narrow_shift)).collect();
    let mut output = vec![0; narrow.len()];
    convert_shift(&narrow, &mut output, narrow_shift).unwrap();
    assert_eq!(output, expected);
    let mut in_place = narrow.clone();
    convert_shift_in_place(&mut in_place, narrow_shift);
    assert_eq!(in_place, expected);

    let expected: Vec<i64> = wide.iter().map(|s| s.wrapping_add(wide_shift)).collect();
    let mut output = vec![0; wide.len()];
    convert_shift(&wide, &mut output, wide_shift).unwrap();
    assert_eq!(output, expected);

    // Sign fold
    let fold = |s: i32| if s >= 0 { s } else { narrow_shift.wrapping_neg().wrapping_sub(s) };
    let expected: Vec<i32> = narrow.iter().map(|&s| fold(s)).collect();
    let mut output = vec![0; narrow.len()];
    convert_sign_fold(&narrow, &mut output, narrow_shift).unwrap();
    assert_eq!(output, expected);

    let fold = |s: i64| if s >= 0 { s } else { wide_shift.wrapping_neg().wrapping_sub(s) };
    let expected: Vec<i64> = wide.iter().map(|&s| fold(s)).collect();
    let mut in_place = wide;
    convert_sign_fold_in_place(&mut in_place, wide_shift);
    assert_eq!(in_place, expected);
});
