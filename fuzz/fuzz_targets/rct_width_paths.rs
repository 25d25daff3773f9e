#![no_main]

// Checks that the 32-bit and widened backward colour transforms agree on decorrelated rows
// representable at both widths.

use libfuzzer_sys::{arbitrary, fuzz_target};
use lossless_colour_transform::rct_backward;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct DecorrelatedRows {
    pub samples: Vec<(i32, i32, i32)>,
}

fuzz_target!(|rows: DecorrelatedRows| {
    // 30-bit samples leave headroom for Cb + Cr and Cb + G at 32 bits.
    let y: Vec<i32> = rows.samples.iter().map(|sample| sample.0 >> 2).collect();
    let cb: Vec<i32> = rows.samples.iter().map(|sample| sample.1 >> 2).collect();
    let cr: Vec<i32> = rows.samples.iter().map(|sample| sample.2 >> 2).collect();
    let widen = |row: &[i32]| row.iter().map(|&sample| i64::from(sample)).collect::<Vec<_>>();
    let width = y.len();

    let (mut r32, mut g32, mut b32) = (vec![0; width], vec![0; width], vec![0; width]);
    rct_backward(&y, &cb, &cr, &mut r32, &mut g32, &mut b32).unwrap();

    let (mut r64, mut g64, mut b64) = (vec![0; width], vec![0; width], vec![0; width]);
    rct_backward(&widen(&y), &widen(&cb), &widen(&cr), &mut r64, &mut g64, &mut b64).unwrap();

    assert_eq!(
        (&r32, &g32, &b32),
        (&r64, &g64, &b64),
        "Width paths disagree for Y {y:?}, Cb {cb:?}, Cr {cr:?}"
    );
});
