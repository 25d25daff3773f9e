#![no_main]

// Checks that the forward colour transform followed by the backward transform restores the
// original colour rows, for every width class. Narrow rows are clamped to the range where
// the 32-bit sums cannot overflow.

use libfuzzer_sys::{arbitrary, fuzz_target};
use lossless_colour_transform::{
    rct_backward_lines, rct_forward_lines, Line, LineMut, WidthClass,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct ColourRows {
    pub pixels: Vec<(i32, i32, i32)>,
}

fuzz_target!(|rows: ColourRows| {
    for &width_class in WidthClass::all_values() {
        // |x| < 2^29 keeps R + 2G + B and Cb + Cr inside i32.
        let fit = |value: i32| match width_class {
            WidthClass::Native32 => value >> 3,
            WidthClass::Widened64 => value,
        };
        let r: Vec<i32> = rows.pixels.iter().map(|pixel| fit(pixel.0)).collect();
        let g: Vec<i32> = rows.pixels.iter().map(|pixel| fit(pixel.1)).collect();
        let b: Vec<i32> = rows.pixels.iter().map(|pixel| fit(pixel.2)).collect();
        let width = r.len();

        let (mut r2, mut g2, mut b2) = (vec![0; width], vec![0; width], vec![0; width]);
        match width_class {
            WidthClass::Native32 => {
                let (mut y, mut cb, mut cr) = (vec![0; width], vec![0; width], vec![0; width]);
                rct_forward_lines(
                    Line::new_i32(&r, true),
                    Line::new_i32(&g, true),
                    Line::new_i32(&b, true),
                    &mut LineMut::new_i32(&mut y, true),
                    &mut LineMut::new_i32(&mut cb, true),
                    &mut LineMut::new_i32(&mut cr, true),
                )
                .unwrap();
                rct_backward_lines(
                    Line::new_i32(&y, true),
                    Line::new_i32(&cb, true),
                    Line::new_i32(&cr, true),
                    &mut LineMut::new_i32(&mut r2, true),
                    &mut LineMut::new_i32(&mut g2, true),
                    &mut LineMut::new_i32(&mut b2, true),
                )
                .unwrap();
            }
            WidthClass::Widened64 => {
                let (mut y, mut cb, mut cr) = (vec![0; width], vec![0; width], vec![0; width]);
                rct_forward_lines(
                    Line::new_i32(&r, true),
                    Line::new_i32(&g, true),
                    Line::new_i32(&b, true),
                    &mut LineMut::new_i64(&mut y, true),
                    &mut LineMut::new_i64(&mut cb, true),
                    &mut LineMut::new_i64(&mut cr, true),
                )
                .unwrap();
                rct_backward_lines(
                    Line::new_i64(&y, true),
                    Line::new_i64(&cb, true),
                    Line::new_i64(&cr, true),
                    &mut LineMut::new_i32(&mut r2, true),
                    &mut LineMut::new_i32(&mut g2, true),
                    &mut LineMut::new_i32(&mut b2, true),
                )
                .unwrap();
            }
        }

        assert_eq!(
            (&r, &g, &b),
            (&r2, &g2, &b2),
            "Round trip through {width_class:?} rows did not restore the colour rows"
        );
    }
});
