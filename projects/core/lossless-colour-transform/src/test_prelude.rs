//! Common test imports and utilities for kernel tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub use lossless_colour_transform_common::cpu_detect::*;
pub use lossless_colour_transform_common::sample::Sample;

pub use core::alloc::Layout;
pub use core::mem::size_of;
pub use core::ptr::{copy_nonoverlapping, read_unaligned};
pub use safe_allocator_api::RawAlloc;

/// Level-shift or sign-fold kernel: `(src, dst, shift, width)`.
pub(crate) type ConvertFn<S> = unsafe fn(*const S, *mut S, S, usize);

/// Backward colour transform kernel: `(y, cb, cr, r, g, b, repeat)`.
pub(crate) type RctBackwardFn<S> =
    unsafe fn(*const S, *const S, *const S, *mut i32, *mut i32, *mut i32, usize);

/// Forward colour transform kernel: `(r, g, b, y, cb, cr, repeat)`.
pub(crate) type RctForwardFn<S> =
    unsafe fn(*const i32, *const i32, *const i32, *mut S, *mut S, *mut S, usize);

/// Samples covering both signs, the extremes and the bounds of the narrow path.
pub(crate) const BOUNDARY_I32: [i32; 10] = [
    0,
    1,
    -1,
    -4,
    i32::MIN,
    i32::MAX,
    i32::MIN + 1,
    (1 << 29) - 1,
    -(1 << 29),
    0x5555_5555,
];

/// Samples covering both signs, the extremes and the edges of the 32-bit range.
pub(crate) const BOUNDARY_I64: [i64; 10] = [
    0,
    1,
    -1,
    -4,
    i64::MIN,
    i64::MAX,
    i32::MIN as i64,
    i32::MAX as i64,
    (i32::MAX as i64) + 1,
    -0x0123_4567_89AB_CDEF,
];

/// Deterministic xorshift64 sequence.
fn xorshift(seed: u64) -> impl Iterator<Item = u64> {
    let mut state = seed | 1;
    core::iter::repeat_with(move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    })
}

/// Generates a row of full-range 32-bit samples with a boundary value every 4th sample.
pub(crate) fn generate_row_i32(width: usize, seed: u64) -> Vec<i32> {
    xorshift(seed)
        .take(width)
        .enumerate()
        .map(|(index, value)| match index % 4 {
            0 => BOUNDARY_I32[(index / 4) % BOUNDARY_I32.len()],
            _ => value as i32,
        })
        .collect()
}

/// Generates a row of full-range 64-bit samples with a boundary value every 4th sample.
pub(crate) fn generate_row_i64(width: usize, seed: u64) -> Vec<i64> {
    xorshift(seed)
        .take(width)
        .enumerate()
        .map(|(index, value)| match index % 4 {
            0 => BOUNDARY_I64[(index / 4) % BOUNDARY_I64.len()],
            _ => value as i64,
        })
        .collect()
}

/// Generates a row of 32-bit samples in `[-2^(bits - 1), 2^(bits - 1))`.
pub(crate) fn generate_row_i32_bounded(width: usize, seed: u64, bits: u32) -> Vec<i32> {
    xorshift(seed)
        .take(width)
        .map(|value| (value as i32) >> (32 - bits))
        .collect()
}

/// Row generation per sample width.
pub(crate) trait TestSample: Sample {
    fn generate_row(width: usize, seed: u64) -> Vec<Self>;
}

impl TestSample for i32 {
    fn generate_row(width: usize, seed: u64) -> Vec<Self> {
        generate_row_i32(width, seed)
    }
}

impl TestSample for i64 {
    fn generate_row(width: usize, seed: u64) -> Vec<Self> {
        generate_row_i64(width, seed)
    }
}

/// Allocates data with an alignment of 64 bytes.
pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

/// Copies `row` into a fresh buffer one byte past a 64-byte boundary.
pub(crate) fn copy_unaligned<S: Copy>(row: &[S]) -> RawAlloc {
    let num_bytes = size_of::<S>() * row.len();
    let mut buffer = allocate_align_64(num_bytes + 1);
    unsafe {
        copy_nonoverlapping(
            row.as_ptr() as *const u8,
            buffer.as_mut_ptr().add(1),
            num_bytes,
        );
    }
    buffer
}

/// Allocates room for `len` samples one byte past a 64-byte boundary.
pub(crate) fn allocate_unaligned<S>(len: usize) -> RawAlloc {
    allocate_align_64(size_of::<S>() * len + 1)
}

/// Pointer to the misaligned samples of a buffer from [`copy_unaligned`].
pub(crate) fn unaligned_ptr<S>(buffer: &RawAlloc) -> *const S {
    unsafe { buffer.as_ptr().add(1) as *const S }
}

/// Mutable pointer to the misaligned samples of a buffer from [`allocate_unaligned`].
pub(crate) fn unaligned_mut_ptr<S>(buffer: &mut RawAlloc) -> *mut S {
    unsafe { buffer.as_mut_ptr().add(1) as *mut S }
}

/// Reads `len` misaligned samples back into a `Vec`.
pub(crate) fn read_unaligned_row<S: Copy>(buffer: &RawAlloc, len: usize) -> Vec<S> {
    let ptr = unaligned_ptr::<S>(buffer);
    (0..len)
        .map(|index| unsafe { read_unaligned(ptr.add(index)) })
        .collect()
}

/// Executes a converter on misaligned buffers for every width in `0..=max_width`,
/// both out of place and in place, comparing against `reference` on aligned buffers.
///
/// `max_width` should cover two full iterations of the kernel's main loop plus a tail.
#[inline]
pub(crate) fn run_convert_unaligned_test<S: TestSample>(
    convert_fn: ConvertFn<S>,
    reference: ConvertFn<S>,
    shift: S,
    max_width: usize,
    impl_name: &str,
) {
    for width in 0..=max_width {
        let src = S::generate_row(width, width as u64 + 1);
        let mut expected = vec![S::ZERO; width];
        unsafe { reference(src.as_ptr(), expected.as_mut_ptr(), shift, width) };

        let src_unaligned = copy_unaligned(&src);
        let mut dst_unaligned = allocate_unaligned::<S>(width);
        unsafe {
            convert_fn(
                unaligned_ptr(&src_unaligned),
                unaligned_mut_ptr(&mut dst_unaligned),
                shift,
                width,
            );
        }
        assert_eq!(
            expected,
            read_unaligned_row::<S>(&dst_unaligned, width),
            "{impl_name} differs from reference (unaligned) for width {width}, shift {shift:?}",
        );

        let mut in_place = copy_unaligned(&src);
        unsafe {
            let ptr = unaligned_mut_ptr::<S>(&mut in_place);
            convert_fn(ptr, ptr, shift, width);
        }
        assert_eq!(
            expected,
            read_unaligned_row::<S>(&in_place, width),
            "{impl_name} differs from reference (in place) for width {width}, shift {shift:?}",
        );
    }
}

/// Executes a backward colour transform on misaligned buffers for every row length in
/// `0..=max_repeat`, comparing against the scalar reference on aligned buffers.
#[inline]
pub(crate) fn run_rct_backward_unaligned_test<S: TestSample>(
    kernel: RctBackwardFn<S>,
    max_repeat: usize,
    impl_name: &str,
) {
    for repeat in 0..=max_repeat {
        let seed = repeat as u64 * 3;
        let y = S::generate_row(repeat, seed + 1);
        let cb = S::generate_row(repeat, seed + 2);
        let cr = S::generate_row(repeat, seed + 3);

        let (mut r, mut g, mut b) = (vec![0; repeat], vec![0; repeat], vec![0; repeat]);
        unsafe {
            crate::rct::backward::portable::rct_backward(
                y.as_ptr(),
                cb.as_ptr(),
                cr.as_ptr(),
                r.as_mut_ptr(),
                g.as_mut_ptr(),
                b.as_mut_ptr(),
                repeat,
            );
        }

        let (y_in, cb_in, cr_in) = (copy_unaligned(&y), copy_unaligned(&cb), copy_unaligned(&cr));
        let mut r_out = allocate_unaligned::<i32>(repeat);
        let mut g_out = allocate_unaligned::<i32>(repeat);
        let mut b_out = allocate_unaligned::<i32>(repeat);
        unsafe {
            kernel(
                unaligned_ptr(&y_in),
                unaligned_ptr(&cb_in),
                unaligned_ptr(&cr_in),
                unaligned_mut_ptr(&mut r_out),
                unaligned_mut_ptr(&mut g_out),
                unaligned_mut_ptr(&mut b_out),
                repeat,
            );
        }

        assert_eq!(r, read_unaligned_row::<i32>(&r_out, repeat), "{impl_name} R mismatch, repeat {repeat}");
        assert_eq!(g, read_unaligned_row::<i32>(&g_out, repeat), "{impl_name} G mismatch, repeat {repeat}");
        assert_eq!(b, read_unaligned_row::<i32>(&b_out, repeat), "{impl_name} B mismatch, repeat {repeat}");
    }
}

/// Executes a forward colour transform on misaligned buffers for every row length in
/// `0..=max_repeat`, comparing against the scalar reference on aligned buffers.
#[inline]
pub(crate) fn run_rct_forward_unaligned_test<S: TestSample>(
    kernel: RctForwardFn<S>,
    max_repeat: usize,
    impl_name: &str,
) {
    for repeat in 0..=max_repeat {
        let seed = repeat as u64 * 3;
        let r = generate_row_i32(repeat, seed + 1);
        let g = generate_row_i32(repeat, seed + 2);
        let b = generate_row_i32(repeat, seed + 3);

        let mut y = vec![S::ZERO; repeat];
        let mut cb = vec![S::ZERO; repeat];
        let mut cr = vec![S::ZERO; repeat];
        unsafe {
            crate::rct::forward::portable::rct_forward(
                r.as_ptr(),
                g.as_ptr(),
                b.as_ptr(),
                y.as_mut_ptr(),
                cb.as_mut_ptr(),
                cr.as_mut_ptr(),
                repeat,
            );
        }

        let (r_in, g_in, b_in) = (copy_unaligned(&r), copy_unaligned(&g), copy_unaligned(&b));
        let mut y_out = allocate_unaligned::<S>(repeat);
        let mut cb_out = allocate_unaligned::<S>(repeat);
        let mut cr_out = allocate_unaligned::<S>(repeat);
        unsafe {
            kernel(
                unaligned_ptr(&r_in),
                unaligned_ptr(&g_in),
                unaligned_ptr(&b_in),
                unaligned_mut_ptr(&mut y_out),
                unaligned_mut_ptr(&mut cb_out),
                unaligned_mut_ptr(&mut cr_out),
                repeat,
            );
        }

        assert_eq!(y, read_unaligned_row::<S>(&y_out, repeat), "{impl_name} Y mismatch, repeat {repeat}");
        assert_eq!(cb, read_unaligned_row::<S>(&cb_out, repeat), "{impl_name} Cb mismatch, repeat {repeat}");
        assert_eq!(cr, read_unaligned_row::<S>(&cr_out, repeat), "{impl_name} Cr mismatch, repeat {repeat}");
    }
}
