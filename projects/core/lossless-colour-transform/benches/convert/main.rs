use core::{alloc::Layout, time::Duration};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lossless_colour_transform::bench::convert::*;
use safe_allocator_api::RawAlloc;
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

type ConvertFn = unsafe fn(*const i32, *mut i32, i32, usize);

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn bench_convert(
    b: &mut criterion::Bencher,
    input: &RawAlloc,
    output: &mut RawAlloc,
    width: usize,
    kernel: ConvertFn,
) {
    b.iter(|| unsafe {
        kernel(
            black_box(input.as_ptr() as *const i32),
            black_box(output.as_mut_ptr() as *mut i32),
            black_box(-128),
            black_box(width),
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sample Conversion");
    let width = 4096 * 64;
    let mut input = allocate_align_64(width * 4);
    let mut output = allocate_align_64(width * 4);

    // Alternate signs so the sign fold takes both branches.
    for (index, chunk) in input.as_mut_slice().chunks_exact_mut(4).enumerate() {
        let sample = if index % 2 == 0 { index as i32 } else { -(index as i32) };
        chunk.copy_from_slice(&sample.to_ne_bytes());
    }

    group.throughput(criterion::Throughput::Elements(width as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(15));

    let mut kernels: Vec<(&str, ConvertFn)> = vec![
        ("portable shift", portable_shift_i32 as ConvertFn),
        ("portable sign fold", portable_sign_fold_i32 as ConvertFn),
    ];

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if is_x86_feature_detected!("sse2") {
            kernels.push(("sse2 shift", sse2_shift_i32 as ConvertFn));
            kernels.push(("sse2 sign fold", sse2_sign_fold_i32 as ConvertFn));
        }

        if is_x86_feature_detected!("avx2") {
            kernels.push(("avx2 shift", avx2_shift_i32 as ConvertFn));
            kernels.push(("avx2 sign fold", avx2_sign_fold_i32 as ConvertFn));
        }
    }

    for (name, kernel) in kernels {
        group.bench_with_input(BenchmarkId::new(name, width), &width, |b, _| {
            bench_convert(b, &input, &mut output, width, kernel)
        });
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
