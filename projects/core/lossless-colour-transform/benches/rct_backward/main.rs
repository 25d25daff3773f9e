use core::{alloc::Layout, time::Duration};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lossless_colour_transform::bench::rct_backward::*;
use safe_allocator_api::RawAlloc;
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

type Narrow = unsafe fn(*const i32, *const i32, *const i32, *mut i32, *mut i32, *mut i32, usize);
type Widened = unsafe fn(*const i64, *const i64, *const i64, *mut i32, *mut i32, *mut i32, usize);

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

/// Three decorrelated planes plus three colour planes for one `repeat`-sample row set.
struct Planes {
    inputs: [RawAlloc; 3],
    outputs: [RawAlloc; 3],
}

impl Planes {
    fn new(repeat: usize, sample_size: usize) -> Self {
        let mut inputs = [
            allocate_align_64(repeat * sample_size),
            allocate_align_64(repeat * sample_size),
            allocate_align_64(repeat * sample_size),
        ];
        // Small values, so both width paths see the same workload.
        for (plane, input) in inputs.iter_mut().enumerate() {
            for (index, byte) in input.as_mut_slice().iter_mut().enumerate() {
                *byte = if index % sample_size == 0 {
                    (index / sample_size + plane) as u8 & 0x7F
                } else {
                    0
                };
            }
        }

        Self {
            inputs,
            outputs: [
                allocate_align_64(repeat * 4),
                allocate_align_64(repeat * 4),
                allocate_align_64(repeat * 4),
            ],
        }
    }
}

fn bench_narrow(b: &mut criterion::Bencher, planes: &mut Planes, repeat: usize, kernel: Narrow) {
    let [y, cb, cr] = &planes.inputs;
    let [r, g, bl] = &mut planes.outputs;
    b.iter(|| unsafe {
        kernel(
            black_box(y.as_ptr() as *const i32),
            black_box(cb.as_ptr() as *const i32),
            black_box(cr.as_ptr() as *const i32),
            black_box(r.as_mut_ptr() as *mut i32),
            black_box(g.as_mut_ptr() as *mut i32),
            black_box(bl.as_mut_ptr() as *mut i32),
            black_box(repeat),
        )
    });
}

fn bench_widened(b: &mut criterion::Bencher, planes: &mut Planes, repeat: usize, kernel: Widened) {
    let [y, cb, cr] = &planes.inputs;
    let [r, g, bl] = &mut planes.outputs;
    b.iter(|| unsafe {
        kernel(
            black_box(y.as_ptr() as *const i64),
            black_box(cb.as_ptr() as *const i64),
            black_box(cr.as_ptr() as *const i64),
            black_box(r.as_mut_ptr() as *mut i32),
            black_box(g.as_mut_ptr() as *mut i32),
            black_box(bl.as_mut_ptr() as *mut i32),
            black_box(repeat),
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("RCT Backward");
    let repeat = 4096 * 64; // 64 rows of a 4096px wide image
    let mut narrow = Planes::new(repeat, 4);
    let mut widened = Planes::new(repeat, 8);

    group.throughput(criterion::Throughput::Elements(repeat as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(15));

    let mut narrow_kernels: Vec<(&str, Narrow)> = vec![("portable 32", portable_32 as Narrow)];
    let mut widened_kernels: Vec<(&str, Widened)> = vec![("portable 64", portable_64 as Widened)];

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if is_x86_feature_detected!("sse2") {
            narrow_kernels.push(("sse2 32", sse2_32 as Narrow));
            widened_kernels.push(("sse2 64", sse2_64 as Widened));
        }

        if is_x86_feature_detected!("avx2") {
            narrow_kernels.push(("avx2 32", avx2_32 as Narrow));
            widened_kernels.push(("avx2 64", avx2_64 as Widened));
        }

        #[cfg(feature = "nightly")]
        if is_x86_feature_detected!("avx512f") && is_x86_feature_detected!("avx512vl") {
            widened_kernels.push(("avx512 64", avx512_64 as Widened));
        }
    }

    for (name, kernel) in narrow_kernels {
        group.bench_with_input(BenchmarkId::new(name, repeat), &repeat, |b, _| {
            bench_narrow(b, &mut narrow, repeat, kernel)
        });
    }

    for (name, kernel) in widened_kernels {
        group.bench_with_input(BenchmarkId::new(name, repeat), &repeat, |b, _| {
            bench_widened(b, &mut widened, repeat, kernel)
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
