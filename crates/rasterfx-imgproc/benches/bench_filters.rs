use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rasterfx_image::{PixelBuffer, Rgb8};
use rasterfx_imgproc::engine::{FilterKind, ImageFilterEngine};
use rasterfx_imgproc::filter::{neighbor_average, neighbor_median, sobel_edges};

fn noisy_image(width: usize, height: usize) -> PixelBuffer {
    let pixels = (0..width * height)
        .map(|i| {
            let v = (i.wrapping_mul(2654435761) >> 7) as u8;
            Rgb8::new(v, v.wrapping_add(85), v.wrapping_add(170))
        })
        .collect::<Vec<_>>();
    PixelBuffer::from_pixels([width, height].into(), &pixels).unwrap()
}

fn bench_neighborhood(c: &mut Criterion) {
    let mut group = c.benchmark_group("Neighborhood");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image = noisy_image(*width, *height);
        let output = PixelBuffer::empty(image.size()).unwrap();

        group.bench_with_input(
            BenchmarkId::new("neighbor_average", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(neighbor_average(src, &mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("neighbor_median", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(neighbor_median(src, &mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sobel_edges", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(sobel_edges(src, &mut dst)))
            },
        );
    }

    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("Engine");

    let engine = ImageFilterEngine::new(noisy_image(512, 448));

    for kind in FilterKind::ALL {
        group.bench_with_input(BenchmarkId::new("apply", kind), &kind, |b, kind| {
            b.iter(|| black_box(engine.apply(*kind)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_neighborhood, bench_engine);
criterion_main!(benches);
