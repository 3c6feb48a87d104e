use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use warpkit_image::Image;
use warpkit_imgproc::{
    interpolation::{BorderMode, InterpolationMode},
    parallel::ExecutionStrategy,
    warp::{warp_affine_with, AffineMatrix},
};

fn bench_warp_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpAffine");
    let mut rng = rand::rng();

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let data = (0..width * height * 3).map(|_| rng.random::<u8>()).collect();
        let image = Image::<u8, 3>::new(image_size, data).unwrap();

        // output image
        let output = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();
        let m = AffineMatrix::from_rotation(45.0, (*width as f64 / 2.0, *height as f64 / 2.0))
            .unwrap();

        for (name, interpolation, strategy) in [
            ("bilinear_par", InterpolationMode::Bilinear, ExecutionStrategy::ParallelRows),
            ("bilinear_serial", InterpolationMode::Bilinear, ExecutionStrategy::Serial),
            ("nearest_par", InterpolationMode::Nearest, ExecutionStrategy::ParallelRows),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &(&image, &output, m),
                |b, i| {
                    let (src, mut dst, m) = (i.0, i.1.clone(), i.2);
                    b.iter(|| {
                        warp_affine_with(
                            black_box(src),
                            black_box(&mut dst),
                            black_box(&m),
                            black_box(interpolation),
                            black_box(BorderMode::default()),
                            black_box(strategy),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_warp_affine);
criterion_main!(benches);
