use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rastergrid_image::{Image, ImageSize};
use rastergrid_interp::{resize_grid, resize_image, InterpolationMode, RectangularGrid};

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    let image_sizes = vec![(64, 48), (256, 224), (512, 448)];

    for (width, height) in image_sizes {
        let image_size = ImageSize { width, height };
        let id = format!("{}x{}", width, height);
        let image = Image::<u8, 3>::new(
            image_size,
            (0..width * height * 3).map(|i| (i % 256) as u8).collect(),
        )
        .unwrap();
        let (new_width, new_height) = (width / 2, height / 2);

        group.bench_with_input(BenchmarkId::new("image_u8", &id), &image, |b, i| {
            b.iter(|| resize_image(black_box(i), new_height, new_width, "bilinear"))
        });

        let grids = RectangularGrid::from_image(&image).unwrap();
        group.bench_with_input(BenchmarkId::new("grid_f32", &id), &grids[0], |b, g| {
            b.iter(|| {
                resize_grid(
                    black_box(g),
                    new_height,
                    new_width,
                    InterpolationMode::Bilinear,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
