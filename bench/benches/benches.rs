use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use noise_core::{
    Fractal, FractalConfig, NoiseGenerator, OctaveLaw, Perlin, PerlinConfig, Point, Seamless2D,
};

const SIZE: usize = 128;
const SEED: u64 = 2025;

// Samples a SIZE×SIZE grid spanning `cells` noise cells per axis
fn sample_grid<G: NoiseGenerator<f32, 2>>(generator: &G, cells: f32) -> f32 {
    let mut total = 0.0;
    for y in 0..SIZE {
        for x in 0..SIZE {
            let p = Point::new([
                x as f32 / SIZE as f32 * cells,
                y as f32 / SIZE as f32 * cells,
            ]);
            total += generator.at(&p);
        }
    }
    total
}

fn bench_perlin_single_points(c: &mut Criterion) {
    let p2 = Perlin::<f32, 2>::new(SEED);
    let p3 = Perlin::<f32, 3>::new(SEED);
    let p4 = Perlin::<f32, 4>::new(SEED);

    c.bench_function("Perlin 2D at()", |b| {
        b.iter(|| p2.at(black_box(&Point::new([3.7, -1.2]))))
    });
    c.bench_function("Perlin 3D at()", |b| {
        b.iter(|| p3.at(black_box(&Point::new([3.7, -1.2, 0.4]))))
    });
    c.bench_function("Perlin 4D at()", |b| {
        b.iter(|| p4.at(black_box(&Point::new([3.7, -1.2, 0.4, 9.9]))))
    });
}

fn bench_smoothness_orders(c: &mut Criterion) {
    for smoothness in [1, 2, 5] {
        let perlin = Perlin::<f32, 2>::with_config(
            SEED,
            &PerlinConfig {
                smoothness,
                ..PerlinConfig::default()
            },
        )
        .expect("valid perlin config");
        c.bench_function(&format!("Perlin 2D grid, smoothness {smoothness}"), |b| {
            b.iter(|| sample_grid(&perlin, 6.0))
        });
    }
}

fn bench_fractal_grid(c: &mut Criterion) {
    let config = FractalConfig {
        octaves: 8,
        weight: OctaveLaw::Exponential { base: 0.5 },
        frequency: OctaveLaw::Exponential { base: 2.0 },
        ..FractalConfig::default()
    };
    let fractal = Fractal::<Perlin<f32, 2>, f32>::perlin(SEED, &PerlinConfig::default(), &config)
        .expect("valid fractal config");

    c.bench_function("Fractal 2D (8 octaves) grid", |b| {
        b.iter(|| sample_grid(&fractal, 6.0))
    });
}

fn bench_seamless_world(c: &mut Criterion) {
    let config = FractalConfig {
        octaves: 10,
        ..FractalConfig::default()
    };
    let world = Seamless2D::<Fractal<Perlin<f32, 4>, f32>, f32>::world(
        SEED,
        &PerlinConfig::default(),
        &config,
        6.0,
        4.0,
    )
    .expect("valid world config");

    c.bench_function("Seamless world (10 octaves) grid", |b| {
        b.iter(|| sample_grid(&world, 6.0))
    });
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("Perlin 4D construction", |b| {
        b.iter(|| Perlin::<f32, 4>::new(black_box(SEED)))
    });
}

criterion_group!(
    noise_benchmarks,
    bench_perlin_single_points,
    bench_smoothness_orders,
    bench_fractal_grid,
    bench_seamless_world,
    bench_construction
);
criterion_main!(noise_benchmarks);
