use criterion::{Criterion, criterion_group, criterion_main};
use snoise::utils::{flatten2, to_gray_image, to_unit};
use snoise::{NoiseGenerator, Simplex3D, SliceSpec, VolumeSpec, sample_slice, sample_volume};
use std::hint::black_box;

const SIZE: usize = 257;
const SEED: f64 = 2025.0;

fn bench_single_sample(c: &mut Criterion) {
    let noise = Simplex3D::default();
    c.bench_function("Simplex3D single sample", |b| {
        b.iter(|| noise.sample(black_box(12.3), black_box(-4.56), black_box(78.9)))
    });
}

fn bench_trait_object(c: &mut Criterion) {
    let noise: Box<dyn NoiseGenerator> = Box::new(Simplex3D::new(SEED).unwrap());
    c.bench_function("Simplex3D via dyn NoiseGenerator", |b| {
        b.iter(|| noise.get3(black_box(12.3), black_box(-4.56), black_box(78.9)))
    });
}

fn bench_slice_pipeline(c: &mut Criterion) {
    c.bench_function("Simplex3D slice + remap + flatten + image", |b| {
        b.iter(|| {
            let noise = Simplex3D::new(SEED).unwrap();
            let spec = SliceSpec {
                size: SIZE,
                frequency: 4.0,
                origin: [0.0, 0.0, 0.5],
            };
            let mut map = sample_slice(&noise, &spec).unwrap();
            to_unit(&mut map);
            let _flat = flatten2(&map);
            let _img = to_gray_image(&map);
        })
    });
}

fn bench_volume(c: &mut Criterion) {
    c.bench_function("Simplex3D 32^3 volume", |b| {
        let noise = Simplex3D::new(SEED).unwrap();
        let spec = VolumeSpec {
            dims: [32, 32, 32],
            spacing: 0.125,
            origin: [0.0, 0.0, 0.0],
        };
        b.iter(|| sample_volume(&noise, &spec).unwrap())
    });
}

criterion_group!(
    noise_benchmarks,
    bench_single_sample,
    bench_trait_object,
    bench_slice_pipeline,
    bench_volume
);
criterion_main!(noise_benchmarks);
