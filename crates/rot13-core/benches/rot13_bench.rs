use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rot13_core::{rot13, rot13_in_place};

fn random_ascii(rng: &mut ChaCha20Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.gen_range(0x20u8..0x7f)))
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let short = random_ascii(&mut rng, 64);
    let long = random_ascii(&mut rng, 4096);

    let mut group = c.benchmark_group("transform");
    group.bench_function("rot13_64", |b| {
        b.iter(|| rot13(&short));
    });
    group.bench_function("rot13_4096", |b| {
        b.iter(|| rot13(&long));
    });
    group.bench_function("rot13_in_place_4096", |b| {
        let bytes = long.as_bytes().to_vec();
        b.iter(|| {
            let mut data = bytes.clone();
            rot13_in_place(&mut data);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
