//! Benchmarks for the AES-128 block cipher
//!
//! Covers key expansion for both schedule directions, single block
//! encryption and decryption, and multi-block throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use xcrypt_algorithms::accel::Portable;
use xcrypt_algorithms::block::{Aes128, Aes128Dec, Aes128Enc, BlockCipher};
use xcrypt_algorithms::types::SecretBytes;

fn bench_key_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes128_key_expansion");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key_bytes = [0u8; 16];
    rng.fill(&mut key_bytes);
    let key = SecretBytes::new(key_bytes);

    group.bench_function("encrypt_schedule", |b| {
        b.iter(|| {
            let enc = Aes128Enc::<Portable>::new(black_box(&key)).unwrap();
            black_box(enc);
        });
    });

    group.bench_function("decrypt_schedule", |b| {
        b.iter(|| {
            let dec = Aes128Dec::<Portable>::new(black_box(&key)).unwrap();
            black_box(dec);
        });
    });

    group.finish();
}

fn bench_single_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes128_block");
    group.throughput(Throughput::Bytes(16));

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let key = Aes128::<Portable>::generate_key(&mut rng);
    let cipher = Aes128::<Portable>::new(&key).unwrap();

    let mut block = [0u8; 16];
    rng.fill(&mut block);

    group.bench_function("encrypt", |b| {
        b.iter(|| {
            let mut work = block;
            cipher.encrypt_block(black_box(&mut work)).unwrap();
            black_box(work);
        });
    });

    group.bench_function("decrypt", |b| {
        b.iter(|| {
            let mut work = block;
            cipher.decrypt_block(black_box(&mut work)).unwrap();
            black_box(work);
        });
    });

    group.finish();
}

fn bench_multi_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes128_throughput");

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let key = Aes128::<Portable>::generate_key(&mut rng);
    let cipher = Aes128::<Portable>::new(&key).unwrap();

    for &blocks in &[16usize, 64, 256] {
        let size = blocks * 16;
        let mut data = vec![0u8; size];
        rng.fill(&mut data[..]);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &data, |b, data| {
            b.iter(|| {
                let mut work = data.clone();
                for block in work.chunks_exact_mut(16) {
                    cipher.encrypt_block(block).unwrap();
                }
                black_box(work);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_key_expansion,
    bench_single_block,
    bench_multi_block
);
criterion_main!(benches);
