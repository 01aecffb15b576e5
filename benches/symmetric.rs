use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use microsui_crypto::derivation::{Argon2Config, Argon2Extras, Argon2Inputs, Block, WorkArea, argon2};
use microsui_crypto::encryption::aead::lock;
use microsui_crypto::encryption::chacha20::chacha20_x;
use microsui_crypto::encryption::poly1305::poly1305;
use microsui_crypto::hash::{blake2b, hmac_sha512, sha512};
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

pub fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");
    let key = [7u8; 32];
    let nonce = [9u8; 24];

    for size in SIZES {
        let input = vec![0u8; size];
        let mut out = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("xchacha20 {size} bytes"), |b| {
            b.iter(|| chacha20_x(&mut out, Some(black_box(&input)), &key, &nonce, 0))
        });
        group.bench_function(format!("poly1305 {size} bytes"), |b| {
            b.iter(|| poly1305(black_box(&input), &key))
        });
        group.bench_function(format!("lock {size} bytes"), |b| {
            b.iter(|| lock(&mut out, &key, &nonce, &[], black_box(&input)))
        });
    }
    group.finish();
}

pub fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");

    for size in SIZES {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("blake2b {size} bytes"), |b| {
            let mut hash = [0u8; 64];
            b.iter(|| blake2b(&mut hash, black_box(&input)))
        });
        group.bench_function(format!("sha512 {size} bytes"), |b| {
            b.iter(|| sha512(black_box(&input)))
        });
        group.bench_function(format!("hmac-sha512 {size} bytes"), |b| {
            b.iter(|| hmac_sha512(b"key", black_box(&input)))
        });
    }
    group.finish();
}

pub fn bench_argon2(c: &mut Criterion) {
    let config = Argon2Config {
        nb_blocks: 1024,
        nb_passes: 3,
        ..Default::default()
    };
    let inputs = Argon2Inputs {
        pass: b"password",
        salt: b"saltsaltsaltsalt",
    };
    let mut blocks = Block::new_area(config.rounded_blocks());

    c.bench_function("argon2id 1 MiB, 3 passes", |b| {
        b.iter(|| {
            let mut hash = [0u8; 32];
            let work_area = WorkArea::new(&mut blocks, &config).unwrap();
            argon2(&mut hash, work_area, &config, black_box(&inputs), &Argon2Extras::default())
                .unwrap();
            hash
        })
    });
}

criterion_group!(benches, bench_stream, bench_hash, bench_argon2);
criterion_main!(benches);
