use criterion::{Criterion, criterion_group, criterion_main};
use microsui_crypto::keys::{
    elligator_key_pair, elligator_map, x25519, x25519_dirty_fast, x25519_dirty_small,
    x25519_inverse, x25519_public_key,
};
use microsui_crypto::signatures::{
    ed25519_check, ed25519_key_pair, ed25519_sign, eddsa_check, eddsa_key_pair, eddsa_sign,
};
use std::hint::black_box;

pub fn bench_x25519(c: &mut Criterion) {
    let sk = [0x42u8; 32];
    let pk = x25519_public_key(&[0x24u8; 32]);

    c.bench_function("x25519", |b| b.iter(|| x25519(black_box(&sk), &pk)));
    c.bench_function("x25519 public key", |b| {
        b.iter(|| x25519_public_key(black_box(&sk)))
    });
    c.bench_function("x25519 dirty small", |b| {
        b.iter(|| x25519_dirty_small(black_box(&sk)))
    });
    c.bench_function("x25519 dirty fast", |b| {
        b.iter(|| x25519_dirty_fast(black_box(&sk)))
    });
    c.bench_function("x25519 inverse", |b| {
        b.iter(|| x25519_inverse(black_box(&sk), &pk))
    });
}

pub fn bench_signatures(c: &mut Criterion) {
    let message = [0u8; 64];
    let (eddsa_sk, eddsa_pk) = eddsa_key_pair(&mut [1u8; 32]);
    let eddsa_sig = eddsa_sign(&eddsa_sk, &message);
    let (ed_sk, ed_pk) = ed25519_key_pair(&mut [1u8; 32]);
    let ed_sig = ed25519_sign(&ed_sk, &message);

    c.bench_function("eddsa key pair", |b| {
        b.iter(|| eddsa_key_pair(&mut black_box([3u8; 32])))
    });
    c.bench_function("eddsa sign", |b| {
        b.iter(|| eddsa_sign(&eddsa_sk, black_box(&message)))
    });
    c.bench_function("eddsa check", |b| {
        b.iter(|| eddsa_check(&eddsa_sig, &eddsa_pk, black_box(&message)))
    });
    c.bench_function("ed25519 sign", |b| {
        b.iter(|| ed25519_sign(&ed_sk, black_box(&message)))
    });
    c.bench_function("ed25519 check", |b| {
        b.iter(|| ed25519_check(&ed_sig, &ed_pk, black_box(&message)))
    });
}

pub fn bench_elligator(c: &mut Criterion) {
    let hidden = [0x5au8; 32];
    c.bench_function("elligator map", |b| {
        b.iter(|| elligator_map(black_box(&hidden)))
    });
    c.bench_function("elligator key pair", |b| {
        b.iter(|| elligator_key_pair(&mut black_box([7u8; 32])))
    });
}

criterion_group!(benches, bench_x25519, bench_signatures, bench_elligator);
criterion_main!(benches);
