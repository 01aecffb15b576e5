use microsui_crypto::encryption::chacha20::{chacha20_djb, chacha20_h, chacha20_ietf, chacha20_x};
use proptest::prelude::*;

fn h<const N: usize>(s: &str) -> [u8; N] {
    let v = hex::decode(s).unwrap();
    let mut out = [0u8; N];
    out.copy_from_slice(&v);
    out
}

fn counting_key() -> [u8; 32] {
    core::array::from_fn(|i| i as u8)
}

// -------------------------------------------------------
// 1. OFFICIAL VECTORS
// -------------------------------------------------------

#[test]
fn chacha20_zero_key_keystream() {
    let expected: [u8; 64] = h("76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1aa836efcc8b770dc7\
                                da41597c5157488d7724e03fb8d84a376a43b8f41518a11cc387b669b2ee6586");

    let mut out = [0u8; 64];
    let next = chacha20_djb(&mut out, None, &[0u8; 32], &[0u8; 8], 0);
    assert_eq!(out, expected);
    assert_eq!(next, 1);
}

#[test]
fn chacha20_ietf_rfc8439_block() {
    let nonce: [u8; 12] = h("000000090000004a00000000");
    let expected: [u8; 64] = h("10f1e7e4d13b5915500fdd1fa32071c4c7d1f4c733c068030422aa9ac3d46c4e\
                                d2826446079faa0914c2d705d98b02a2b5129cd1de164eb9cbd083e8a2503c4e");

    let mut out = [0u8; 64];
    let next = chacha20_ietf(&mut out, None, &counting_key(), &nonce, 1);
    assert_eq!(out, expected);
    assert_eq!(next, 2);
}

#[test]
fn hchacha20_draft_vector() {
    let input: [u8; 16] = h("000000090000004a0000000031415927");
    let expected: [u8; 32] =
        h("82413b4227b27bfed30e42508a877d73a0f9e4d58a74a853c12ec41326d3ecdc");

    assert_eq!(chacha20_h(&counting_key(), &input), expected);
}

// -------------------------------------------------------
// 2. COUNTERS AND NONCE LAYOUTS
// -------------------------------------------------------

#[test]
fn chacha20_partial_block_counts_as_used() {
    let key = counting_key();
    let mut out = [0u8; 65];
    assert_eq!(chacha20_djb(&mut out, None, &key, &[1; 8], 0), 2);
    assert_eq!(chacha20_djb(&mut out[..64], None, &key, &[1; 8], 5), 6);
    assert_eq!(chacha20_djb(&mut [], None, &key, &[1; 8], 5), 5);
}

#[test]
fn chacha20_ietf_is_djb_with_nonce_in_counter() {
    let key = counting_key();
    let nonce: [u8; 12] = h("0102030405060708090a0b0c");
    let mut short_nonce = [0u8; 8];
    short_nonce.copy_from_slice(&nonce[4..]);

    let mut ietf = [0u8; 200];
    let mut djb = [0u8; 200];
    chacha20_ietf(&mut ietf, None, &key, &nonce, 7);
    chacha20_djb(&mut djb, None, &key, &short_nonce, 7 + (0x0403_0201u64 << 32));
    assert_eq!(ietf, djb);
}

#[test]
fn chacha20_x_uses_hchacha_subkey() {
    let key = counting_key();
    let nonce: [u8; 24] = core::array::from_fn(|i| (i * 3) as u8);
    let mut head = [0u8; 16];
    head.copy_from_slice(&nonce[..16]);
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&nonce[16..]);

    let mut x = [0u8; 100];
    let mut djb = [0u8; 100];
    chacha20_x(&mut x, None, &key, &nonce, 3);
    chacha20_djb(&mut djb, None, &chacha20_h(&key, &head), &tail, 3);
    assert_eq!(x, djb);
}

#[test]
fn chacha20_counter_carries_into_high_word() {
    let key = counting_key();
    let mut chained = [0u8; 128];
    let (first, second) = chained.split_at_mut(64);
    let next = chacha20_djb(first, None, &key, &[0; 8], u32::MAX as u64);
    assert_eq!(next, 1 << 32);
    chacha20_djb(second, None, &key, &[0; 8], next);

    let mut at_once = [0u8; 128];
    chacha20_djb(&mut at_once, None, &key, &[0; 8], u32::MAX as u64);
    assert_eq!(chained, at_once);
}

#[test]
#[should_panic]
fn chacha20_rejects_mismatched_lengths() {
    let mut out = [0u8; 10];
    chacha20_djb(&mut out, Some(&[0u8; 11]), &[0; 32], &[0; 8], 0);
}

// -------------------------------------------------------
// 3. PROPERTIES
// -------------------------------------------------------

proptest! {
    #[test]
    fn chacha20_encryption_is_involutive(
        message in proptest::collection::vec(any::<u8>(), 0..400),
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
    ) {
        let mut cipher = vec![0u8; message.len()];
        chacha20_x(&mut cipher, Some(&message), &key, &nonce, 0);
        let mut plain = vec![0u8; message.len()];
        chacha20_x(&mut plain, Some(&cipher), &key, &nonce, 0);
        prop_assert_eq!(plain, message);
    }

    #[test]
    fn chacha20_chaining_matches_one_call(blocks in 0usize..5, tail in 0usize..64) {
        let key = counting_key();
        let nonce = [9u8; 8];
        let mut whole = vec![0u8; blocks * 64 + tail];
        chacha20_djb(&mut whole, None, &key, &nonce, 0);

        let mut pieces = vec![0u8; blocks * 64 + tail];
        let (head, rest) = pieces.split_at_mut(blocks * 64);
        let next = chacha20_djb(head, None, &key, &nonce, 0);
        prop_assert_eq!(next, blocks as u64);
        chacha20_djb(rest, None, &key, &nonce, next);
        prop_assert_eq!(pieces, whole);
    }
}
