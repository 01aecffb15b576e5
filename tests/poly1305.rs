use microsui_crypto::encryption::poly1305::{Poly1305, poly1305};

fn h<const N: usize>(s: &str) -> [u8; N] {
    let v = hex::decode(s).unwrap();
    let mut out = [0u8; N];
    out.copy_from_slice(&v);
    out
}

#[test]
fn poly1305_rfc8439_vector() {
    let key: [u8; 32] = h("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b");
    let expected: [u8; 16] = h("a8061dc1305136c6c22b8baf0c0127a9");

    assert_eq!(poly1305(b"Cryptographic Forum Research Group", &key), expected);
}

#[test]
fn poly1305_zero_key_gives_zero_tag() {
    let message = [0xffu8; 100];
    assert_eq!(poly1305(&message, &[0u8; 32]), [0u8; 16]);
}

#[test]
fn poly1305_empty_message_is_the_pad() {
    let mut key = [0u8; 32];
    key[..16].copy_from_slice(&[0x11; 16]);
    key[16..].copy_from_slice(&[0x42; 16]);
    assert_eq!(poly1305(&[], &key), [0x42; 16]);
}

#[test]
fn poly1305_streaming_matches_one_shot() {
    let key: [u8; 32] = core::array::from_fn(|i| (i * 7 + 1) as u8);
    let message: Vec<u8> = (0..333).map(|i| (i * 13) as u8).collect();
    let expected = poly1305(&message, &key);

    for chunk_size in [1, 3, 15, 16, 17, 64, 100] {
        let mut ctx = Poly1305::new(&key);
        for chunk in message.chunks(chunk_size) {
            ctx.update(chunk);
        }
        assert_eq!(ctx.finalize(), expected, "chunk size {chunk_size}");
    }
}

#[test]
fn poly1305_detects_single_bit_changes() {
    let key = [0x5cu8; 32];
    let message = b"an authenticated message".to_vec();
    let tag = poly1305(&message, &key);

    for i in 0..message.len() {
        let mut tampered = message.clone();
        tampered[i] ^= 0x01;
        assert_ne!(poly1305(&tampered, &key), tag, "byte {i}");
    }
}
