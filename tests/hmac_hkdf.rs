use hmac::{Hmac, Mac};
use microsui_crypto::hash::{HmacSha512, hkdf, hkdf_expand, hmac_sha512};

fn reference_hmac(key: &[u8], message: &[u8]) -> [u8; 64] {
    let mut mac = <Hmac<sha2::Sha512> as Mac>::new_from_slice(key).unwrap();
    mac.update(message);
    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

/// HKDF-SHA-512 written directly from RFC 5869 on top of the `hmac` crate.
fn reference_hkdf(len: usize, ikm: &[u8], salt: &[u8], info: &[u8]) -> Vec<u8> {
    let prk = reference_hmac(salt, ikm);
    let mut okm = Vec::new();
    let mut t = Vec::new();
    let mut ctr = 1u8;
    while okm.len() < len {
        let mut input = t.clone();
        input.extend_from_slice(info);
        input.push(ctr);
        t = reference_hmac(&prk, &input).to_vec();
        okm.extend_from_slice(&t);
        ctr += 1;
    }
    okm.truncate(len);
    okm
}

// -------------------------------------------------------
// HMAC-SHA-512
// -------------------------------------------------------

#[test]
fn hmac_rfc4231_case_2() {
    let expected = hex::decode(
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
         9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
    )
    .unwrap();

    let got = hmac_sha512(b"Jefe", b"what do ya want for nothing?");
    assert_eq!(got.to_vec(), expected);
}

#[test]
fn hmac_matches_reference_for_all_key_sizes() {
    let message = b"message authentication across the key size boundaries";
    // Keys longer than the 128-byte block are hashed first
    for key_len in [0, 1, 32, 64, 127, 128, 129, 200] {
        let key = vec![0x5au8; key_len];
        assert_eq!(
            hmac_sha512(&key, message),
            reference_hmac(&key, message),
            "key length {key_len}"
        );
    }
}

#[test]
fn hmac_streaming_matches_one_shot() {
    let key = [7u8; 40];
    let message: Vec<u8> = (0..=255).collect();

    let mut ctx = HmacSha512::new(&key);
    for chunk in message.chunks(33) {
        ctx.update(chunk);
    }
    assert_eq!(ctx.finalize(), hmac_sha512(&key, &message));
}

// -------------------------------------------------------
// HKDF-SHA-512
// -------------------------------------------------------

#[test]
fn hkdf_matches_reference() {
    let ikm = [0x0bu8; 22];
    let salt: Vec<u8> = (0x00..=0x0c).collect();
    let info: Vec<u8> = (0xf0..=0xf9).collect();

    for len in [1, 42, 63, 64, 65, 128, 200] {
        let mut okm = vec![0u8; len];
        hkdf(&mut okm, &ikm, &salt, &info);
        assert_eq!(okm, reference_hkdf(len, &ikm, &salt, &info), "length {len}");
    }
}

#[test]
fn hkdf_outputs_are_prefixes_of_each_other() {
    let prk = hmac_sha512(b"salt", b"input keying material");
    let mut long = [0u8; 150];
    let mut short = [0u8; 70];
    hkdf_expand(&mut long, &prk, b"context");
    hkdf_expand(&mut short, &prk, b"context");
    assert_eq!(&long[..70], &short[..]);
}

#[test]
fn hkdf_info_separates_outputs() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    hkdf(&mut a, b"ikm", b"salt", b"encryption");
    hkdf(&mut b, b"ikm", b"salt", b"authentication");
    assert_ne!(a, b);
}
