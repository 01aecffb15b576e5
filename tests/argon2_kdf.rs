use microsui_crypto::derivation::{
    Argon2Algorithm, Argon2Config, Argon2Extras, Argon2Inputs, Block, WorkArea, argon2,
};
use microsui_crypto::{Argon2ConfigError, Error};

fn run(
    hash_len: usize,
    config: &Argon2Config,
    inputs: &Argon2Inputs<'_>,
    extras: &Argon2Extras<'_>,
) -> Vec<u8> {
    let mut blocks = Block::new_area(config.rounded_blocks());
    let mut hash = vec![0u8; hash_len];
    let work_area = WorkArea::new(&mut blocks, config).unwrap();
    argon2(&mut hash, work_area, config, inputs, extras).unwrap();
    hash
}

fn reference(hash_len: usize, config: &Argon2Config, pass: &[u8], salt: &[u8]) -> Vec<u8> {
    let algorithm = match config.algorithm {
        Argon2Algorithm::D => ::argon2::Algorithm::Argon2d,
        Argon2Algorithm::I => ::argon2::Algorithm::Argon2i,
        Argon2Algorithm::Id => ::argon2::Algorithm::Argon2id,
    };
    let params = ::argon2::Params::new(
        config.nb_blocks,
        config.nb_passes,
        config.nb_lanes,
        Some(hash_len),
    )
    .unwrap();
    let mut out = vec![0u8; hash_len];
    ::argon2::Argon2::new(algorithm, ::argon2::Version::V0x13, params)
        .hash_password_into(pass, salt, &mut out)
        .unwrap();
    out
}

// -------------------------------------------------------
// 1. RFC 9106 VECTORS
// -------------------------------------------------------

/// Section 5: 32 KiB, 3 passes, 4 lanes, 32-byte tag, password 32 × 0x01,
/// salt 16 × 0x02, secret 8 × 0x03, associated data 12 × 0x04.
fn rfc9106(algorithm: Argon2Algorithm) -> Vec<u8> {
    let config = Argon2Config {
        algorithm,
        nb_blocks: 32,
        nb_passes: 3,
        nb_lanes: 4,
    };
    let inputs = Argon2Inputs {
        pass: &[0x01; 32],
        salt: &[0x02; 16],
    };
    let extras = Argon2Extras {
        key: &[0x03; 8],
        ad: &[0x04; 12],
    };
    run(32, &config, &inputs, &extras)
}

#[test]
fn argon2d_rfc9106_test_vector() {
    let expected =
        hex::decode("512b391b6f1162975371d30919734294f868e3be3984f3c1a13a4db9fabe4acb").unwrap();
    assert_eq!(rfc9106(Argon2Algorithm::D), expected);
}

#[test]
fn argon2i_rfc9106_test_vector() {
    let expected =
        hex::decode("c814d9d1dc7f37aa13f0d77f2494bda1c8de6b016dd388d29952a4c4672b6ce8").unwrap();
    assert_eq!(rfc9106(Argon2Algorithm::I), expected);
}

#[test]
fn argon2id_rfc9106_test_vector() {
    let expected =
        hex::decode("0d640df58d78766c08c037a34a8b53c9d01ef0452d75b65eb52520e96b01e659").unwrap();
    assert_eq!(
        rfc9106(Argon2Algorithm::Id),
        expected,
        "Argon2id output does not match RFC 9106 test vector"
    );
}

// -------------------------------------------------------
// 2. AGAINST THE argon2 CRATE
// -------------------------------------------------------

#[test]
fn argon2_matches_reference_across_configs() {
    let configs = [
        (Argon2Algorithm::Id, 8, 1, 1),
        (Argon2Algorithm::Id, 64, 2, 1),
        (Argon2Algorithm::I, 70, 1, 2),
        (Argon2Algorithm::D, 100, 2, 3),
        (Argon2Algorithm::Id, 256, 1, 4),
    ];
    for (algorithm, nb_blocks, nb_passes, nb_lanes) in configs {
        let config = Argon2Config {
            algorithm,
            nb_blocks,
            nb_passes,
            nb_lanes,
        };
        let inputs = Argon2Inputs {
            pass: b"password",
            salt: b"somesaltsomesalt",
        };
        for hash_len in [4, 32, 64, 65, 100] {
            assert_eq!(
                run(hash_len, &config, &inputs, &Argon2Extras::default()),
                reference(hash_len, &config, inputs.pass, inputs.salt),
                "{config:?}, hash length {hash_len}"
            );
        }
    }
}

// -------------------------------------------------------
// 3. CONFIGURATION AND WORK AREA
// -------------------------------------------------------

#[test]
fn argon2_rejects_bad_configs() {
    let base = Argon2Config {
        nb_blocks: 16,
        nb_passes: 1,
        ..Default::default()
    };
    let cases = [
        (Argon2Config { nb_lanes: 0, ..base }, Argon2ConfigError::NoLanes),
        (Argon2Config { nb_passes: 0, ..base }, Argon2ConfigError::NoPasses),
        (Argon2Config { nb_blocks: 7, ..base }, Argon2ConfigError::TooFewBlocks),
        (Argon2Config { nb_lanes: 3, ..base }, Argon2ConfigError::TooFewBlocks),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected), "{config:?}");
    }
}

#[test]
fn work_area_must_cover_rounded_blocks() {
    let config = Argon2Config {
        nb_blocks: 19,
        nb_passes: 1,
        nb_lanes: 2,
        ..Default::default()
    };
    // 19 blocks over 2 lanes round down to 16
    assert_eq!(config.rounded_blocks(), 16);

    let mut small = Block::new_area(15);
    assert!(matches!(
        WorkArea::new(&mut small, &config),
        Err(Error::InvalidArgon2Config(
            Argon2ConfigError::WorkAreaTooSmall { .. }
        ))
    ));

    let mut exact = Block::new_area(16);
    assert!(WorkArea::new(&mut exact, &config).is_ok());
}

#[test]
fn argon2_rejects_empty_output() {
    let config = Argon2Config {
        nb_blocks: 8,
        nb_passes: 1,
        ..Default::default()
    };
    let mut blocks = Block::new_area(8);
    let work_area = WorkArea::new(&mut blocks, &config).unwrap();
    let inputs = Argon2Inputs {
        pass: b"p",
        salt: b"saltsalt",
    };
    assert_eq!(
        argon2(&mut [], work_area, &config, &inputs, &Argon2Extras::default()),
        Err(Error::InvalidArgon2Config(
            Argon2ConfigError::InvalidOutputLength
        ))
    );
}

#[test]
fn argon2_wipes_the_work_area() {
    let config = Argon2Config {
        nb_blocks: 32,
        nb_passes: 2,
        ..Default::default()
    };
    let inputs = Argon2Inputs {
        pass: b"password",
        salt: b"saltsalt",
    };
    let mut blocks = Block::new_area(40);
    let mut hash = [0u8; 32];
    argon2(
        &mut hash,
        WorkArea::new(&mut blocks, &config).unwrap(),
        &config,
        &inputs,
        &Argon2Extras::default(),
    )
    .unwrap();

    assert_ne!(hash, [0u8; 32]);
    assert!(blocks.iter().all(|b| b.0.iter().all(|&w| w == 0)));
}

#[test]
fn argon2_extras_change_the_hash() {
    let config = Argon2Config {
        nb_blocks: 16,
        nb_passes: 1,
        ..Default::default()
    };
    let inputs = Argon2Inputs {
        pass: b"password",
        salt: b"saltsalt",
    };
    let plain = run(32, &config, &inputs, &Argon2Extras::default());
    let keyed = run(32, &config, &inputs, &Argon2Extras { key: b"pepper", ad: &[] });
    let with_ad = run(32, &config, &inputs, &Argon2Extras { key: &[], ad: b"context" });
    assert_ne!(plain, keyed);
    assert_ne!(plain, with_ad);
    assert_ne!(keyed, with_ad);
}
