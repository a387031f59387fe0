//! tests/e2e_tests.rs
//! Full pipeline — seed through derivation to emitted output

mod common;
use common::{TEST_SALT, TEST_SEED};

use randtool::{ByteSource, Emitter, KdfAlgorithm, KdfParams, SourceConfig};
use zeroize::Zeroizing;

fn seeded(seed: &str, salt: &str, params: KdfParams) -> ByteSource {
    let config = SourceConfig::Seeded {
        seed: Zeroizing::new(seed.to_string()),
        salt: salt.to_string(),
        params,
    };
    config
        .build_source()
        .unwrap_or_else(|e| panic!("Failed to build source: {e:?}"))
}

#[test]
fn default_argon2_stream_is_pinned() {
    let mut src = seeded(TEST_SEED, TEST_SALT, KdfParams::defaults(KdfAlgorithm::Argon2));
    let bytes = src.take_bytes(32).unwrap();
    assert_eq!(
        hex::encode(bytes),
        "1a1b000505afdd9ee31fa2c41c7aaee181368f38e88d3bb850a397755b9905e6"
    );
}

#[test]
fn scrypt_stream_is_pinned() {
    let params = KdfParams::parse("n=10,r=8,p=1", KdfAlgorithm::Scrypt).unwrap();
    let mut src = seeded(TEST_SEED, TEST_SALT, params);
    let bytes = src.take_bytes(16).unwrap();
    assert_eq!(hex::encode(bytes), "e1fd1e360eb4a16d1c013a38f026bfee");
}

#[test]
fn independent_builds_share_the_stream() {
    let params = KdfParams::parse("t=1,m=16,p=1", KdfAlgorithm::Argon2).unwrap();
    let mut a = seeded(TEST_SEED, TEST_SALT, params);
    let mut b = seeded(TEST_SEED, TEST_SALT, params);
    assert_eq!(a.take_bytes(64).unwrap(), b.take_bytes(64).unwrap());
}

#[test]
fn seed_salt_and_parameters_all_steer_the_stream() {
    let fast = KdfParams::parse("t=1,m=16,p=1", KdfAlgorithm::Argon2).unwrap();
    let slower = KdfParams::parse("t=2,m=16,p=1", KdfAlgorithm::Argon2).unwrap();

    let mut streams = Vec::new();
    for (seed, salt, params) in [
        (TEST_SEED, TEST_SALT, fast),
        ("test2", TEST_SALT, fast),
        (TEST_SEED, "randtool2", fast),
        (TEST_SEED, TEST_SALT, slower),
    ] {
        streams.push(seeded(seed, salt, params).take_bytes(16).unwrap());
    }

    for i in 0..streams.len() {
        for j in i + 1..streams.len() {
            assert_ne!(streams[i], streams[j], "streams {i} and {j} collide");
        }
    }
}

#[test]
fn raw_and_hex_emitters_agree() {
    let params = KdfParams::parse("t=1,m=16,p=1", KdfAlgorithm::Argon2).unwrap();

    let mut raw = Vec::new();
    Emitter::Raw { size: 48 }
        .run(&mut seeded(TEST_SEED, TEST_SALT, params), &mut raw)
        .unwrap();
    assert_eq!(raw.len(), 48);

    let mut hexed = Vec::new();
    Emitter::Hex { size: 48 }
        .run(&mut seeded(TEST_SEED, TEST_SALT, params), &mut hexed)
        .unwrap();

    assert_eq!(hexed, format!("{}\n", hex::encode(raw)).into_bytes());
}

#[test]
fn float_lines_parse_back_into_the_unit_interval() {
    let params = KdfParams::parse("t=1,m=16,p=1", KdfAlgorithm::Argon2).unwrap();

    let mut out = Vec::new();
    Emitter::Float { count: 8 }
        .run(&mut seeded(TEST_SEED, TEST_SALT, params), &mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    for line in lines {
        let value: f64 = line.parse().unwrap_or_else(|e| panic!("Bad float {line:?}: {e:?}"));
        assert!((0.0..1.0).contains(&value), "parsed {value}");
        // Emitted text is the shortest representation, so it survives a
        // parse/format round trip.
        assert_eq!(format!("{value}"), line);
    }
}

#[test]
fn entropy_mode_serves_requested_lengths() {
    let mut src = SourceConfig::Entropy.build_source().unwrap();
    assert_eq!(src.take_bytes(16).unwrap().len(), 16);

    let mut out = Vec::new();
    Emitter::Raw { size: 24 }
        .run(&mut SourceConfig::Entropy.build_source().unwrap(), &mut out)
        .unwrap();
    assert_eq!(out.len(), 24);
}
