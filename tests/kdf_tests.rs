//! tests/kdf_tests.rs
//! Key derivation — pinned material for both algorithms, parameter validation

mod common;
use common::{TEST_SALT, TEST_SEED};

use randtool::{derive_key_material, KdfAlgorithm, KdfParams};

/// One derivation case: parameter spec (`None` = algorithm defaults), seed,
/// salt input, and the expected 32-byte material as hex (key then counter).
type KdfCase = (KdfAlgorithm, Option<&'static str>, &'static str, &'static str, &'static str);

fn params_for(algorithm: KdfAlgorithm, spec: Option<&str>) -> KdfParams {
    match spec {
        Some(spec) => KdfParams::parse(spec, algorithm)
            .unwrap_or_else(|e| panic!("Failed to parse {spec:?}: {e:?}")),
        None => KdfParams::defaults(algorithm),
    }
}

#[test]
fn derived_material_is_pinned() {
    let cases: [KdfCase; 5] = [
        (
            KdfAlgorithm::Argon2,
            None,
            TEST_SEED,
            TEST_SALT,
            "a07c3a0b78fc7b7b1c2f1f5309403c099f1e4fe9e65af871d4ec06b3426b8f63",
        ),
        (
            KdfAlgorithm::Argon2,
            Some("t=32,m=12,p=1"),
            TEST_SEED,
            TEST_SALT,
            "045703f47a741cbae0f1935de8e636fc21232494a1e742b89e546848aa8d809e",
        ),
        (
            KdfAlgorithm::Argon2,
            Some("t=1,m=16,p=1"),
            "password",
            "pepper",
            "6f84f14bbe41ded99de380b0b663af646e07f1cb31f741632f24375e5a9691fc",
        ),
        (
            KdfAlgorithm::Scrypt,
            Some("n=10,r=8,p=1"),
            TEST_SEED,
            TEST_SALT,
            "8c41dd9bc0f65d0f7bb6408f550f29847fc48f24ceb7f808d1ed5e6469f8f73a",
        ),
        (
            KdfAlgorithm::Scrypt,
            Some("n=12,r=8,p=2"),
            "password",
            "pepper",
            "0843230d95efbc23352bfe29b4f596342a1ac674bc9996cbcd2d4c44072dbeff",
        ),
    ];

    for (algorithm, spec, seed, salt, expected) in cases {
        let params = params_for(algorithm, spec);
        let material = derive_key_material(seed, salt, &params)
            .unwrap_or_else(|e| panic!("Derivation failed for {algorithm:?} {spec:?}: {e:?}"));

        let got = format!(
            "{}{}",
            hex::encode(material.key()),
            hex::encode(material.counter())
        );
        assert_eq!(got, expected, "{algorithm:?} {spec:?}");
    }
}

#[test]
fn derivation_is_deterministic() {
    let params = KdfParams::parse("t=1,m=16,p=1", KdfAlgorithm::Argon2).unwrap();

    let first = derive_key_material(TEST_SEED, TEST_SALT, &params).unwrap();
    let second = derive_key_material(TEST_SEED, TEST_SALT, &params).unwrap();

    assert_eq!(first.key(), second.key());
    assert_eq!(first.counter(), second.counter());
}

#[test]
fn seed_and_salt_both_steer_the_material() {
    let params = KdfParams::parse("t=1,m=16,p=1", KdfAlgorithm::Argon2).unwrap();

    let base = derive_key_material(TEST_SEED, TEST_SALT, &params).unwrap();
    let other_seed = derive_key_material("test2", TEST_SALT, &params).unwrap();
    let other_salt = derive_key_material(TEST_SEED, "randtool2", &params).unwrap();

    assert_ne!(base.key(), other_seed.key());
    assert_ne!(base.key(), other_salt.key());
    assert_ne!(other_seed.key(), other_salt.key());
}

#[test]
fn backend_rejects_out_of_range_parameters() {
    // Values the parameter syntax accepts but the algorithms refuse.
    let cases = [
        (KdfAlgorithm::Argon2, "t=0"),
        (KdfAlgorithm::Argon2, "m=4"),
        (KdfAlgorithm::Argon2, "p=0"),
        (KdfAlgorithm::Scrypt, "r=0"),
        (KdfAlgorithm::Scrypt, "p=0"),
    ];

    for (algorithm, spec) in cases {
        let params = KdfParams::parse(spec, algorithm)
            .unwrap_or_else(|e| panic!("Failed to parse {spec:?}: {e:?}"));
        let err = derive_key_material(TEST_SEED, TEST_SALT, &params)
            .expect_err("derivation should fail");
        assert!(
            matches!(err, randtool::RandtoolError::Config(_)),
            "{algorithm:?} {spec:?} gave {err:?}"
        );
    }
}
