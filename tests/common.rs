//! tests/common.rs
//! Common fixtures and constants shared across test files

use randtool::{ByteSource, CounterSource};

/// NIST SP 800-38A F.5.1 CTR-AES128 key.
#[allow(dead_code)] // Used across multiple test files
pub const NIST_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";

/// NIST SP 800-38A F.5.1 initial counter block.
#[allow(dead_code)] // Used across multiple test files
pub const NIST_COUNTER: &str = "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";

/// First four keystream blocks for the NIST key/counter pair.
#[allow(dead_code)] // Used across multiple test files
pub const NIST_KEYSTREAM: &str = "ec8cdf7398607cb0f2d21675ea9ea1e4\
                                  362b7c3c6773516318a077d7fc5073ae\
                                  6a2cc3787889374fbeb4c81b17ba6c44\
                                  e89c399ff0f198c6d40a31db156cabfe";

/// Standard seed used by the end-to-end regression vectors.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SEED: &str = "test";

/// Standard salt used by the end-to-end regression vectors.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: &str = "randtool";

/// Deterministic source keyed with the NIST SP 800-38A fixture.
#[allow(dead_code)] // Used across multiple test files
pub fn nist_source() -> ByteSource {
    let key: [u8; 16] = hex::decode(NIST_KEY).unwrap().try_into().unwrap();
    let ctr: [u8; 16] = hex::decode(NIST_COUNTER).unwrap().try_into().unwrap();
    ByteSource::from_counter(CounterSource::new(&key, &ctr))
}
