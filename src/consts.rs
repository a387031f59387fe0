//! Global constants for the byte-stream engine.
//!
//! Includes block and key material layout, float extraction factors, and
//! recommended KDF defaults.

/// AES block size in bytes (128 bits).
///
/// Every block-level operation — keystream generation, buffered reads, chunked
/// XOR — works in multiples of this quantum.
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes.
pub const KEY_SIZE: usize = 16;

/// Salt size in bytes fed to the KDFs.
///
/// Raw salt strings are hashed down to this size first, since some KDFs cap
/// the salt length they accept.
pub const SALT_SIZE: usize = 16;

/// Total key material derived from the KDF, in bytes.
///
/// The first [`KEY_SIZE`] bytes become the AES key, the remaining
/// [`BLOCK_SIZE`] bytes the initial counter block.
pub const MATERIAL_SIZE: usize = KEY_SIZE + BLOCK_SIZE;

/// Number of keystream bytes consumed per float.
///
/// 7 bytes of the stream give 56 bits; the low 3 are shifted away so that
/// exactly 53 bits (the f64 mantissa width) survive.
pub const FLOAT_BYTES: usize = 7;

/// Scale factor mapping a 53-bit integer into [0, 1).
///
/// Equal to 2^-53. Multiplying a value below 2^53 by this can never round
/// up to 1.0.
pub const FLOAT_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Chunk size for the verbatim tail copy after a partial-file XOR.
pub const TAIL_CHUNK: usize = 4096;

/// Default Argon2id time cost (iterations).
pub const DEFAULT_ARGON2_T_COST: u32 = 2;

/// Default Argon2id memory cost in KiB.
///
/// Set to `19_456` (19 MiB), matching the `argon2` crate defaults and the
/// OWASP 2024+ first-recommended parameter set.
pub const DEFAULT_ARGON2_M_COST: u32 = 19_456;

/// Default Argon2id lane count.
pub const DEFAULT_ARGON2_P_COST: u32 = 1;

/// Default scrypt cost exponent: N = 2^17.
///
/// Matches the `scrypt` crate's recommended parameters. Interactive-use
/// deployments sometimes lower this to 15; the CLI exposes it as `n`.
pub const DEFAULT_SCRYPT_LOG_N: u8 = 17;

/// Default scrypt block size parameter.
pub const DEFAULT_SCRYPT_R: u32 = 8;

/// Default scrypt parallelism parameter.
pub const DEFAULT_SCRYPT_P: u32 = 1;
