//! src/kdf/mod.rs
//! Seed-to-key derivation — memory-hard KDFs split into AES key + initial counter

pub mod params;

pub use params::KdfParams;

use crate::consts::{BLOCK_SIZE, KEY_SIZE, MATERIAL_SIZE, SALT_SIZE};
use crate::error::RandtoolError;
use argon2::{Algorithm, Argon2, Params as Argon2Params, Version};
use scrypt::Params as ScryptParams;
use sha2::{Digest, Sha256};
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The supported key derivation functions. Both are memory-hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfAlgorithm {
    /// Argon2id, version 0x13.
    Argon2,
    /// scrypt (RFC 7914).
    Scrypt,
}

impl FromStr for KdfAlgorithm {
    type Err = RandtoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "argon2" | "argon2id" => Ok(KdfAlgorithm::Argon2),
            "scrypt" => Ok(KdfAlgorithm::Scrypt),
            other => Err(RandtoolError::Config(format!(
                "unknown KDF algorithm '{other}' (expected argon2 or scrypt)"
            ))),
        }
    }
}

/// Key material derived from a seed: AES key plus initial counter block.
///
/// Immutable once derived; both halves are scrubbed on drop.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: [u8; KEY_SIZE],
    counter: [u8; BLOCK_SIZE],
}

impl KeyMaterial {
    /// The AES-128 key half.
    #[must_use]
    pub fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    /// The initial counter half.
    #[must_use]
    pub fn counter(&self) -> &[u8; BLOCK_SIZE] {
        &self.counter
    }
}

/// Hash a salt string down to the fixed 16-byte salt.
///
/// Free-form salt strings are normalized through SHA-256 and truncated,
/// since the KDF backends cap the salt length they accept.
#[must_use]
pub fn salt_from_input(salt_input: &str) -> [u8; SALT_SIZE] {
    let digest = Sha256::digest(salt_input.as_bytes());
    let mut salt = [0u8; SALT_SIZE];
    salt.copy_from_slice(&digest[..SALT_SIZE]);
    salt
}

/// Derive the AES key and initial counter from a seed.
///
/// Runs the memory-hard KDF selected by `params` over the seed and the
/// hashed salt, producing 32 bytes of material: the first 16 become the
/// AES-128 key, the last 16 the initial counter block. Identical inputs
/// always yield identical material.
///
/// # Errors
///
/// - [`RandtoolError::Config`] if the KDF rejects the parameter set
/// - [`RandtoolError::Crypto`] if derivation itself fails
///
/// # Example
///
/// ```
/// use randtool::kdf::{derive_key_material, KdfAlgorithm, KdfParams};
///
/// let params = KdfParams::parse("t=1,m=16", KdfAlgorithm::Argon2)?;
/// let material = derive_key_material("seed", "salt", &params)?;
/// assert_eq!(material.key().len(), 16);
/// # Ok::<(), randtool::RandtoolError>(())
/// ```
pub fn derive_key_material(
    seed: &str,
    salt_input: &str,
    params: &KdfParams,
) -> Result<KeyMaterial, RandtoolError> {
    let salt = salt_from_input(salt_input);
    let mut material = [0u8; MATERIAL_SIZE];

    match *params {
        KdfParams::Argon2 {
            t_cost,
            m_cost,
            p_cost,
        } => {
            let params = Argon2Params::new(m_cost, t_cost, p_cost, Some(MATERIAL_SIZE))
                .map_err(|e| RandtoolError::Config(format!("invalid Argon2 parameters: {e}")))?;
            Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                .hash_password_into(seed.as_bytes(), &salt, &mut material)
                .map_err(|e| RandtoolError::Crypto(format!("Argon2 derivation failed: {e}")))?;
        }
        KdfParams::Scrypt { log_n, r, p } => {
            let params = ScryptParams::new(log_n, r, p, MATERIAL_SIZE)
                .map_err(|e| RandtoolError::Config(format!("invalid scrypt parameters: {e}")))?;
            scrypt::scrypt(seed.as_bytes(), &salt, &params, &mut material)
                .map_err(|e| RandtoolError::Crypto(format!("scrypt derivation failed: {e}")))?;
        }
    }

    let mut key = [0u8; KEY_SIZE];
    let mut counter = [0u8; BLOCK_SIZE];
    key.copy_from_slice(&material[..KEY_SIZE]);
    counter.copy_from_slice(&material[KEY_SIZE..]);
    material.zeroize();

    Ok(KeyMaterial { key, counter })
}
