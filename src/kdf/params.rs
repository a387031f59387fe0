//! src/kdf/params.rs
//! `name=value` tuning knobs for the key derivation functions

use crate::consts::{
    DEFAULT_ARGON2_M_COST, DEFAULT_ARGON2_P_COST, DEFAULT_ARGON2_T_COST, DEFAULT_SCRYPT_LOG_N,
    DEFAULT_SCRYPT_P, DEFAULT_SCRYPT_R,
};
use crate::error::RandtoolError;
use crate::kdf::KdfAlgorithm;
use std::str::FromStr;

/// Tuning parameters for one KDF run.
///
/// The variant fixes the algorithm; values not overridden keep their
/// defaults. Range validation is left to the KDF backends — anything they
/// reject surfaces as a configuration error at derivation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfParams {
    /// Argon2id knobs: time cost, memory cost in KiB, lane count.
    Argon2 { t_cost: u32, m_cost: u32, p_cost: u32 },
    /// scrypt knobs: log2 of the cost parameter N, block size, parallelism.
    Scrypt { log_n: u8, r: u32, p: u32 },
}

impl KdfParams {
    /// The default parameter set for `algorithm`.
    #[must_use]
    pub fn defaults(algorithm: KdfAlgorithm) -> Self {
        match algorithm {
            KdfAlgorithm::Argon2 => KdfParams::Argon2 {
                t_cost: DEFAULT_ARGON2_T_COST,
                m_cost: DEFAULT_ARGON2_M_COST,
                p_cost: DEFAULT_ARGON2_P_COST,
            },
            KdfAlgorithm::Scrypt => KdfParams::Scrypt {
                log_n: DEFAULT_SCRYPT_LOG_N,
                r: DEFAULT_SCRYPT_R,
                p: DEFAULT_SCRYPT_P,
            },
        }
    }

    /// Parse a comma-separated `name=value` list against `algorithm`.
    ///
    /// Knobs not named keep their defaults. Argon2 accepts `t` (time cost),
    /// `m` (memory cost in KiB) and `p` (lanes); scrypt accepts `n` (log2 of
    /// the cost parameter), `r` (block size) and `p` (parallelism).
    ///
    /// # Errors
    ///
    /// [`RandtoolError::Config`] naming the offending fragment when the list
    /// contains anything that is not `name=value`, an unknown or duplicate
    /// name, or a non-numeric value.
    ///
    /// # Example
    ///
    /// ```
    /// use randtool::kdf::{KdfAlgorithm, KdfParams};
    ///
    /// let params = KdfParams::parse("t=32,m=12,p=1", KdfAlgorithm::Argon2)?;
    /// assert_eq!(params, KdfParams::Argon2 { t_cost: 32, m_cost: 12, p_cost: 1 });
    /// # Ok::<(), randtool::RandtoolError>(())
    /// ```
    pub fn parse(spec: &str, algorithm: KdfAlgorithm) -> Result<Self, RandtoolError> {
        let mut params = Self::defaults(algorithm);
        let mut seen: Vec<&str> = Vec::new();

        for fragment in spec.split(',') {
            let fragment = fragment.trim();
            let (name, value) = fragment.split_once('=').ok_or_else(|| {
                RandtoolError::Config(format!(
                    "invalid KDF parameter '{fragment}' (expected name=value)"
                ))
            })?;
            let (name, value) = (name.trim(), value.trim());

            if seen.contains(&name) {
                return Err(RandtoolError::Config(format!(
                    "duplicate KDF parameter '{name}'"
                )));
            }

            match (&mut params, name) {
                (KdfParams::Argon2 { t_cost, .. }, "t") => *t_cost = parse_knob(name, value)?,
                (KdfParams::Argon2 { m_cost, .. }, "m") => *m_cost = parse_knob(name, value)?,
                (KdfParams::Argon2 { p_cost, .. }, "p") => *p_cost = parse_knob(name, value)?,
                (KdfParams::Argon2 { .. }, _) => {
                    return Err(RandtoolError::Config(format!(
                        "unknown Argon2 parameter '{name}' (expected t, m or p)"
                    )));
                }
                (KdfParams::Scrypt { log_n, .. }, "n") => *log_n = parse_knob(name, value)?,
                (KdfParams::Scrypt { r, .. }, "r") => *r = parse_knob(name, value)?,
                (KdfParams::Scrypt { p, .. }, "p") => *p = parse_knob(name, value)?,
                (KdfParams::Scrypt { .. }, _) => {
                    return Err(RandtoolError::Config(format!(
                        "unknown scrypt parameter '{name}' (expected n, r or p)"
                    )));
                }
            }

            seen.push(name);
        }

        Ok(params)
    }
}

fn parse_knob<T: FromStr>(name: &str, value: &str) -> Result<T, RandtoolError> {
    value.parse().map_err(|_| {
        RandtoolError::Config(format!(
            "invalid value for KDF parameter '{name}': '{value}'"
        ))
    })
}
