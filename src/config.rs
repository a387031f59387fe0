//! src/config.rs
//! Run configuration — sampling bounds, seed settings and source construction

use crate::error::RandtoolError;
use crate::kdf::{derive_key_material, KdfParams};
use crate::source::{ByteSource, CounterSource};
use std::str::FromStr;
use zeroize::Zeroizing;

/// Half-open integer range `[lower, upper)` for bounded sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub lower: i64,
    pub upper: i64,
}

impl Bound {
    /// Width of the range as an unsigned span.
    ///
    /// `abs_diff` keeps extreme ranges (down to `i64::MIN:i64::MAX`) exact
    /// where signed subtraction would overflow.
    #[must_use]
    pub fn span(&self) -> u64 {
        self.upper.abs_diff(self.lower)
    }

    /// Draw a uniform integer from the range.
    ///
    /// Samples an offset below [`span`](Self::span) by rejection and adds it
    /// to the lower bound, so every value in `[lower, upper)` is equally
    /// likely.
    pub fn sample(&self, source: &mut ByteSource) -> Result<i64, RandtoolError> {
        let offset = source.integer_below(self.span())?;
        Ok(self.lower.wrapping_add_unsigned(offset))
    }
}

impl FromStr for Bound {
    type Err = RandtoolError;

    /// Parse `"lower:upper"` with `lower < upper`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lower, upper) = s.split_once(':').ok_or_else(|| {
            RandtoolError::Config(format!("invalid bound '{s}' (expected lower:upper)"))
        })?;

        let lower: i64 = lower
            .trim()
            .parse()
            .map_err(|_| RandtoolError::Config(format!("invalid lower bound '{}'", lower.trim())))?;
        let upper: i64 = upper
            .trim()
            .parse()
            .map_err(|_| RandtoolError::Config(format!("invalid upper bound '{}'", upper.trim())))?;

        if lower >= upper {
            return Err(RandtoolError::Config(format!(
                "empty bound {lower}:{upper} (lower must be below upper)"
            )));
        }

        Ok(Bound { lower, upper })
    }
}

/// How the byte stream is keyed.
///
/// A seed selects the deterministic counter-mode source; without one, the
/// OS entropy source is used. The seed string is scrubbed on drop.
pub enum SourceConfig {
    /// Reproducible stream: seed and salt pushed through a memory-hard KDF.
    Seeded {
        seed: Zeroizing<String>,
        salt: String,
        params: KdfParams,
    },
    /// Non-reproducible stream from the operating system.
    Entropy,
}

impl SourceConfig {
    /// Build the configured byte source.
    ///
    /// # Errors
    ///
    /// Propagates KDF parameter rejection and derivation failures; the
    /// entropy variant cannot fail here.
    pub fn build_source(&self) -> Result<ByteSource, RandtoolError> {
        match self {
            SourceConfig::Seeded { seed, salt, params } => {
                let material = derive_key_material(seed, salt, params)?;
                Ok(ByteSource::from_counter(CounterSource::new(
                    material.key(),
                    material.counter(),
                )))
            }
            SourceConfig::Entropy => Ok(ByteSource::from_entropy()),
        }
    }
}
