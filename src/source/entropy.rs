//! src/source/entropy.rs
//! Non-deterministic block source backed by operating-system entropy

use crate::consts::BLOCK_SIZE;
use crate::error::RandtoolError;
use rand::{rngs::OsRng, TryRngCore};

/// Block source drawing from the operating system's entropy pool.
///
/// Selected when no seed is given; output is non-reproducible by construction.
#[derive(Debug, Clone)]
pub struct EntropySource(OsRng);

impl EntropySource {
    #[inline(always)]
    pub fn new() -> Self {
        Self(OsRng)
    }

    /// Fill one block from the OS entropy pool.
    ///
    /// # Errors
    ///
    /// [`RandtoolError::Crypto`] if the operating system RNG fails.
    #[inline]
    pub fn next_block(&mut self) -> Result<[u8; BLOCK_SIZE], RandtoolError> {
        let mut block = [0u8; BLOCK_SIZE];
        self.0
            .try_fill_bytes(&mut block)
            .map_err(|e| RandtoolError::Crypto(format!("OS entropy failure: {e}")))?;
        Ok(block)
    }
}

impl Default for EntropySource {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
