//! src/source/counter.rs
//! Deterministic keystream blocks — AES-128 over a big-endian 128-bit counter

use crate::consts::{BLOCK_SIZE, KEY_SIZE};
use crate::error::RandtoolError;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128Enc, Block as AesBlock};

/// Counter-mode pseudorandom block source.
///
/// Each block is the AES-128 encryption of the current counter value; the
/// counter is read, encrypted, then incremented. The same key and initial
/// counter always reproduce the same stream.
pub struct CounterSource {
    cipher: Aes128Enc,
    counter: u128,
    exhausted: bool,
}

impl CounterSource {
    /// Build a source from an AES key and a full 16-byte initial counter.
    ///
    /// This is the pairing produced by
    /// [`derive_key_material`](crate::kdf::derive_key_material): the KDF
    /// output supplies both halves.
    #[must_use]
    pub fn new(key: &[u8; KEY_SIZE], initial_counter: &[u8; BLOCK_SIZE]) -> Self {
        Self {
            cipher: Aes128Enc::new(key.into()),
            counter: u128::from_be_bytes(*initial_counter),
            exhausted: false,
        }
    }

    /// Build a source starting at a plain block index (high counter bits zero).
    #[must_use]
    pub fn from_block_index(key: &[u8; KEY_SIZE], index: u64) -> Self {
        Self {
            cipher: Aes128Enc::new(key.into()),
            counter: u128::from(index),
            exhausted: false,
        }
    }

    /// Produce the next keystream block.
    ///
    /// Reads the counter, encrypts it, then increments. The counter wraps
    /// modulo 2^128, so this path never fails.
    #[inline(always)]
    pub fn next_block(&mut self) -> [u8; BLOCK_SIZE] {
        let block = self.encrypt_counter();
        self.counter = self.counter.wrapping_add(1);
        block
    }

    /// Produce the next keystream block, refusing to cycle.
    ///
    /// Identical to [`next_block`](Self::next_block) until the counter has
    /// consumed its entire space; the call after the final block returns an
    /// error instead of restarting the stream.
    ///
    /// # Errors
    ///
    /// [`RandtoolError::Exhausted`] once all 2^128 counter values have been
    /// used.
    #[inline]
    pub fn next_block_strict(&mut self) -> Result<[u8; BLOCK_SIZE], RandtoolError> {
        if self.exhausted {
            return Err(RandtoolError::Exhausted);
        }
        let block = self.encrypt_counter();
        match self.counter.checked_add(1) {
            Some(next) => self.counter = next,
            None => self.exhausted = true,
        }
        Ok(block)
    }

    #[inline(always)]
    fn encrypt_counter(&self) -> [u8; BLOCK_SIZE] {
        let mut block = AesBlock::from(self.counter.to_be_bytes());
        self.cipher.encrypt_block(&mut block);
        block.into()
    }
}
