//! src/source/mod.rs
//! Arbitrary-length reads over block-sized pseudorandom primitives

pub mod counter;
pub mod entropy;

pub use counter::CounterSource;
pub use entropy::EntropySource;

use crate::consts::{BLOCK_SIZE, FLOAT_BYTES, FLOAT_SCALE};
use crate::error::RandtoolError;

/// The two block producers a [`ByteSource`] can wrap.
///
/// A closed set: deterministic counter-mode output, or raw OS entropy.
enum Producer {
    Entropy(EntropySource),
    Counter(CounterSource),
}

/// Buffered byte stream over a block-sized pseudorandom producer.
///
/// Pulls whole blocks from the backend on demand and serves reads of any
/// length, retaining surplus bytes for the next call. Single-threaded and
/// pull-driven; the buffer is owned exclusively by this source.
pub struct ByteSource {
    producer: Producer,
    buffer: Vec<u8>,
}

impl ByteSource {
    /// Deterministic source over a counter-mode backend.
    #[must_use]
    pub fn from_counter(counter: CounterSource) -> Self {
        Self {
            producer: Producer::Counter(counter),
            buffer: Vec::new(),
        }
    }

    /// Non-deterministic source over the OS entropy pool.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            producer: Producer::Entropy(EntropySource::new()),
            buffer: Vec::new(),
        }
    }

    /// Pull exactly one block from the backend, bypassing the buffer.
    #[inline]
    pub fn next_block(&mut self) -> Result<[u8; BLOCK_SIZE], RandtoolError> {
        match &mut self.producer {
            Producer::Entropy(src) => src.next_block(),
            Producer::Counter(src) => Ok(src.next_block()),
        }
    }

    /// Take exactly `n` bytes from the stream.
    ///
    /// Buffered bytes are consumed first; whole blocks are pulled until the
    /// request is covered, and any surplus stays buffered for the next call.
    pub fn take_bytes(&mut self, n: usize) -> Result<Vec<u8>, RandtoolError> {
        while self.buffer.len() < n {
            let block = self.next_block()?;
            self.buffer.extend_from_slice(&block);
        }
        let rest = self.buffer.split_off(n);
        Ok(std::mem::replace(&mut self.buffer, rest))
    }

    /// Take `n` random bits, packed big-endian into `ceil(n / 8)` bytes.
    ///
    /// When `n` is not a multiple of 8, the first byte keeps only its low
    /// `n % 8` bits and the bits above them are zero. When `n` is a multiple
    /// of 8 every byte is used in full and no mask is applied.
    pub fn take_bits(&mut self, n: usize) -> Result<Vec<u8>, RandtoolError> {
        let mut out = self.take_bytes(n.div_ceil(8))?;
        let rem = n % 8;
        if rem != 0 {
            out[0] &= (1u8 << rem) - 1;
        }
        Ok(out)
    }

    /// Draw a uniform integer in `[0, upper)` by rejection sampling.
    ///
    /// Draws exactly `bit_length(upper)` bits per attempt and redraws until
    /// the candidate falls below `upper`. Rejection keeps the distribution
    /// exactly uniform; no modulo reduction is ever applied.
    ///
    /// `upper` must be at least 1 — an empty range has nothing to draw.
    pub fn integer_below(&mut self, upper: u64) -> Result<u64, RandtoolError> {
        debug_assert!(upper >= 1, "integer_below requires upper >= 1");

        let bits = (u64::BITS - upper.leading_zeros()) as usize;
        loop {
            let raw = self.take_bits(bits)?;
            let mut word = [0u8; 8];
            word[8 - raw.len()..].copy_from_slice(&raw);
            let candidate = u64::from_be_bytes(word);
            if candidate < upper {
                return Ok(candidate);
            }
        }
    }

    /// Draw a uniform float in `[0, 1)` with full 53-bit precision.
    ///
    /// Consumes 7 stream bytes, discards the low 3 bits and scales the
    /// remaining 53-bit integer by 2^-53. The result can never round up
    /// to 1.0.
    pub fn next_float(&mut self) -> Result<f64, RandtoolError> {
        let raw = self.take_bytes(FLOAT_BYTES)?;
        let mut word = [0u8; 8];
        word[1..].copy_from_slice(&raw);
        Ok((u64::from_be_bytes(word) >> 3) as f64 * FLOAT_SCALE)
    }

    /// Lazily yield `total` bytes in chunks of at most one block.
    ///
    /// Each chunk pulls exactly one backend block, bypassing the pull
    /// buffer; a final partial chunk discards the unused tail of its block.
    /// The iterator is forward-only — consuming it advances the stream.
    pub fn chunks(&mut self, total: u64) -> Chunks<'_> {
        Chunks {
            source: self,
            remaining: total,
        }
    }
}

/// Iterator of block-sized chunks, created by [`ByteSource::chunks`].
pub struct Chunks<'a> {
    source: &'a mut ByteSource,
    remaining: u64,
}

impl Iterator for Chunks<'_> {
    type Item = Result<Vec<u8>, RandtoolError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let take = self.remaining.min(BLOCK_SIZE as u64) as usize;
        self.remaining -= take as u64;
        Some(self.source.next_block().map(|block| block[..take].to_vec()))
    }
}
