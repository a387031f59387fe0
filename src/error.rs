//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, RandtoolError>`](RandtoolError) for comprehensive error handling.

use thiserror::Error;

/// The error type for all randtool operations.
///
/// This enum covers I/O errors, configuration errors, cryptographic errors,
/// and keystream exhaustion.
#[derive(Error, Debug)]
pub enum RandtoolError {
    /// I/O error occurred while reading input or writing output.
    ///
    /// This variant wraps [`std::io::Error`] and is automatically created
    /// when I/O operations fail (e.g., file not found, read/write errors).
    /// I/O errors are fatal and never retried.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration supplied by the caller.
    ///
    /// This variant is used for errors in user-supplied settings such as:
    /// - Malformed bound strings (`lower:upper`)
    /// - Malformed or out-of-range KDF parameters
    /// - Empty choice lists
    /// - Incompatible flag combinations
    #[error("Config error: {0}")]
    Config(String),

    /// Cryptographic operation failed.
    ///
    /// This variant is used for errors in cryptographic operations such as:
    /// - KDF derivation failures
    /// - OS entropy failures
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// The strict counter source ran out of blocks.
    ///
    /// Returned only by the non-wrapping keystream path once the 128-bit
    /// counter has cycled through its entire space. The default production
    /// path wraps silently and never returns this.
    #[error("Keystream exhausted: counter space consumed")]
    Exhausted,
}
