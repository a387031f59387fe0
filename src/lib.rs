// src/lib.rs

pub mod config;
pub mod consts;
pub mod error;
pub mod kdf;
pub mod output;
pub mod source;

// High-level API — this is what most users import
pub use config::{Bound, SourceConfig};
pub use error::RandtoolError;
pub use output::xor::{xor_in_place, xor_to_writer};
pub use output::Emitter;
pub use source::{ByteSource, CounterSource, EntropySource};

// Low-level KDF pieces — public at the root so custom pipelines can derive
// key material without going through SourceConfig
pub use kdf::{derive_key_material, salt_from_input, KdfAlgorithm, KdfParams, KeyMaterial};
