//! src/output/mod.rs
//! Output encodings over a byte source

pub mod xor;

use crate::config::Bound;
use crate::error::RandtoolError;
use crate::source::ByteSource;
use std::io::Write;

/// The output encodings the tool can emit.
///
/// A closed set behind one entry point: each variant drains the source in
/// its own format and writes to the destination.
pub enum Emitter {
    /// `size` raw stream bytes, verbatim.
    Raw { size: u64 },
    /// `size` stream bytes, hex-encoded, newline-terminated.
    Hex { size: u64 },
    /// `count` integers drawn from `bound`, one decimal per line.
    Integer { bound: Bound, count: u64 },
    /// `count` floats in [0, 1), one per line.
    Float { count: u64 },
    /// One uniformly selected entry from `choices`, newline-terminated.
    Choice { choices: Vec<String> },
}

impl Emitter {
    /// Drain `source` through this encoding into `out`.
    ///
    /// Raw and hex output is produced in lazy block-sized chunks, so the
    /// requested size never has to fit in memory at once.
    ///
    /// # Errors
    ///
    /// [`RandtoolError::Config`] for an empty choice list; otherwise
    /// whatever the source or the writer reports.
    pub fn run<W: Write>(&self, source: &mut ByteSource, out: &mut W) -> Result<(), RandtoolError> {
        match self {
            Emitter::Raw { size } => {
                for chunk in source.chunks(*size) {
                    out.write_all(&chunk?)?;
                }
            }
            Emitter::Hex { size } => {
                for chunk in source.chunks(*size) {
                    out.write_all(hex::encode(chunk?).as_bytes())?;
                }
                out.write_all(b"\n")?;
            }
            Emitter::Integer { bound, count } => {
                for _ in 0..*count {
                    writeln!(out, "{}", bound.sample(source)?)?;
                }
            }
            Emitter::Float { count } => {
                for _ in 0..*count {
                    writeln!(out, "{}", source.next_float()?)?;
                }
            }
            Emitter::Choice { choices } => {
                if choices.is_empty() {
                    return Err(RandtoolError::Config(
                        "empty choice list (nothing to pick from)".into(),
                    ));
                }
                let idx = source.integer_below(choices.len() as u64)?;
                writeln!(out, "{}", choices[idx as usize])?;
            }
        }
        Ok(())
    }
}
