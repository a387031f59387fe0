//! src/output/xor.rs
//! Keystream XOR over files — streaming rewrite and in-place involution

use crate::consts::TAIL_CHUNK;
use crate::error::RandtoolError;
use crate::source::ByteSource;
use std::io::{Read, Seek, SeekFrom, Write};

/// XOR the first `size` bytes of `input` with the keystream into `output`.
///
/// The keyed region is processed in block-sized chunks; if the input ends
/// early, the region simply stops at EOF. Everything after the keyed region
/// is copied through unchanged in [`TAIL_CHUNK`]-sized pieces, so a
/// partial-file XOR still reproduces the whole file.
///
/// Applying the same keystream twice restores the original input.
///
/// # Errors
///
/// Propagates source and I/O failures unchanged.
pub fn xor_to_writer<R, W>(
    source: &mut ByteSource,
    size: u64,
    mut input: R,
    mut output: W,
) -> Result<(), RandtoolError>
where
    R: Read,
    W: Write,
{
    for chunk in source.chunks(size) {
        let key = chunk?;
        let mut data = vec![0u8; key.len()];

        let got = read_up_to(&mut input, &mut data)?;
        if got == 0 {
            break;
        }
        for (byte, key_byte) in data[..got].iter_mut().zip(&key) {
            *byte ^= key_byte;
        }
        output.write_all(&data[..got])?;

        if got < key.len() {
            break;
        }
    }

    let mut tail = vec![0u8; TAIL_CHUNK];
    loop {
        let got = input.read(&mut tail)?;
        if got == 0 {
            break;
        }
        output.write_all(&tail[..got])?;
    }

    Ok(())
}

/// XOR the next `size` bytes of `file` with the keystream, in place.
///
/// Starts at the file's current position. Each chunk is read, the cursor is
/// seeked back, and the XOR is written over the same span — the read must
/// happen before the write, since both sides share one cursor. Bytes beyond
/// the keyed region are left untouched.
///
/// # Errors
///
/// Propagates source and I/O failures unchanged.
pub fn xor_in_place<F>(source: &mut ByteSource, size: u64, mut file: F) -> Result<(), RandtoolError>
where
    F: Read + Write + Seek,
{
    for chunk in source.chunks(size) {
        let key = chunk?;
        let position = file.stream_position()?;
        let mut data = vec![0u8; key.len()];

        let got = read_up_to(&mut file, &mut data)?;
        if got == 0 {
            break;
        }
        for (byte, key_byte) in data[..got].iter_mut().zip(&key) {
            *byte ^= key_byte;
        }

        file.seek(SeekFrom::Start(position))?;
        file.write_all(&data[..got])?;

        if got < key.len() {
            break;
        }
    }

    Ok(())
}

/// Read until `buf` is full or the reader hits EOF; returns the bytes read.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, RandtoolError> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
