// decoder.rs — Header + body reader, the mirror image of `encoder.rs`.
//
// A truncated or malformed header is `CorruptStream`; an unknown `(group,
// codeword)` pair in the body is `CorruptStream`; a body that runs out of
// bits mid-emission is treated as expected end-of-stream padding rather
// than an error — this tolerates up to seven padding zero bits and never
// panics or loops on truncated input without needing to distinguish the two
// cases up front.

use crate::bitio::BitReader;
use crate::config::{group_width, L_MAX};
use crate::error::SeqpackError;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Decompresses a complete compressed stream held in memory.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, SeqpackError> {
    let mut cursor = data;
    decompress_reader(&mut cursor)
}

/// Decompresses from any `Read`, consuming the header then the body.
pub fn decompress_reader<R: Read>(input: &mut R) -> Result<Vec<u8>, SeqpackError> {
    let mut count_bytes = [0u8; 2];
    read_exact_or_corrupt(input, &mut count_bytes, "truncated header: missing entry count")?;
    let entry_count = u16::from_be_bytes(count_bytes);

    let mut reader = BitReader::new(input);
    let mut decoder_map: HashMap<(u8, u16), Vec<u8>> = HashMap::with_capacity(entry_count as usize);

    for _ in 0..entry_count {
        let length = read_required_bits(&mut reader, 3, "truncated header: missing length field")?;
        if !(1..=L_MAX as u32).contains(&length) {
            return Err(SeqpackError::CorruptStream(format!(
                "invalid sequence length {length} in header"
            )));
        }
        let mut bytes = Vec::with_capacity(length as usize);
        for _ in 0..length {
            let b = read_required_bits(&mut reader, 8, "truncated header: missing payload byte")?;
            bytes.push(b as u8);
        }
        let group = read_required_bits(&mut reader, 2, "truncated header: missing group field")?;
        let width = group_width(group as u8);
        let codeword = read_required_bits(&mut reader, width as u8, "truncated header: missing codeword")?;
        decoder_map.insert((group as u8, codeword as u16), bytes);
    }
    reader.align_to_byte();

    let mut output = Vec::new();
    loop {
        let flag = match reader.read_bits(1)? {
            Some(v) => v,
            None => break,
        };
        if flag == 0 {
            match reader.read_bits(8)? {
                Some(byte) => output.push(byte as u8),
                None => break,
            }
        } else {
            let group = match reader.read_bits(2)? {
                Some(v) => v as u8,
                None => break,
            };
            let width = group_width(group);
            let codeword = match reader.read_bits(width as u8)? {
                Some(v) => v as u16,
                None => break,
            };
            match decoder_map.get(&(group, codeword)) {
                Some(bytes) => output.extend_from_slice(bytes),
                None => {
                    return Err(SeqpackError::CorruptStream(format!(
                        "unknown (group={group}, codeword={codeword}) in body"
                    )))
                }
            }
        }
    }

    Ok(output)
}

fn read_exact_or_corrupt<R: Read>(
    input: &mut R,
    buf: &mut [u8],
    msg: &str,
) -> Result<(), SeqpackError> {
    match input.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            Err(SeqpackError::CorruptStream(msg.to_string()))
        }
        Err(e) => Err(SeqpackError::IoError(e)),
    }
}

fn read_required_bits<R: Read>(
    reader: &mut BitReader<R>,
    n: u8,
    msg: &str,
) -> Result<u32, SeqpackError> {
    reader
        .read_bits(n)?
        .ok_or_else(|| SeqpackError::CorruptStream(msg.to_string()))
}

/// Reads `input`, decompresses it, and writes the result to `output`.
pub fn decompress_file(input: &Path, output: &Path) -> Result<(), SeqpackError> {
    if input.is_dir() {
        return Err(SeqpackError::InvalidArgument(format!(
            "{} is a directory, expected a regular file",
            input.display()
        )));
    }
    let mut file = std::fs::File::open(input)?;
    let restored = decompress_reader(&mut file)?;
    std::fs::write(output, restored)?;
    Ok(())
}
