// encoder.rs — Header + body writer: header first, byte-padded, then the
// body bitstream.

use crate::bitio::BitWriter;
use crate::codebook::Codebook;
use crate::config::{group_width, BLOCK};
use crate::error::SeqpackError;
use crate::mining::mine_frequencies;
use crate::parse::{parse_block, Emission};
use crate::ranker::rank_top;
use std::collections::HashSet;
use std::path::Path;

/// Compresses `data` end to end: mine, rank, build codebook, parse every
/// block, then write the header (only the entries actually referenced) and
/// body.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, SeqpackError> {
    let frequencies = mine_frequencies(data);
    let ranked = rank_top(frequencies.into_iter().collect())?;
    let codebook = Codebook::build(ranked);

    let mut used: HashSet<(u8, u16)> = HashSet::new();
    let mut body_writer = BitWriter::new(Vec::new());
    for block in data.chunks(BLOCK) {
        let (emissions, block_used) = parse_block(block, &codebook);
        used.extend(block_used);
        write_body(&mut body_writer, &emissions)?;
    }
    let body_bytes = body_writer.finish()?;

    let mut header_writer = BitWriter::new(Vec::new());
    write_header(&mut header_writer, &codebook, &used)?;
    let mut out = header_writer.finish()?;
    out.extend(body_bytes);
    Ok(out)
}

fn write_body<W: std::io::Write>(
    writer: &mut BitWriter<W>,
    emissions: &[Emission],
) -> Result<(), SeqpackError> {
    for emission in emissions {
        match emission {
            Emission::Literal(byte) => {
                writer.write_bits(0, 1)?;
                writer.write_bits(*byte as u32, 8)?;
            }
            Emission::Match { group, codeword, .. } => {
                writer.write_bits(1, 1)?;
                writer.write_bits(*group as u32, 2)?;
                writer.write_bits(*codeword as u32, group_width(*group) as u8)?;
            }
        }
    }
    Ok(())
}

fn write_header<W: std::io::Write>(
    writer: &mut BitWriter<W>,
    codebook: &Codebook,
    used: &HashSet<(u8, u16)>,
) -> Result<(), SeqpackError> {
    let used_entries: Vec<_> = codebook
        .entries()
        .iter()
        .filter(|e| used.contains(&(e.group, e.codeword)))
        .collect();

    writer.write_bits(used_entries.len() as u32, 16)?;
    for entry in used_entries {
        writer.write_bits(entry.bytes.len() as u32, 3)?;
        for &b in &entry.bytes {
            writer.write_bits(b as u32, 8)?;
        }
        writer.write_bits(entry.group as u32, 2)?;
        writer.write_bits(entry.codeword as u32, group_width(entry.group) as u8)?;
    }
    Ok(())
}

/// Reads `input`, compresses it, and writes the result to `output`.
///
/// `input` must be a regular, readable file; `output` is created or
/// truncated.
pub fn compress_file(input: &Path, output: &Path) -> Result<(), SeqpackError> {
    if input.is_dir() {
        return Err(SeqpackError::InvalidArgument(format!(
            "{} is a directory, expected a regular file",
            input.display()
        )));
    }
    let data = std::fs::read(input)?;
    let compressed = compress(&data)?;
    std::fs::write(output, compressed)?;
    Ok(())
}
