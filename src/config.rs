// config.rs — Compile-time configuration constants for the sequence-dictionary codec.
// Every tunable the pipeline needs lives here as a named `pub const` instead
// of being scattered through the modules that use it. None of these are
// overridable by environment variable or CLI flag: the wire format is fixed,
// so the constants describing it cannot vary between a compressing run and a
// decompressing run of the same binary.

/// Minimum byte-sequence length ever mined, ranked, or assigned a codeword.
/// Length-1 sequences can never recoup their own flag overhead.
pub const L_MIN: usize = 2;

/// Maximum byte-sequence length. Bounded by the 3-bit length field in the
/// header (0 is reserved, so 1..=7 is representable; 1 is never used).
pub const L_MAX: usize = 7;

/// Input block size in bytes. Blocks are parsed independently of one
/// another; only the frequency miner looks across block boundaries, via the
/// overlap window below.
pub const BLOCK: usize = 10_000;

/// Bytes the frequency miner reads past the end of a block's starting-offset
/// window so a match spanning a block boundary is still counted exactly once.
pub const MINING_OVERLAP: usize = L_MAX - 1;

/// Fixed modulus for the FNV-1a bucket hash backing the frequency table.
pub const HASH_MODULUS: u32 = 1_000_003;

/// Capacity of the candidate ranker's bounded min-heap: the number of
/// distinct sequences carried forward into group assignment.
pub const N_MAX: usize = 4144;

/// Minimum net savings, in bits, a candidate must clear to be retained.
pub const LEAST_REDUCTION: i64 = 16;

/// Beam width: nodes kept per distinct `incoming_weight` value at each DAG
/// layer, ranked by `cumulative_savings` descending.
pub const K_SAV: usize = 7;

/// Secondary beam width, ranked by fewest emissions. Disabled by default.
pub const K_LEN: usize = 0;

/// Number of input bytes after which the parse search commits to its best
/// partial parse so far and starts a fresh DAG, bounding the working set.
pub const CHECKPOINT: usize = 200;

/// Default size of the bulk byte buffer bit I/O flushes through.
pub const BIT_BUFFER_SIZE: usize = 1 << 20;

/// Alignment, in bytes, the bit I/O buffer is sized in multiples of, chosen
/// for SIMD-friendly bulk reads/writes of the underlying file.
pub const BIT_BUFFER_ALIGN: usize = 64;

/// One entry per codeword-width group (0..=3).
#[derive(Clone, Copy, Debug)]
pub struct GroupSpec {
    /// Codeword width in bits.
    pub width: u32,
    /// Number of ranked candidates this group accepts (2^width).
    pub capacity: usize,
}

/// Fixed group table: widths 4, 4, 4, 12 bits; capacities 16, 16, 16, 4096.
pub const GROUPS: [GroupSpec; 4] = [
    GroupSpec { width: 4, capacity: 16 },
    GroupSpec { width: 4, capacity: 16 },
    GroupSpec { width: 4, capacity: 16 },
    GroupSpec { width: 12, capacity: 4096 },
];

/// Codeword width in bits for a given group (0..=3).
#[inline]
pub fn group_width(group: u8) -> u32 {
    GROUPS[group as usize].width
}

/// The group a candidate at the given zero-based *accepted* rank falls into,
/// per the cumulative rank ceilings in the group table.
///
/// `rank` must be `< N_MAX`.
#[inline]
pub fn group_for_rank(rank: usize) -> u8 {
    let mut floor = 0usize;
    for (i, g) in GROUPS.iter().enumerate() {
        if rank < floor + g.capacity {
            return i as u8;
        }
        floor += g.capacity;
    }
    unreachable!("rank {rank} exceeds total group capacity {N_MAX}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_to_group_boundaries() {
        assert_eq!(group_for_rank(0), 0);
        assert_eq!(group_for_rank(15), 0);
        assert_eq!(group_for_rank(16), 1);
        assert_eq!(group_for_rank(31), 1);
        assert_eq!(group_for_rank(32), 2);
        assert_eq!(group_for_rank(47), 2);
        assert_eq!(group_for_rank(48), 3);
        assert_eq!(group_for_rank(N_MAX - 1), 3);
    }

    #[test]
    fn total_capacity_matches_n_max() {
        let total: usize = GROUPS.iter().map(|g| g.capacity).sum();
        assert_eq!(total, N_MAX);
    }
}
