// codebook.rs — Group assigner and codeword allocator.
//
// Ranks candidates by weighted frequency, rejects any whose net savings
// would not recoup its own header cost, and hands out sequential codewords
// within each of the four groups. Groups are numbered 0..3 throughout.

use crate::config::{group_for_rank, group_width, LEAST_REDUCTION, N_MAX};
use std::collections::HashMap;

/// One accepted dictionary entry: its bytes, observed statistics, and its
/// assigned `(group, codeword)` pair.
#[derive(Clone, Debug)]
pub struct SequenceDescriptor {
    pub bytes: Vec<u8>,
    pub count: u64,
    pub weighted_freq: u64,
    pub group: u8,
    pub codeword: u16,
}

/// The read-only dictionary built once per compression run: an encoder view
/// (bytes -> descriptor) and a decoder view ((group, codeword) -> descriptor).
pub struct Codebook {
    entries: Vec<SequenceDescriptor>,
    by_bytes: HashMap<Vec<u8>, usize>,
    by_code: HashMap<(u8, u16), usize>,
}

impl Codebook {
    /// Builds a codebook from ranked `(bytes, count, weighted_freq)` triples,
    /// already sorted or not — this re-sorts defensively so construction
    /// only ever depends on the ranking contract, not caller order.
    ///
    /// Walks the ranking in descending `weighted_freq` order, assigning each
    /// accepted candidate the group implied by its *accepted* rank (not its
    /// position in the input list — a rejected candidate does not consume a
    /// rank). A candidate is rejected when its net savings, accounting for
    /// its header cost and per-occurrence emission cost, falls below
    /// `LEAST_REDUCTION` bits.
    pub fn build(mut ranked: Vec<(Vec<u8>, u64, u64)>) -> Self {
        ranked.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));

        let mut entries = Vec::new();
        let mut next_codeword = [0u16; 4];
        let mut accepted = 0usize;

        for (bytes, count, weighted_freq) in ranked {
            if accepted >= N_MAX {
                break;
            }
            let group = group_for_rank(accepted);
            let width = group_width(group) as i64;
            let len = bytes.len() as i64;
            let header_cost = 3 + 8 * len + 2 + width;
            let net = len * 8 * count as i64 - (width + 3) * count as i64 - header_cost;
            if net < LEAST_REDUCTION {
                continue;
            }

            let codeword = next_codeword[group as usize];
            next_codeword[group as usize] += 1;
            entries.push(SequenceDescriptor {
                bytes,
                count,
                weighted_freq,
                group,
                codeword,
            });
            accepted += 1;
        }

        let mut by_bytes = HashMap::with_capacity(entries.len());
        let mut by_code = HashMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            by_bytes.insert(e.bytes.clone(), i);
            by_code.insert((e.group, e.codeword), i);
        }

        Codebook {
            entries,
            by_bytes,
            by_code,
        }
    }

    pub fn lookup_bytes(&self, bytes: &[u8]) -> Option<&SequenceDescriptor> {
        self.by_bytes.get(bytes).map(|&i| &self.entries[i])
    }

    pub fn lookup_code(&self, group: u8, codeword: u16) -> Option<&SequenceDescriptor> {
        self.by_code.get(&(group, codeword)).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[SequenceDescriptor] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
