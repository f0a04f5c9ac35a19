// ranker.rs — Candidate ranker.
//
// A bounded min-heap over `weighted_freq = length * count`, keyed so the
// smallest-frequency entry is evicted first when the heap overflows its
// capacity. `std::collections::BinaryHeap` with `Reverse` gives this
// behavior directly, without a hand-rolled heap implementation.

use crate::config::N_MAX;
use crate::error::SeqpackError;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Eq, PartialEq)]
struct Candidate {
    weighted_freq: u64,
    bytes: Vec<u8>,
    count: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weighted_freq
            .cmp(&other.weighted_freq)
            .then_with(|| self.bytes.cmp(&other.bytes))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps only the `N_MAX` highest-`weighted_freq` candidates from `entries`,
/// returning them sorted descending by `weighted_freq` (ties broken by byte
/// content, for deterministic output).
///
/// Infallible in practice — Rust's global allocator aborts on true
/// allocation failure rather than returning an error — but the `Result`
/// return keeps this call site consistent with the rest of the pipeline's
/// error surface (see `SeqpackError::OutOfMemory`).
pub fn rank_top(entries: Vec<(Vec<u8>, u64)>) -> Result<Vec<(Vec<u8>, u64, u64)>, SeqpackError> {
    let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::with_capacity(N_MAX + 1);
    for (bytes, count) in entries {
        let weighted_freq = bytes.len() as u64 * count;
        let candidate = Candidate {
            weighted_freq,
            bytes,
            count,
        };
        if heap.len() < N_MAX {
            heap.push(Reverse(candidate));
        } else if let Some(Reverse(min)) = heap.peek() {
            if candidate.weighted_freq > min.weighted_freq {
                heap.pop();
                heap.push(Reverse(candidate));
            }
        }
    }

    let mut ranked: Vec<Candidate> = heap.into_iter().map(|Reverse(c)| c).collect();
    ranked.sort_by(|a, b| {
        b.weighted_freq
            .cmp(&a.weighted_freq)
            .then_with(|| a.bytes.cmp(&b.bytes))
    });
    Ok(ranked
        .into_iter()
        .map(|c| (c.bytes, c.count, c.weighted_freq))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_top_n_max_by_weighted_frequency() {
        let entries = vec![
            (b"aa".to_vec(), 100),  // wf = 200
            (b"bb".to_vec(), 1),    // wf = 2
            (b"ccc".to_vec(), 50),  // wf = 150
        ];
        let ranked = rank_top(entries).unwrap();
        assert_eq!(ranked[0].0, b"aa".to_vec());
        assert_eq!(ranked[1].0, b"ccc".to_vec());
        assert_eq!(ranked[2].0, b"bb".to_vec());
    }

    #[test]
    fn bounds_output_at_n_max() {
        let entries: Vec<(Vec<u8>, u64)> = (0..N_MAX + 50)
            .map(|i| (i.to_string().into_bytes(), 1))
            .collect();
        let ranked = rank_top(entries).unwrap();
        assert_eq!(ranked.len(), N_MAX);
    }

    #[test]
    fn empty_input_ranks_to_empty() {
        assert!(rank_top(Vec::new()).unwrap().is_empty());
    }
}
