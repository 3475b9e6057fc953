//! Byte-level sparse model: three fixed, non-contiguous offset patterns
//! into history (`[-1,-3,-5]`, `[-1,-2,-4]`, `[-2,-4,-8]`), each with its
//! own context table, averaged into one distribution. Sparse contexts
//! catch periodic structure — columns in tabular text, repeating struct
//! layouts — that a contiguous trailing-byte context misses.

use std::collections::HashMap;

use crate::bytemixer::{IBytePredictor, FREQ_TOTAL};
use crate::ppm::table::{distribution_from_stats, fnv1a_hash, ContextStats};

const PATTERNS: [[usize; 3]; 3] = [[1, 3, 5], [1, 2, 4], [2, 4, 8]];

pub struct SparseModel {
    history: Vec<u8>,
    tables: [HashMap<u64, ContextStats>; 3],
}
impl SparseModel {
    pub fn new() -> SparseModel {
        SparseModel { history: Vec::new(), tables: [HashMap::new(), HashMap::new(), HashMap::new()] }
    }

    fn context_key(&self, pattern: &[usize; 3]) -> Option<u64> {
        let len = self.history.len();
        if pattern.iter().any(|&off| off > len) {
            return None;
        }
        let bytes: Vec<u8> = pattern.iter().map(|&off| self.history[len - off]).collect();
        Some(fnv1a_hash(&bytes))
    }
}
impl Default for SparseModel {
    fn default() -> Self {
        SparseModel::new()
    }
}
impl IBytePredictor for SparseModel {
    fn predict(&self) -> [u32; 256] {
        let mut acc = [0f64; 256];
        for (i, pattern) in PATTERNS.iter().enumerate() {
            let stats = self.context_key(pattern).and_then(|k| self.tables[i].get(&k));
            let freqs = distribution_from_stats(stats);
            for s in 0..256 {
                acc[s] += freqs[s] as f64;
            }
        }

        let mut freqs = [0u32; 256];
        let mut used = 0u32;
        for s in 0..256 {
            let f = (acc[s] / PATTERNS.len() as f64).round().max(1.0) as u32;
            freqs[s] = f;
            used += f;
        }
        if used != FREQ_TOTAL {
            let diff = FREQ_TOTAL as i64 - used as i64;
            let argmax = freqs
                .iter()
                .enumerate()
                .max_by_key(|&(_, &v)| v)
                .map(|(i, _)| i)
                .unwrap_or(0);
            freqs[argmax] = (freqs[argmax] as i64 + diff).max(1) as u32;
        }
        freqs
    }

    fn update(&mut self, symbol: u8) {
        for (i, pattern) in PATTERNS.iter().enumerate() {
            if let Some(key) = self.context_key(pattern) {
                self.tables[i].entry(key).or_default().bump(symbol);
            }
        }
        self.history.push(symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_sums_to_freq_total_before_and_after_history_fills_in() {
        let mut m = SparseModel::new();
        assert_eq!(m.predict().iter().sum::<u32>(), FREQ_TOTAL);
        for b in 0..20u8 {
            m.update(b);
            assert_eq!(m.predict().iter().sum::<u32>(), FREQ_TOTAL);
        }
    }

    #[test]
    fn periodic_pattern_is_learned() {
        let mut m = SparseModel::new();
        for _ in 0..200 {
            m.update(b'A');
            m.update(b'B');
            m.update(b'A');
            m.update(b'C');
        }
        let freqs = m.predict();
        let max = *freqs.iter().max().unwrap();
        assert!(max > FREQ_TOTAL / 256);
    }
}
