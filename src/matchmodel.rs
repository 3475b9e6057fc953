//! Byte-level match model: remembers where a 4-byte context was last
//! seen and, while the bytes that follow keep matching, predicts the next
//! byte with confidence scaled by how long the match has run.

use std::collections::HashMap;

use crate::bytemixer::{IBytePredictor, FREQ_TOTAL};
use crate::ppm::table::fnv1a_hash;

const MIN_MATCH: usize = 4;
const CONFIDENCE_PER_BYTE: u32 = 4000;

pub struct MatchModel {
    history: Vec<u8>,
    table: HashMap<u64, usize>,
    match_ptr: Option<usize>,
    match_len: u32,
}
impl MatchModel {
    pub fn new() -> MatchModel {
        MatchModel { history: Vec::new(), table: HashMap::new(), match_ptr: None, match_len: 0 }
    }

    fn context_hash(&self) -> Option<u64> {
        if self.history.len() < MIN_MATCH {
            return None;
        }
        let start = self.history.len() - MIN_MATCH;
        Some(fnv1a_hash(&self.history[start..]))
    }
}
impl Default for MatchModel {
    fn default() -> Self {
        MatchModel::new()
    }
}
impl IBytePredictor for MatchModel {
    fn predict(&self) -> [u32; 256] {
        let uniform_share = (FREQ_TOTAL / 256).max(1);
        if let Some(ptr) = self.match_ptr {
            if ptr < self.history.len() {
                let predicted = self.history[ptr];
                let confidence = (self.match_len * CONFIDENCE_PER_BYTE).min(FREQ_TOTAL - 256 * uniform_share);
                let mut freqs = [uniform_share; 256];
                freqs[predicted as usize] += confidence;

                let sum: u32 = freqs.iter().sum();
                if sum != FREQ_TOTAL {
                    freqs[predicted as usize] = (freqs[predicted as usize] as i64
                        + (FREQ_TOTAL as i64 - sum as i64))
                        .max(1) as u32;
                }
                return freqs;
            }
        }

        let mut freqs = [uniform_share; 256];
        let sum: u32 = freqs.iter().sum();
        if sum != FREQ_TOTAL {
            freqs[0] += FREQ_TOTAL - sum;
        }
        freqs
    }

    fn update(&mut self, symbol: u8) {
        if let Some(ptr) = self.match_ptr {
            if ptr < self.history.len() && self.history[ptr] == symbol {
                self.match_len += 1;
                self.match_ptr = Some(ptr + 1);
            } else {
                self.match_ptr = None;
                self.match_len = 0;
            }
        }

        self.history.push(symbol);

        if let Some(h) = self.context_hash() {
            if self.match_ptr.is_none() {
                if let Some(&pos) = self.table.get(&h) {
                    self.match_ptr = Some(pos);
                    self.match_len = 0;
                }
            }
            self.table.insert(h, self.history.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_model_predicts_uniformly() {
        let m = MatchModel::new();
        let freqs = m.predict();
        assert_eq!(freqs.iter().sum::<u32>(), FREQ_TOTAL);
        assert_eq!(freqs[0], freqs[255]);
    }

    #[test]
    fn repeated_pattern_grows_confident() {
        let mut m = MatchModel::new();
        let pattern = b"abcdabcdabcdabcd";
        for &b in pattern {
            m.update(b);
        }
        // after several repeats of "abcd", the model should have a live
        // match predicting the next byte in the cycle
        let freqs = m.predict();
        let max = *freqs.iter().max().unwrap();
        assert!(max > FREQ_TOTAL / 256);
    }
}
