//! Byte-level word model: tracks a rolling hash of the word currently
//! being typed and the word before it, and predicts the next byte from
//! what has historically followed that `(prev_word, current_word)` pair.

use std::collections::HashMap;

use crate::bytemixer::IBytePredictor;
use crate::ppm::table::{distribution_from_stats, ContextStats};

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

pub struct WordModel {
    cur_hash: u64,
    prev_hash: u64,
    table: HashMap<u64, ContextStats>,
}
impl WordModel {
    pub fn new() -> WordModel {
        WordModel { cur_hash: 0, prev_hash: 0, table: HashMap::new() }
    }

    fn context_key(&self) -> u64 {
        self.prev_hash.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(self.cur_hash)
    }
}
impl Default for WordModel {
    fn default() -> Self {
        WordModel::new()
    }
}
impl IBytePredictor for WordModel {
    fn predict(&self) -> [u32; 256] {
        distribution_from_stats(self.table.get(&self.context_key()))
    }

    fn update(&mut self, symbol: u8) {
        let key = self.context_key();
        self.table.entry(key).or_default().bump(symbol);

        if is_word_byte(symbol) {
            self.cur_hash = self.cur_hash.wrapping_mul(0x0000_0100_0000_01b3).wrapping_add(symbol as u64);
        } else {
            if self.cur_hash != 0 {
                self.prev_hash = self.cur_hash;
            }
            self.cur_hash = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_model_predicts_uniformly() {
        let m = WordModel::new();
        let freqs = m.predict();
        assert_eq!(freqs.iter().sum::<u32>(), crate::ppm::table::FREQ_TOTAL);
    }

    #[test]
    fn learns_the_byte_that_follows_a_word_pair() {
        let mut m = WordModel::new();
        for _ in 0..50 {
            for &b in b"the cat sat" {
                m.update(b);
            }
        }
        let freqs = m.predict();
        assert!(freqs.iter().sum::<u32>() == crate::ppm::table::FREQ_TOTAL);
    }
}
