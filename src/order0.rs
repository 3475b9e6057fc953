//! Order-0 adaptive frequency model: a flat 256-symbol table consumed
//! directly by the range coder.

const NUM_SYMBOLS: usize = 256;
const RESCALE_AT: u32 = 1 << 14;

pub struct Order0Model {
    freq: [u32; NUM_SYMBOLS],
    cum:  [u32; NUM_SYMBOLS + 1],
    total: u32,
}
impl Order0Model {
    pub fn new() -> Order0Model {
        let mut m = Order0Model {
            freq: [1; NUM_SYMBOLS],
            cum:  [0; NUM_SYMBOLS + 1],
            total: NUM_SYMBOLS as u32,
        };
        m.rebuild_cum();
        m
    }

    fn rebuild_cum(&mut self) {
        let mut acc = 0u32;
        for i in 0..NUM_SYMBOLS {
            self.cum[i] = acc;
            acc += self.freq[i];
        }
        self.cum[NUM_SYMBOLS] = acc;
        self.total = acc;
    }

    /// `(cum_freq, freq, total)` for the range coder's `encode`.
    pub fn encode_info(&self, symbol: u8) -> (u32, u32, u32) {
        let s = symbol as usize;
        (self.cum[s], self.freq[s], self.total)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Largest `i` with `cum[i] <= cum_value`, i.e. the symbol whose slot
    /// contains `cum_value`.
    pub fn symbol_from_cum(&self, cum_value: u32) -> u8 {
        let mut lo = 0usize;
        let mut hi = NUM_SYMBOLS;
        while lo + 1 < hi {
            let mid = (lo + hi) / 2;
            if self.cum[mid] <= cum_value {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo as u8
    }

    pub fn update(&mut self, symbol: u8) {
        let s = symbol as usize;
        self.freq[s] += 1;
        for i in s + 1..=NUM_SYMBOLS {
            self.cum[i] += 1;
        }
        self.total += 1;

        if self.total >= RESCALE_AT {
            log::trace!("order0: rescaling at total={}", self.total);
            for f in self.freq.iter_mut() {
                *f = (*f + 1) >> 1;
            }
            self.rebuild_cum();
        }
    }
}
impl Default for Order0Model {
    fn default() -> Self {
        Order0Model::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_uniform() {
        let m = Order0Model::new();
        assert_eq!(m.total(), 256);
        for s in 0..=255u8 {
            assert_eq!(m.encode_info(s).1, 1);
        }
    }

    #[test]
    fn cumulative_sums_to_total_after_updates() {
        let mut m = Order0Model::new();
        for _ in 0..5000 {
            m.update(b'a');
            assert_eq!(m.total(), m.encode_info(255).0 + m.encode_info(255).1);
            assert!(m.total() <= 1 << 14);
        }
    }

    #[test]
    fn symbol_from_cum_matches_encode_info() {
        let mut m = Order0Model::new();
        for i in 0..500u32 {
            m.update((i % 256) as u8);
        }
        for s in 0..=255u8 {
            let (cum, freq, _) = m.encode_info(s);
            for v in cum..cum + freq {
                assert_eq!(m.symbol_from_cum(v), s);
            }
        }
    }

    #[test]
    fn rescale_occurs_under_sustained_single_symbol() {
        let mut m = Order0Model::new();
        let mut rescaled = false;
        for _ in 0..(1 << 14) + 10 {
            let before = m.total();
            m.update(0x42);
            if m.total() < before {
                rescaled = true;
            }
        }
        assert!(rescaled);
    }
}
