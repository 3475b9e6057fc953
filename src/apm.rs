//! Adaptive probability map (a.k.a. SSE): refines a prediction by looking
//! up where it falls on a per-context piecewise-linear curve, initialized
//! to the identity curve so an untrained `Apm` is a no-op.

use crate::logistic::Logistic;

const BINS: usize = 33;
const DOMAIN: i32 = 4096; // stretch() output range [-2048, 2048] shifted to [0, 4096]

pub struct Apm {
    logistic: Logistic,
    num_contexts: usize,
    table: Vec<u16>,
    last_base: usize,
}
impl Apm {
    pub fn new(num_contexts: usize) -> Apm {
        let logistic = Logistic::new();
        let mut table = vec![0u16; num_contexts * BINS];
        for c in 0..num_contexts {
            for i in 0..BINS {
                let stretched = (i as i32 - (BINS as i32 / 2)) * (DOMAIN / (BINS as i32 - 1));
                table[c * BINS + i] = logistic.squash(stretched);
            }
        }
        Apm { logistic, num_contexts, table, last_base: 0 }
    }

    /// Refine `prob16` under `context`. Must be followed by exactly one
    /// `update` call once the bit is known.
    pub fn map(&mut self, context: usize, prob16: u16) -> u16 {
        debug_assert!(context < self.num_contexts);
        let st = (self.logistic.stretch(prob16) + DOMAIN / 2).clamp(0, DOMAIN);
        let step = DOMAIN / (BINS as i32 - 1);
        let bin = (st / step).min(BINS as i32 - 2);
        let w = st - bin * step; // 0..step, weight toward bin+1

        self.last_base = context * BINS + bin as usize;

        let lo = self.table[self.last_base] as i32;
        let hi = self.table[self.last_base + 1] as i32;
        (lo + (hi - lo) * w / step) as u16
    }

    /// Pull both bins bracketing the last `map` call 1/32 toward the
    /// observed bit.
    pub fn update(&mut self, bit: i32) {
        let target = if bit == 1 { 65534i32 } else { 1i32 };
        for idx in [self.last_base, self.last_base + 1] {
            let cur = self.table[idx] as i32;
            let new = cur + ((target - cur) >> 5);
            self.table[idx] = new.clamp(1, 65534) as u16;
        }
    }
}
