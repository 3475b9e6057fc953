//! Context-indexed bit predictor: a direct-mapped table of
//! `(pred16, count8)` pairs, one per context, with a count-gated learning
//! rate so fresh contexts adapt fast and well-worn ones settle down.

pub struct BitPredictor {
    table: Vec<(u16, u8)>,
    mask: u32,
}
impl BitPredictor {
    pub fn new(table_bits: u32) -> BitPredictor {
        let size = 1usize << table_bits;
        BitPredictor { table: vec![(32768u16, 0u8); size], mask: size as u32 - 1 }
    }

    pub fn predict(&self, ctx: u32) -> u16 {
        self.table[(ctx & self.mask) as usize].0
    }

    pub fn update(&mut self, ctx: u32, bit: i32) {
        let idx = (ctx & self.mask) as usize;
        let (pred, count) = self.table[idx];
        let count = count.saturating_add(1);
        let rate = match count {
            0..=1 => 128,
            2..=7 => 64,
            8..=31 => 32,
            32..=127 => 16,
            _ => 8,
        };
        let target = if bit == 1 { 65534i32 } else { 1i32 };
        let delta = ((target - pred as i32) * rate) >> 8;
        let new_pred = (pred as i32 + delta).clamp(1, 65534) as u16;
        self.table[idx] = (new_pred, count);
    }
}
