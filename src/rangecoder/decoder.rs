use super::TOP;

/// Range coder decoder, mirroring `Encoder` bit for bit.
pub struct Decoder<'a> {
    _low:  u32, // unused beyond symmetry with the encoder's `low`
    code:  u32,
    range: u32,
    input: &'a [u8],
    pos:   usize,
}
impl<'a> Decoder<'a> {
    /// Construct a decoder over `input`, priming `code` with the first 5
    /// bytes (the encoder always emits a leading dummy byte, discarded here
    /// along with the 4 real bytes it precedes).
    pub fn new(input: &'a [u8]) -> Decoder<'a> {
        let mut dec = Decoder {
            _low: 0,
            code: 0,
            range: 0xFFFF_FFFF,
            input,
            pos: 0,
        };
        for _ in 0..5 {
            dec.code = (dec.code << 8) | dec.next_byte() as u32;
        }
        dec
    }

    fn next_byte(&mut self) -> u8 {
        let b = self.input.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        b
    }

    /// Compute the cumulative-frequency value identifying the next symbol.
    /// Must be followed by exactly one call to `update` with the same
    /// `total` before any other decoder call.
    pub fn get_freq(&mut self, total: u32) -> u32 {
        self.range /= total;
        let v = self.code / self.range;
        if v >= total {
            total - 1
        } else {
            v
        }
    }

    /// Narrow the interval to the symbol's slot and renormalise.
    pub fn update(&mut self, cum_freq: u32, freq: u32) {
        self.code -= cum_freq * self.range;
        self.range *= freq;
        while self.range < TOP {
            self.code = (self.code << 8) | self.next_byte() as u32;
            self.range <<= 8;
        }
    }
}
