//! Container-level coders. Each wraps a model (or stack of models) plus
//! the matching bitstream coder into a `compress`/`decompress` pair over
//! whole in-memory buffers. Every format starts with an `i64` original
//! size so decompression can preallocate and knows when to stop; `Ppm`
//! additionally stores its configured order as a leading `u8` so a
//! decoder doesn't need to be told out of band.

use crate::binarycoder;
use crate::bitcm::BitModel;
use crate::byteio::{ByteSink, ByteSource};
use crate::bytemixer::ByteMixer;
use crate::error::Result;
use crate::matchmodel::MatchModel;
use crate::order0::Order0Model;
use crate::ppm::PpmModel;
use crate::rangecoder;
use crate::sparsemodel::SparseModel;
use crate::wordmodel::WordModel;

/// Order-0 adaptive range coding.
pub struct Order0Coder;
impl Order0Coder {
    pub fn new() -> Order0Coder {
        Order0Coder
    }

    pub fn compress(&self, data: &[u8]) -> Vec<u8> {
        let mut sink = ByteSink::with_capacity(data.len() / 2 + 16);
        sink.write_i64(data.len() as i64);

        let mut model = Order0Model::new();
        let mut enc = rangecoder::Encoder::new();
        for &byte in data {
            let (cum, freq, total) = model.encode_info(byte);
            enc.encode(cum, freq, total).expect("order0 encode_info is always in-range");
            model.update(byte);
        }
        sink.write_bytes(&enc.flush());
        sink.into_inner()
    }

    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut src = ByteSource::new(data);
        let original_size = src.read_i64()? as usize;

        let mut model = Order0Model::new();
        let mut dec = rangecoder::Decoder::new(src.rest());
        let mut out = Vec::with_capacity(original_size);
        for _ in 0..original_size {
            let cum_value = dec.get_freq(model.total());
            let symbol = model.symbol_from_cum(cum_value);
            let (cum, freq, _) = model.encode_info(symbol);
            dec.update(cum, freq);
            model.update(symbol);
            out.push(symbol);
        }
        Ok(out)
    }
}
impl Default for Order0Coder {
    fn default() -> Self {
        Order0Coder::new()
    }
}

/// Order-N PPM with PPMD escape estimation and full exclusion.
pub struct PpmCoder {
    order: u8,
}
impl PpmCoder {
    pub fn new(order: u8) -> PpmCoder {
        PpmCoder { order }
    }

    pub fn compress(&self, data: &[u8]) -> Vec<u8> {
        let mut sink = ByteSink::with_capacity(data.len() / 2 + 16);
        sink.write_i64(data.len() as i64);
        sink.write_u8(self.order);

        let mut model = PpmModel::new(self.order);
        let mut enc = rangecoder::Encoder::new();
        for &byte in data {
            model.encode_symbol(&mut enc, byte).expect("ppm encode_symbol is always in-range");
        }
        sink.write_bytes(&enc.flush());
        sink.into_inner()
    }

    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut src = ByteSource::new(data);
        let original_size = src.read_i64()? as usize;
        let order = src.read_u8()?;

        let mut model = PpmModel::new(order);
        let mut dec = rangecoder::Decoder::new(src.rest());
        let mut out = Vec::with_capacity(original_size);
        for _ in 0..original_size {
            out.push(model.decode_symbol(&mut dec));
        }
        Ok(out)
    }
}

fn new_byte_mixer() -> ByteMixer {
    ByteMixer::new(vec![
        Box::new(PpmSoftPredictor::new(1)),
        Box::new(PpmSoftPredictor::new(2)),
        Box::new(PpmSoftPredictor::new(4)),
        Box::new(PpmSoftPredictor::new(6)),
        Box::new(MatchModel::new()),
        Box::new(WordModel::new()),
        Box::new(SparseModel::new()),
    ])
}

/// Fixed-order PPM context table used purely as a soft predictor inside
/// `ByteMixer`: it never escapes to another order itself, since combining
/// orders is the mixer's job here, not the model's.
struct PpmSoftPredictor {
    table: crate::ppm::table::ContextTable,
    history: Vec<u8>,
}
impl PpmSoftPredictor {
    fn new(order: usize) -> PpmSoftPredictor {
        PpmSoftPredictor { table: crate::ppm::table::ContextTable::new(order), history: Vec::new() }
    }
}
impl crate::bytemixer::IBytePredictor for PpmSoftPredictor {
    fn predict(&self) -> [u32; 256] {
        self.table.predict_distribution(&self.history)
    }

    fn update(&mut self, symbol: u8) {
        self.table.update(&self.history, symbol);
        self.history.push(symbol);
    }
}

/// Range coding over a geometric mix of PPM orders 1/2/4/6, a match
/// model, a word model, and a sparse model.
pub struct ByteMixCoder;
impl ByteMixCoder {
    pub fn new() -> ByteMixCoder {
        ByteMixCoder
    }

    pub fn compress(&self, data: &[u8]) -> Vec<u8> {
        let mut sink = ByteSink::with_capacity(data.len() / 2 + 16);
        sink.write_i64(data.len() as i64);

        let mut mixer = new_byte_mixer();
        let mut enc = rangecoder::Encoder::new();
        for &byte in data {
            let freqs = mixer.predict();
            let (cum, freq, total) = encode_info_from_freqs(&freqs, byte);
            enc.encode(cum, freq, total).expect("mixer frequencies are always in-range");
            mixer.update(byte);
        }
        sink.write_bytes(&enc.flush());
        sink.into_inner()
    }

    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut src = ByteSource::new(data);
        let original_size = src.read_i64()? as usize;

        let mut mixer = new_byte_mixer();
        let mut dec = rangecoder::Decoder::new(src.rest());
        let mut out = Vec::with_capacity(original_size);
        for _ in 0..original_size {
            let freqs = mixer.predict();
            let total: u32 = freqs.iter().sum();
            let cum_value = dec.get_freq(total);
            let symbol = symbol_from_freqs(&freqs, cum_value);
            let (cum, freq, _) = encode_info_from_freqs(&freqs, symbol);
            dec.update(cum, freq);
            mixer.update(symbol);
            out.push(symbol);
        }
        Ok(out)
    }
}
impl Default for ByteMixCoder {
    fn default() -> Self {
        ByteMixCoder::new()
    }
}

fn encode_info_from_freqs(freqs: &[u32; 256], symbol: u8) -> (u32, u32, u32) {
    let cum: u32 = freqs[..symbol as usize].iter().sum();
    (cum, freqs[symbol as usize], freqs.iter().sum())
}

fn symbol_from_freqs(freqs: &[u32; 256], cum_value: u32) -> u8 {
    let mut cum = 0u32;
    for s in 0..256u32 {
        let f = freqs[s as usize];
        if cum_value < cum + f {
            return s as u8;
        }
        cum += f;
    }
    255
}

/// Binary arithmetic coding over the bit-level context-mixing stack.
pub struct BitMixCoder;
impl BitMixCoder {
    pub fn new() -> BitMixCoder {
        BitMixCoder
    }

    pub fn compress(&self, data: &[u8]) -> Vec<u8> {
        let mut sink = ByteSink::with_capacity(data.len() / 2 + 16);
        sink.write_i64(data.len() as i64);

        let mut model = BitModel::new();
        let mut enc = binarycoder::Encoder::new();
        for &byte in data {
            for i in (0..8).rev() {
                let bit = ((byte >> i) & 1) as i32;
                let prob = model.predict();
                enc.encode(bit, prob).expect("bit-model probabilities are always in [1, 65534]");
                model.record_bit(bit);
            }
        }
        sink.write_bytes(&enc.flush());
        sink.into_inner()
    }

    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut src = ByteSource::new(data);
        let original_size = src.read_i64()? as usize;

        let mut model = BitModel::new();
        let mut dec = binarycoder::Decoder::new(src.rest());
        let mut out = Vec::with_capacity(original_size);
        for _ in 0..original_size {
            let mut byte = 0u8;
            for _ in 0..8 {
                let prob = model.predict();
                let bit = dec.decode(prob);
                model.record_bit(bit);
                byte = (byte << 1) | bit as u8;
            }
            out.push(byte);
        }
        Ok(out)
    }
}
impl Default for BitMixCoder {
    fn default() -> Self {
        BitMixCoder::new()
    }
}
