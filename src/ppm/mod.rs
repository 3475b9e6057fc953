//! Order-N PPM with PPMD-style escape estimation and full exclusion.
//!
//! Each byte is coded through a cascade of context orders, from
//! `max_order` down to 0 and finally to a uniform order `-1` fallback.
//! At each order the model either codes the symbol directly, or codes an
//! "escape" event and excludes every symbol already seen at this order
//! before falling through to the next lower one. Exclusion guarantees the
//! escape chain always terminates: order `-1` codes uniformly over
//! whatever symbols remain.

pub mod table;

use crate::error::Result;
use crate::rangecoder::{Decoder, Encoder};
use table::ContextTable;

pub struct PpmModel {
    max_order: usize,
    history: Vec<u8>,
    tables: Vec<ContextTable>,
}
impl PpmModel {
    pub fn new(max_order: u8) -> PpmModel {
        let max_order = max_order as usize;
        let tables = (0..=max_order).map(ContextTable::new).collect();
        PpmModel { max_order, history: Vec::new(), tables }
    }

    pub fn encode_symbol(&mut self, enc: &mut Encoder, symbol: u8) -> Result<()> {
        let mut excluded = [false; 256];

        for order in (0..=self.max_order).rev() {
            let stats = match self.tables[order].get(&self.history) {
                Some(s) => s.clone(),
                None => continue,
            };

            let mut filtered: Vec<(u8, u32)> =
                stats.iter().filter(|&(s, _)| !excluded[s as usize]).collect();
            filtered.sort_by_key(|&(s, _)| s);

            let distinct = filtered.len() as u32;
            let esc = distinct.checked_shr(1).unwrap_or(0).max(1);
            let counts_total: u32 = filtered.iter().map(|&(_, c)| c).sum();
            let total = counts_total + esc;

            let mut cum = 0u32;
            let mut found = None;
            for &(s, c) in &filtered {
                if s == symbol {
                    found = Some((cum, c));
                    break;
                }
                cum += c;
            }

            match found {
                Some((cum, freq)) => {
                    enc.encode(cum, freq, total)?;
                    self.update_model(symbol);
                    return Ok(());
                }
                None => {
                    enc.encode(counts_total, esc, total)?;
                    for &(s, _) in &filtered {
                        excluded[s as usize] = true;
                    }
                }
            }
        }

        let symbols: Vec<u8> = (0u32..256).map(|v| v as u8).filter(|&s| !excluded[s as usize]).collect();
        let total = symbols.len() as u32;
        let idx = symbols
            .iter()
            .position(|&s| s == symbol)
            .expect("symbol must survive full exclusion at order -1") as u32;
        enc.encode(idx, 1, total)?;
        self.update_model(symbol);
        Ok(())
    }

    pub fn decode_symbol(&mut self, dec: &mut Decoder) -> u8 {
        let mut excluded = [false; 256];

        for order in (0..=self.max_order).rev() {
            let stats = match self.tables[order].get(&self.history) {
                Some(s) => s.clone(),
                None => continue,
            };

            let mut filtered: Vec<(u8, u32)> =
                stats.iter().filter(|&(s, _)| !excluded[s as usize]).collect();
            filtered.sort_by_key(|&(s, _)| s);

            let distinct = filtered.len() as u32;
            let esc = distinct.checked_shr(1).unwrap_or(0).max(1);
            let counts_total: u32 = filtered.iter().map(|&(_, c)| c).sum();
            let total = counts_total + esc;

            let freq_val = dec.get_freq(total);
            if freq_val < counts_total {
                let mut cum = 0u32;
                for &(s, c) in &filtered {
                    if freq_val < cum + c {
                        dec.update(cum, c);
                        self.update_model(s);
                        return s;
                    }
                    cum += c;
                }
                unreachable!("freq_val < counts_total but no symbol slot matched");
            } else {
                dec.update(counts_total, esc);
                for &(s, _) in &filtered {
                    excluded[s as usize] = true;
                }
            }
        }

        let symbols: Vec<u8> = (0u32..256).map(|v| v as u8).filter(|&s| !excluded[s as usize]).collect();
        let total = symbols.len() as u32;
        let freq_val = dec.get_freq(total).min(total - 1);
        dec.update(freq_val, 1);
        let symbol = symbols[freq_val as usize];
        self.update_model(symbol);
        symbol
    }

    fn update_model(&mut self, symbol: u8) {
        for table in self.tables.iter_mut() {
            table.update(&self.history, symbol);
        }
        self.history.push(symbol);
        if self.history.len() > self.max_order {
            let excess = self.history.len() - self.max_order;
            self.history.drain(0..excess);
        }
    }
}
