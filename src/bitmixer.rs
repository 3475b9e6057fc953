//! Logistic (PAQ-style) mixer: combines several bit predictions in logit
//! space by weighted sum, then squashes back to a probability. Weights
//! train by gradient descent against the realized bit; no renormalization,
//! so a consistently wrong input just drives its weight toward (and past)
//! zero rather than being clipped back to a simplex.

use crate::logistic::Logistic;

const LEARNING_RATE: f64 = 0.003;

pub struct Mixer {
    logistic: Logistic,
    weights: Vec<f64>,
    inputs: Vec<i32>,
    last_pred: u16,
}
impl Mixer {
    pub fn new(n: usize) -> Mixer {
        Mixer {
            logistic: Logistic::new(),
            weights: vec![1.0 / n as f64; n],
            inputs: vec![0; n],
            last_pred: 32768,
        }
    }

    /// Mix `probs.len()` (must equal the mixer's input count) probabilities
    /// into one. Must be followed by exactly one `update` call.
    pub fn mix(&mut self, probs: &[u16]) -> u16 {
        debug_assert_eq!(probs.len(), self.weights.len());
        for (slot, &p) in self.inputs.iter_mut().zip(probs) {
            *slot = self.logistic.stretch(p);
        }
        let dot: f64 = self.inputs.iter().zip(&self.weights).map(|(&x, &w)| x as f64 * w).sum();
        let clamped = dot.round().clamp(-2048.0, 2048.0) as i32;
        self.last_pred = self.logistic.squash(clamped);
        self.last_pred
    }

    pub fn update(&mut self, bit: i32) {
        let target = if bit == 1 { 1.0 } else { 0.0 };
        let error = target - (self.last_pred as f64 / 65535.0);
        for (w, &x) in self.weights.iter_mut().zip(&self.inputs) {
            *w += LEARNING_RATE * error * x as f64;
        }
    }
}
