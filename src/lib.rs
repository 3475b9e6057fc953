//! A small statistical compression core: a carry-propagating range coder
//! and a bit-level binary arithmetic coder, an order-0 model, an order-N
//! PPM model with full exclusion, and two context-mixing stacks (one
//! geometric over bytes, one logistic over bits) built from them.
//!
//! Everything operates on in-memory buffers — `methods` is the intended
//! entry point for most callers, exposing each combination as a plain
//! `compress`/`decompress` pair.

pub mod apm;
pub mod binarycoder;
pub mod bitcm;
pub mod bitmixer;
pub mod bitpredictor;
pub mod byteio;
pub mod bytemixer;
pub mod error;
pub mod logistic;
pub mod matchmodel;
pub mod methods;
pub mod order0;
pub mod ppm;
pub mod rangecoder;
pub mod sparsemodel;
pub mod wordmodel;

pub use error::{CoreError, Result};
pub use methods::{BitMixCoder, ByteMixCoder, Order0Coder, PpmCoder};
