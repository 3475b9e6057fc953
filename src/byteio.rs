//! In-memory byte sink/source, analogous to a file-backed buffered
//! reader/writer pair but over `Vec<u8>`/`&[u8]`. Every compress/decompress
//! call in this crate works against one in-memory byte sequence end-to-end, so
//! there is no buffering strategy to speak of — just little-endian
//! primitive read/write with truncation reported as `CoreError::CorruptStream`
//! rather than silently returning zero bytes (that zero-fill behavior is
//! reserved for the entropy coders' own byte streams, per spec).

use crate::error::{CoreError, Result};

/// Appends bytes to an in-memory output buffer.
#[derive(Default)]
pub struct ByteSink {
    buf: Vec<u8>,
}
impl ByteSink {
    pub fn new() -> ByteSink {
        ByteSink { buf: Vec::new() }
    }
    pub fn with_capacity(cap: usize) -> ByteSink {
        ByteSink { buf: Vec::with_capacity(cap) }
    }
    pub fn write_u8(&mut self, b: u8) {
        self.buf.push(b);
    }
    pub fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }
    pub fn write_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
    pub fn len(&self) -> usize {
        self.buf.len()
    }
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Reads bytes from an in-memory input slice, tracking position.
pub struct ByteSource<'a> {
    buf: &'a [u8],
    pos: usize,
}
impl<'a> ByteSource<'a> {
    pub fn new(buf: &'a [u8]) -> ByteSource<'a> {
        ByteSource { buf, pos: 0 }
    }
    pub fn read_u8(&mut self) -> Result<u8> {
        let b = *self.buf.get(self.pos).ok_or_else(|| {
            CoreError::CorruptStream("unexpected end of stream reading a byte".into())
        })?;
        self.pos += 1;
        Ok(b)
    }
    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.read_n::<8>()?;
        Ok(u64::from_le_bytes(bytes))
    }
    pub fn read_i64(&mut self) -> Result<i64> {
        let bytes = self.read_n::<8>()?;
        Ok(i64::from_le_bytes(bytes))
    }
    fn read_n<const N: usize>(&mut self) -> Result<[u8; N]> {
        if self.pos + N > self.buf.len() {
            return Err(CoreError::CorruptStream(format!(
                "unexpected end of stream reading {} bytes", N
            )));
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
    /// Remaining unread bytes, handed to an entropy coder as its byte stream.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
    pub fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_header_fields() {
        let mut sink = ByteSink::new();
        sink.write_i64(123456789);
        sink.write_u8(7);
        sink.write_bytes(&[1, 2, 3]);
        let bytes = sink.into_inner();

        let mut src = ByteSource::new(&bytes);
        assert_eq!(src.read_i64().unwrap(), 123456789);
        assert_eq!(src.read_u8().unwrap(), 7);
        assert_eq!(src.rest(), &[1, 2, 3]);
    }

    #[test]
    fn truncated_read_reports_corrupt_stream() {
        let bytes = [0u8; 3];
        let mut src = ByteSource::new(&bytes);
        assert!(src.read_u64().is_err());
    }
}
