use thiserror::Error;

/// Errors raised by the compression core.
///
/// `InvalidParameter` is an encoder-side programmer error (bad arguments
/// into a coder). `CorruptStream` is a decoder-side data error: the input
/// could not be decoded against the model it claims to have been encoded
/// with. `VersionMismatch` and `BadMagic` exist for parity with container
/// formats that carry a header magic/version; none of the four formats in
/// this crate do, so callers will not see them from this crate's own
/// methods, but a wrapping preprocessor container can raise them using the
/// same type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    #[error("version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u8, found: u8 },

    #[error("bad magic number")]
    BadMagic,
}

pub type Result<T> = std::result::Result<T, CoreError>;
