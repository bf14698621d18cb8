use alloc::string::String;
use enough::StopReason;

/// Errors from PNM decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    /// The stream does not start with `P1`, `P2`, `P3` or `P6`.
    #[error("unrecognized format magic bytes {magic:?}")]
    UnrecognizedFormat { magic: [u8; 2] },

    /// Width or height is zero, or a header integer does not fit in a `u32`.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The declared maximum sample value is zero.
    #[error("degenerate header: maximum sample value is zero")]
    DegenerateHeader,

    /// A byte that is not a decimal digit appeared inside a text sample.
    #[error("malformed token: unexpected byte 0x{0:02x}")]
    MalformedToken(u8),

    #[error("token longer than {limit} bytes")]
    TokenTooLong { limit: usize },

    /// A sample exceeds the maximum value declared in the header.
    #[error("sample {value} exceeds maximum value {max_value}")]
    SampleOutOfRange { value: u64, max_value: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(std::io::Error),
}

impl From<StopReason> for PnmError {
    fn from(r: StopReason) -> Self {
        PnmError::Cancelled(r)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for PnmError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            PnmError::UnexpectedEof
        } else {
            PnmError::Io(e)
        }
    }
}
