use enough::Stop;

use crate::error::PnmError;
use crate::limits::Limits;
use crate::pnm;
use crate::raster::Raster;
use crate::source::{ByteSource, SliceSource};

enum Input<'a> {
    Bytes(&'a [u8]),
    Source(&'a mut dyn ByteSource),
}

/// Decode builder: an input plus optional [`Limits`].
///
/// ```
/// use zenpnm::{DecodeRequest, Limits, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let raster = DecodeRequest::new(b"P2\n1 1\n100\n50\n")
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(raster.pixels()[0].r, 127);
/// # Ok::<(), zenpnm::PnmError>(())
/// ```
pub struct DecodeRequest<'a> {
    input: Input<'a>,
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    /// Decode from an in-memory buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            input: Input::Bytes(data),
            limits: None,
        }
    }

    /// Decode from any byte source. The source is borrowed for the duration
    /// of the decode and left positioned after the last pixel consumed.
    pub fn from_source(source: &'a mut dyn ByteSource) -> Self {
        Self {
            input: Input::Source(source),
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the decode. `stop` is polled before pixel decoding and every 16
    /// rows; pass [`enough::Unstoppable`] to run to completion.
    pub fn decode(self, stop: impl Stop) -> Result<Raster, PnmError> {
        match self.input {
            Input::Bytes(data) => pnm::decode(&mut SliceSource::new(data), self.limits, &stop),
            Input::Source(source) => pnm::decode(source, self.limits, &stop),
        }
    }
}
