use core::num::NonZeroU32;

use crate::error::PnmError;
use crate::pnm::{self, PnmHeader, PnmVariant};
use crate::source::{ByteSource, SliceSource};

/// Image metadata read from the header alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub variant: PnmVariant,
    /// Declared maximum sample value; `None` for `P1` bitmaps.
    pub max_value: Option<NonZeroU32>,
}

impl ImageInfo {
    /// Probe an in-memory image without decoding pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        Self::from_source(&mut SliceSource::new(data))
    }

    /// Probe a byte source. The source is left positioned at the first pixel
    /// byte.
    pub fn from_source<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self, PnmError> {
        let mut source = source;
        pnm::probe(&mut source).map(Self::from)
    }

    /// Bytes needed for the decoded RGB8 raster.
    pub fn raster_bytes(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(3)
    }
}

impl From<PnmHeader> for ImageInfo {
    fn from(header: PnmHeader) -> Self {
        Self {
            width: header.width,
            height: header.height,
            variant: header.variant,
            max_value: header.max_value,
        }
    }
}
