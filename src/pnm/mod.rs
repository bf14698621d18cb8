//! PNM family: P1 (PBM text), P2 (PGM text), P3 (PPM text), P6 (PPM binary).
//!
//! Every variant decodes to an RGB8 [`Raster`]: bitmaps become black and
//! white, greyscale samples are replicated across the three channels, and
//! all samples are rescaled from the declared maximum value to `0..=255`
//! with integer division.

mod decode;
pub(crate) mod token;

pub use token::MAX_TOKEN_LEN;

use core::num::NonZeroU32;

use alloc::format;
use enough::Stop;

use crate::error::PnmError;
use crate::limits::Limits;
use crate::raster::Raster;
use crate::source::ByteSource;

/// Which PNM variant a stream holds, from its two-byte magic marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PnmVariant {
    /// `P1`: plain-text bitmap, `0` is white and anything else black.
    TextBitmap,
    /// `P2`: plain-text greyscale.
    TextGreyscale,
    /// `P3`: plain-text RGB.
    TextPixmap,
    /// `P6`: binary RGB, one byte per sample.
    BinaryPixmap,
}

impl PnmVariant {
    /// Identify the variant from the two magic bytes.
    pub fn from_magic(magic: [u8; 2]) -> Option<Self> {
        match magic {
            [b'P', b'1'] => Some(Self::TextBitmap),
            [b'P', b'2'] => Some(Self::TextGreyscale),
            [b'P', b'3'] => Some(Self::TextPixmap),
            [b'P', b'6'] => Some(Self::BinaryPixmap),
            _ => None,
        }
    }

    pub fn magic(self) -> [u8; 2] {
        match self {
            Self::TextBitmap => *b"P1",
            Self::TextGreyscale => *b"P2",
            Self::TextPixmap => *b"P3",
            Self::BinaryPixmap => *b"P6",
        }
    }

    /// Whether the header carries a maximum sample value after the size.
    pub fn has_max_value(self) -> bool {
        !matches!(self, Self::TextBitmap)
    }

    fn pixel_decoder(self) -> decode::PixelDecoder {
        match self {
            Self::TextBitmap => decode::decode_text_bitmap,
            Self::TextGreyscale => decode::decode_text_greyscale,
            Self::TextPixmap => decode::decode_text_pixmap,
            Self::BinaryPixmap => decode::decode_binary_pixmap,
        }
    }
}

/// Parsed and validated PNM header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PnmHeader {
    pub variant: PnmVariant,
    pub width: u32,
    pub height: u32,
    /// `None` for [`PnmVariant::TextBitmap`].
    pub max_value: Option<NonZeroU32>,
}

/// Read the two-byte magic marker. Consumes exactly two bytes.
pub(crate) fn read_magic(src: &mut dyn ByteSource) -> Result<PnmVariant, PnmError> {
    let mut magic = [0u8; 2];
    src.read_exact(&mut magic)?;
    PnmVariant::from_magic(magic).ok_or(PnmError::UnrecognizedFormat { magic })
}

/// Read the header fields that follow the magic marker.
pub(crate) fn read_header(
    src: &mut dyn ByteSource,
    variant: PnmVariant,
) -> Result<PnmHeader, PnmError> {
    let width = token::next_header_value(src)?;
    let height = token::next_header_value(src)?;
    let max_value = if variant.has_max_value() {
        Some(token::next_header_value(src)?)
    } else {
        None
    };

    if width == 0 || height == 0 {
        return Err(PnmError::InvalidHeader(format!(
            "zero dimension: {width}x{height}"
        )));
    }
    let max_value = match max_value {
        Some(max) => Some(NonZeroU32::new(max).ok_or(PnmError::DegenerateHeader)?),
        None => None,
    };

    let header = PnmHeader {
        variant,
        width,
        height,
        max_value,
    };
    log::trace!("parsed PNM header: {header:?}");
    Ok(header)
}

/// Read magic and header without touching pixel data.
pub(crate) fn probe(src: &mut dyn ByteSource) -> Result<PnmHeader, PnmError> {
    let variant = read_magic(src)?;
    read_header(src, variant)
}

/// Decode a full image from `src`.
pub(crate) fn decode(
    src: &mut dyn ByteSource,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster, PnmError> {
    let header = probe(src)?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }

    stop.check()?;

    log::debug!(
        "decoding {:?} {}x{}",
        header.variant,
        header.width,
        header.height
    );
    let pixels = (header.variant.pixel_decoder())(src, &header, stop)?;
    Ok(Raster::from_parts(header.width, header.height, pixels))
}
