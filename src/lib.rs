//! # zenpnm
//!
//! Decoder for the Portable Any-Map family: `P1` (PBM text), `P2` (PGM
//! text), `P3` (PPM text) and `P6` (PPM binary). Every variant decodes to a
//! fully populated RGB8 [`Raster`].
//!
//! ## Decoding rules
//!
//! - Header integers (width, height, maximum value) are whitespace
//!   delimited and may be preceded by `#` comments running to end of line.
//! - `P1`: sample `0` is white, anything else black.
//! - `P2`/`P3`/`P6`: each sample is rescaled to `sample * 255 / max` with
//!   integer division. A sample above the declared maximum is an error.
//! - Plain-text samples must be pure decimal tokens; comments are not
//!   allowed between samples.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - `P4`/`P5` (binary bitmap and greyscale), `P7` (PAM), PFM
//! - Color management
//! - Partial or progressive decode: a raster is returned complete or not at all
//!
//! ## Usage
//!
//! ```
//! use zenpnm::{ImageInfo, PnmVariant, Unstoppable};
//!
//! let data = b"P1\n2 2\n0 1\n1 0\n";
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! assert_eq!(info.variant, PnmVariant::TextBitmap);
//!
//! let raster = zenpnm::decode(data, Unstoppable)?;
//! assert_eq!((raster.width(), raster.height()), (2, 2));
//! assert_eq!(raster.as_bytes()[..6], [255, 255, 255, 0, 0, 0]);
//! # Ok::<(), zenpnm::PnmError>(())
//! ```
//!
//! Streams are read through [`ByteSource`]; with the `std` feature any
//! [`std::io::Read`] works via [`ReadSource`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;
mod raster;
mod source;

pub mod pnm;

// Re-exports
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::PnmError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pnm::{PnmHeader, PnmVariant};
pub use raster::Raster;
pub use rgb::RGB8;
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::{ByteSource, SliceSource};

/// Decode an in-memory PNM image.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Raster, PnmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode an in-memory PNM image, rejecting it if it exceeds `limits`.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Raster, PnmError> {
    DecodeRequest::new(data).with_limits(limits).decode(stop)
}

/// Decode from any forward-only byte source.
///
/// Consumes exactly the bytes of the image: the magic marker, the header,
/// and the pixel data. Anything after the last pixel is left unread.
pub fn decode_from<S: ByteSource>(source: &mut S, stop: impl Stop) -> Result<Raster, PnmError> {
    DecodeRequest::from_source(source).decode(stop)
}

/// Decode from a [`std::io::Read`].
///
/// Text variants are read byte by byte; pass a buffered reader.
#[cfg(feature = "std")]
pub fn decode_reader<R: std::io::Read>(reader: R, stop: impl Stop) -> Result<Raster, PnmError> {
    decode_from(&mut ReadSource::new(reader), stop)
}
