//! Per-variant pixel decoders.
//!
//! Each decoder receives the cursor positioned right after the header and
//! returns exactly `width * height` pixels in row-major order, or an error.
//! The partially filled buffer is dropped on error.

use core::num::NonZeroU32;

use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;
use rgb::RGB8;

use super::PnmHeader;
use super::token::next_text_value;
use crate::error::PnmError;
use crate::source::ByteSource;

pub(super) type PixelDecoder =
    fn(&mut dyn ByteSource, &PnmHeader, &dyn Stop) -> Result<Vec<RGB8>, PnmError>;

/// Upper bound on how many P6 pixels are read per bulk read.
const BINARY_CHUNK_PIXELS: usize = 4096;

/// Rescale `value` from `0..=max` to `0..=255`, truncating.
#[inline]
fn rescale(value: u64, max: NonZeroU32) -> Result<u8, PnmError> {
    let max64 = u64::from(max.get());
    if value > max64 {
        return Err(PnmError::SampleOutOfRange {
            value,
            max_value: max.get(),
        });
    }
    // value <= u32::MAX, so value * 255 cannot overflow.
    Ok((value * 255 / max64) as u8)
}

fn max_value(header: &PnmHeader) -> Result<NonZeroU32, PnmError> {
    header.max_value.ok_or(PnmError::DegenerateHeader)
}

/// Pixels reserved before any sample is read; the buffer grows as rows arrive.
const INITIAL_RESERVE_PIXELS: usize = 1 << 16;

fn allocate(header: &PnmHeader) -> Result<Vec<RGB8>, PnmError> {
    let count = (header.width as usize)
        .checked_mul(header.height as usize)
        .ok_or(PnmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    Ok(Vec::with_capacity(count.min(INITIAL_RESERVE_PIXELS)))
}

/// Shared row loop for the plain-text variants.
fn decode_text<F>(
    src: &mut dyn ByteSource,
    header: &PnmHeader,
    stop: &dyn Stop,
    mut read_pixel: F,
) -> Result<Vec<RGB8>, PnmError>
where
    F: FnMut(&mut dyn ByteSource) -> Result<RGB8, PnmError>,
{
    let mut pixels = allocate(header)?;
    for row in 0..header.height {
        if row % 16 == 0 {
            stop.check()?;
        }
        for _ in 0..header.width {
            pixels.push(read_pixel(src)?);
        }
    }
    Ok(pixels)
}

pub(super) fn decode_text_bitmap(
    src: &mut dyn ByteSource,
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Vec<RGB8>, PnmError> {
    decode_text(src, header, stop, |src| {
        let level = if next_text_value(src)? == 0 { 255 } else { 0 };
        Ok(RGB8::new(level, level, level))
    })
}

pub(super) fn decode_text_greyscale(
    src: &mut dyn ByteSource,
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Vec<RGB8>, PnmError> {
    let max = max_value(header)?;
    decode_text(src, header, stop, |src| {
        let grey = rescale(next_text_value(src)?, max)?;
        Ok(RGB8::new(grey, grey, grey))
    })
}

pub(super) fn decode_text_pixmap(
    src: &mut dyn ByteSource,
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Vec<RGB8>, PnmError> {
    let max = max_value(header)?;
    decode_text(src, header, stop, |src| {
        let r = rescale(next_text_value(src)?, max)?;
        let g = rescale(next_text_value(src)?, max)?;
        let b = rescale(next_text_value(src)?, max)?;
        Ok(RGB8::new(r, g, b))
    })
}

pub(super) fn decode_binary_pixmap(
    src: &mut dyn ByteSource,
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Vec<RGB8>, PnmError> {
    let max = max_value(header)?;
    let identity = max.get() == 255;
    let width = header.width as usize;
    let mut pixels = allocate(header)?;
    let mut chunk = vec![0u8; width.min(BINARY_CHUNK_PIXELS) * 3];

    for row in 0..header.height {
        if row % 16 == 0 {
            stop.check()?;
        }
        let mut left = width;
        while left > 0 {
            let n = left.min(BINARY_CHUNK_PIXELS);
            let bytes = &mut chunk[..n * 3];
            src.read_exact(bytes)?;
            if identity {
                pixels.extend(bytes.chunks_exact(3).map(|c| RGB8::new(c[0], c[1], c[2])));
            } else {
                for c in bytes.chunks_exact(3) {
                    pixels.push(RGB8::new(
                        rescale(c[0].into(), max)?,
                        rescale(c[1].into(), max)?,
                        rescale(c[2].into(), max)?,
                    ));
                }
            }
            left -= n;
        }
    }
    Ok(pixels)
}
