use alloc::vec::Vec;

use rgb::{ComponentBytes as _, RGB8};

/// A fully decoded image: `width * height` RGB8 pixels, row-major, top row
/// first.
///
/// Only constructed once every pixel has been decoded, so a `Raster` is
/// never partially filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<RGB8>,
}

impl Raster {
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<RGB8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, indexed by `y * width + x`.
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<RGB8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[RGB8]> + '_ {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Pixel data as packed `R, G, B` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    pub fn into_pixels(self) -> Vec<RGB8> {
        self.pixels
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGB8> {
        imgref::ImgRef::new(&self.pixels[..], self.width as usize, self.height as usize)
    }

    /// Convert into an [`imgref::ImgVec`] without copying.
    #[cfg(feature = "imgref")]
    pub fn into_imgvec(self) -> imgref::ImgVec<RGB8> {
        imgref::ImgVec::new(self.pixels, self.width as usize, self.height as usize)
    }
}
