use alloc::format;

use crate::error::PnmError;

/// Resource limits applied after the header is parsed and before the raster
/// is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the output raster (3 bytes per pixel).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits that only bound the raster allocation.
    pub fn with_max_memory(bytes: u64) -> Self {
        Self {
            max_memory_bytes: Some(bytes),
            ..Self::default()
        }
    }

    /// Check header dimensions and the resulting raster size.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PnmError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(reject(format!("width {width} exceeds limit {max_w}")));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(reject(format!("height {height} exceeds limit {max_h}")));
            }
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max_px) = self.max_pixels {
            if pixels > max_px {
                return Err(reject(format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        if let Some(max_mem) = self.max_memory_bytes {
            let bytes = pixels.saturating_mul(3);
            if bytes > max_mem {
                return Err(reject(format!(
                    "raster of {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}

fn reject(message: alloc::string::String) -> PnmError {
    log::debug!("limits rejected image: {message}");
    PnmError::LimitExceeded(message)
}
