//! Decoded raster buffers accepted by the analysis and enhancement pipeline.
//!
//! Codec handling lives outside this crate; callers hand in already-decoded
//! pixel data. [`PixelBuffer`] supports both `imgref` image types and raw
//! slices for flexibility.

use imgref::ImgVec;
use rgb::{RGB8, RGBA8};

use crate::error::{Error, Result};

/// Decoded raster data owned by a single analysis or enhancement call.
///
/// Immutable once captured: the pipeline never mutates a buffer in place,
/// enhancement produces a new one.
#[derive(Clone)]
pub enum PixelBuffer {
    /// RGB8 image using imgref.
    Rgb8(ImgVec<RGB8>),

    /// RGBA8 image using imgref.
    Rgba8(ImgVec<RGBA8>),

    /// RGB8 raw slice with dimensions.
    RgbSlice {
        /// Pixel data in row-major order.
        data: Vec<u8>,
        /// Image width.
        width: usize,
        /// Image height.
        height: usize,
    },

    /// RGBA8 raw slice with dimensions.
    RgbaSlice {
        /// Pixel data in row-major order.
        data: Vec<u8>,
        /// Image width.
        width: usize,
        /// Image height.
        height: usize,
    },

    /// 8-bit grayscale raw slice with dimensions.
    GraySlice {
        /// Pixel data in row-major order.
        data: Vec<u8>,
        /// Image width.
        width: usize,
        /// Image height.
        height: usize,
    },
}

impl PixelBuffer {
    /// Build a buffer from raw interleaved bytes and an explicit channel count.
    ///
    /// # Arguments
    ///
    /// * `data` - Pixel data in row-major order.
    /// * `width` - Image width in pixels.
    /// * `height` - Image height in pixels.
    /// * `channels` - Samples per pixel: 1 (gray), 3 (RGB), or 4 (RGBA).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidImage`] for unsupported channel counts or when
    /// `data.len() != width * height * channels`.
    pub fn from_raw(data: Vec<u8>, width: usize, height: usize, channels: usize) -> Result<Self> {
        let buffer = match channels {
            1 => Self::GraySlice {
                data,
                width,
                height,
            },
            3 => Self::RgbSlice {
                data,
                width,
                height,
            },
            4 => Self::RgbaSlice {
                data,
                width,
                height,
            },
            other => {
                return Err(Error::invalid_image(format!(
                    "unsupported channel count: {other}"
                )));
            }
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Get image width.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Rgb8(img) => img.width(),
            Self::Rgba8(img) => img.width(),
            Self::RgbSlice { width, .. }
            | Self::RgbaSlice { width, .. }
            | Self::GraySlice { width, .. } => *width,
        }
    }

    /// Get image height.
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Rgb8(img) => img.height(),
            Self::Rgba8(img) => img.height(),
            Self::RgbSlice { height, .. }
            | Self::RgbaSlice { height, .. }
            | Self::GraySlice { height, .. } => *height,
        }
    }

    /// Samples per pixel for this buffer's layout.
    #[must_use]
    pub fn channels(&self) -> usize {
        match self {
            Self::GraySlice { .. } => 1,
            Self::Rgb8(_) | Self::RgbSlice { .. } => 3,
            Self::Rgba8(_) | Self::RgbaSlice { .. } => 4,
        }
    }

    /// Check that the buffer is analyzable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidImage`] for empty data, zero dimensions, or a
    /// data length that does not match the declared dimensions.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if width == 0 || height == 0 {
            return Err(Error::invalid_image(format!(
                "zero dimension: {width}x{height}"
            )));
        }

        let expected = width * height * self.channels();
        let actual = match self {
            // imgref enforces its own length invariant at construction
            Self::Rgb8(_) | Self::Rgba8(_) => expected,
            Self::RgbSlice { data, .. }
            | Self::RgbaSlice { data, .. }
            | Self::GraySlice { data, .. } => data.len(),
        };

        if actual == 0 {
            return Err(Error::invalid_image("empty pixel data"));
        }
        if actual != expected {
            return Err(Error::invalid_image(format!(
                "pixel data length {actual} does not match {width}x{height}x{} = {expected}",
                self.channels()
            )));
        }
        Ok(())
    }

    /// Convert to an interleaved RGB8 vector.
    ///
    /// Alpha is dropped; grayscale is replicated across channels. Both the
    /// analyzer and the engine go through this conversion, so a buffer and
    /// its identity-enhanced copy always measure bit-identically.
    #[must_use]
    pub fn to_rgb8_vec(&self) -> Vec<u8> {
        match self {
            Self::Rgb8(img) => img.pixels().flat_map(|p| [p.r, p.g, p.b]).collect(),
            Self::Rgba8(img) => img.pixels().flat_map(|p| [p.r, p.g, p.b]).collect(),
            Self::RgbSlice { data, .. } => data.clone(),
            Self::RgbaSlice {
                data,
                width,
                height,
            } => {
                let mut rgb = Vec::with_capacity(width * height * 3);
                for chunk in data.chunks_exact(4) {
                    rgb.extend_from_slice(&chunk[..3]);
                }
                rgb
            }
            Self::GraySlice { data, .. } => data.iter().flat_map(|&v| [v, v, v]).collect(),
        }
    }
}
