//! Adaptive enhancement engine.
//!
//! [`enhance`] applies four independently-scaled transforms in a fixed
//! order: **sharpen → contrast-stretch → denoise → color-correct**.
//! Denoising runs after sharpening so it cleans sharpening artifacts before
//! color correction, and the contrast stretch acts on the sharpened but not
//! yet denoised signal. Each transform is a pure function of the buffer and
//! its strength, deterministic and stateless, and an exact identity at
//! strength 0.

pub mod color;
pub mod contrast;
pub mod denoise;
pub mod sharpen;

use crate::buffer::PixelBuffer;
use crate::calibration::Calibration;
use crate::error::Result;
use crate::params::EnhancementParams;

/// Apply the derived enhancement strengths to a buffer.
///
/// # Arguments
///
/// * `buffer` - Decoded raster to enhance; left untouched.
/// * `params` - Per-aspect strengths in [0,1].
/// * `calibration` - Engine gains; see [`Calibration`].
///
/// # Returns
///
/// A new RGB buffer with the same dimensions. When all strengths are 0 the
/// output pixel bytes equal the input's RGB8 conversion exactly, so
/// re-analysis reproduces the original metrics bit for bit.
///
/// # Errors
///
/// Returns [`Error::InvalidImage`](crate::Error::InvalidImage) for
/// malformed buffers.
pub fn enhance(
    buffer: &PixelBuffer,
    params: &EnhancementParams,
    calibration: &Calibration,
) -> Result<PixelBuffer> {
    buffer.validate()?;

    let width = buffer.width();
    let height = buffer.height();

    let mut rgb = buffer.to_rgb8_vec();
    rgb = sharpen::apply(rgb, width, height, params.sharpness, calibration);
    rgb = contrast::apply(rgb, width, height, params.contrast, calibration);
    rgb = denoise::apply(rgb, width, height, params.denoise, calibration);
    rgb = color::apply(rgb, width, height, params.color, calibration);

    Ok(PixelBuffer::RgbSlice {
        data: rgb,
        width,
        height,
    })
}

/// 3x3 box blur of interleaved RGB8 data with replicated borders.
pub(crate) fn blur3_rgb(rgb: &[u8], width: usize, height: usize) -> Vec<f64> {
    let mut out = vec![0.0; rgb.len()];
    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let mut sum = 0.0;
                for dy in -1i64..=1 {
                    for dx in -1i64..=1 {
                        let sy = (y as i64 + dy).clamp(0, height as i64 - 1) as usize;
                        let sx = (x as i64 + dx).clamp(0, width as i64 - 1) as usize;
                        sum += f64::from(rgb[(sy * width + sx) * 3 + c]);
                    }
                }
                out[(y * width + x) * 3 + c] = sum / 9.0;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::analyze;

    fn soft_gradient(width: usize, height: usize) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                let v = ((x + y) * 255 / (width + height - 2).max(1)) as u8;
                data.extend_from_slice(&[v, v, v]);
            }
        }
        PixelBuffer::RgbSlice {
            data,
            width,
            height,
        }
    }

    #[test]
    fn test_zero_params_is_bit_identity() {
        let cal = Calibration::default();
        let img = soft_gradient(24, 24);
        let out = enhance(&img, &EnhancementParams::default(), &cal).unwrap();
        assert_eq!(out.to_rgb8_vec(), img.to_rgb8_vec());
    }

    #[test]
    fn test_zero_params_reproduce_metrics_exactly() {
        let cal = Calibration::default();
        let img = soft_gradient(24, 24);
        let before = analyze(&img, &cal).unwrap();
        let out = enhance(&img, &EnhancementParams::default(), &cal).unwrap();
        let after = analyze(&out, &cal).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_dimensions_preserved() {
        let cal = Calibration::default();
        let img = soft_gradient(33, 17);
        let params = EnhancementParams {
            sharpness: 0.5,
            contrast: 0.5,
            denoise: 0.5,
            color: 0.5,
        };
        let out = enhance(&img, &params, &cal).unwrap();
        assert_eq!(out.width(), 33);
        assert_eq!(out.height(), 17);
    }

    #[test]
    fn test_full_pipeline_changes_a_soft_image() {
        let cal = Calibration::default();
        let img = soft_gradient(32, 32);
        let params = EnhancementParams {
            sharpness: 0.8,
            contrast: 0.8,
            denoise: 0.2,
            color: 0.5,
        };
        let out = enhance(&img, &params, &cal).unwrap();
        assert_ne!(out.to_rgb8_vec(), img.to_rgb8_vec());
    }

    #[test]
    fn test_enhance_is_deterministic() {
        let cal = Calibration::default();
        let img = soft_gradient(20, 20);
        let params = EnhancementParams {
            sharpness: 0.3,
            contrast: 0.6,
            denoise: 0.4,
            color: 0.7,
        };
        let a = enhance(&img, &params, &cal).unwrap();
        let b = enhance(&img, &params, &cal).unwrap();
        assert_eq!(a.to_rgb8_vec(), b.to_rgb8_vec());
    }

    #[test]
    fn test_invalid_buffer_is_rejected() {
        let cal = Calibration::default();
        let bad = PixelBuffer::RgbSlice {
            data: vec![1, 2, 3],
            width: 7,
            height: 7,
        };
        assert!(enhance(&bad, &EnhancementParams::default(), &cal).is_err());
    }

    #[test]
    fn test_blur3_flat_is_stable() {
        let rgb = vec![50u8; 4 * 4 * 3];
        let blurred = blur3_rgb(&rgb, 4, 4);
        assert!(blurred.iter().all(|&v| (v - 50.0).abs() < 1e-9));
    }
}
