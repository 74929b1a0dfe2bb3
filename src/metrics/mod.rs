//! No-reference quality metrics for a single decoded image.
//!
//! [`analyze`] measures four normalized sub-metrics plus an aggregate score:
//!
//! - **Sharpness**: Laplacian edge energy (higher = more detail)
//! - **Contrast**: luminance spread (higher = wider histogram)
//! - **Noise**: inverse high-frequency residual outside edges (higher = cleaner)
//! - **Naturalness**: closeness of channel statistics to a reference
//!   distribution (higher = more natural)
//!
//! Every score is a deterministic function of the pixel bytes and the
//! supplied [`Calibration`]: identical input bytes produce bit-identical
//! metrics across repeated calls.

pub mod contrast;
pub mod natural;
pub mod noise;
pub mod sharpness;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::calibration::Calibration;
use crate::error::Result;

/// Normalized quality metrics for one analyzed buffer.
///
/// All fields are clamped to [0,100]. `overall_score` is a fixed-weight
/// linear combination of the four sub-metrics, so it is monotone
/// non-decreasing in each of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Edge-energy measure of detail and focus.
    pub sharpness: f64,
    /// Spread of luminance values.
    pub contrast: f64,
    /// Inverse measure of unwanted high-frequency variance.
    pub noise: f64,
    /// Closeness of color statistics to the natural reference.
    pub natural: f64,
    /// Weighted aggregate of the four sub-metrics.
    pub overall_score: f64,
}

impl QualityMetrics {
    /// Combine clamped sub-metrics into a metrics value with its overall
    /// score.
    #[must_use]
    pub fn from_submetrics(
        sharpness: f64,
        contrast: f64,
        noise: f64,
        natural: f64,
        calibration: &Calibration,
    ) -> Self {
        let sharpness = sharpness.clamp(0.0, 100.0);
        let contrast = contrast.clamp(0.0, 100.0);
        let noise = noise.clamp(0.0, 100.0);
        let natural = natural.clamp(0.0, 100.0);

        let w = &calibration.weights;
        let overall = w.sharpness * sharpness
            + w.contrast * contrast
            + w.noise * noise
            + w.natural * natural;

        Self {
            sharpness,
            contrast,
            noise,
            natural,
            overall_score: overall.clamp(0.0, 100.0),
        }
    }

    /// Per-sub-metric difference `self - baseline`. Values may be negative.
    #[must_use]
    pub fn improvement_over(&self, baseline: &Self) -> MetricDelta {
        MetricDelta {
            sharpness: self.sharpness - baseline.sharpness,
            contrast: self.contrast - baseline.contrast,
            noise: self.noise - baseline.noise,
            natural: self.natural - baseline.natural,
            overall_score: self.overall_score - baseline.overall_score,
        }
    }
}

/// Signed difference between two [`QualityMetrics`] values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricDelta {
    /// Change in sharpness.
    pub sharpness: f64,
    /// Change in contrast.
    pub contrast: f64,
    /// Change in noise (positive = cleaner).
    pub noise: f64,
    /// Change in naturalness.
    pub natural: f64,
    /// Change in overall score.
    pub overall_score: f64,
}

/// Analyze a decoded buffer into normalized quality metrics.
///
/// # Arguments
///
/// * `buffer` - Decoded raster with positive dimensions.
/// * `calibration` - Measurement constants; see [`Calibration`].
///
/// # Errors
///
/// Returns [`Error::InvalidImage`](crate::Error::InvalidImage) for empty,
/// zero-dimension, or unsupported-channel buffers.
pub fn analyze(buffer: &PixelBuffer, calibration: &Calibration) -> Result<QualityMetrics> {
    buffer.validate()?;

    let rgb = buffer.to_rgb8_vec();
    let width = buffer.width();
    let height = buffer.height();
    let luma = luma_plane(&rgb);

    let sharpness = sharpness::score(&luma, width, height, calibration);
    let contrast = contrast::score(&luma);
    let noise = noise::score(&luma, width, height, calibration);
    let natural = natural::score(&rgb, calibration);

    Ok(QualityMetrics::from_submetrics(
        sharpness,
        contrast,
        noise,
        natural,
        calibration,
    ))
}

/// Rec.601 luma plane in 0-255 units from interleaved RGB8 data.
#[must_use]
pub fn luma_plane(rgb: &[u8]) -> Vec<f64> {
    rgb.chunks_exact(3)
        .map(|p| 0.299 * f64::from(p[0]) + 0.587 * f64::from(p[1]) + 0.114 * f64::from(p[2]))
        .collect()
}

/// Mean and standard deviation of a sample plane.
pub(crate) fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}
