//! Calibration constants for the analyzer and the enhancement engine.
//!
//! All tuning lives in one immutable [`Calibration`] value that callers pass
//! explicitly to [`analyze`](crate::metrics::analyze) and
//! [`enhance`](crate::enhance::enhance). There is no module-level state, so
//! parallel callers can use different calibrations without interference.

use serde::{Deserialize, Serialize};

/// Weights for combining the four sub-metrics into an overall score.
///
/// Weights must sum to 1 so the overall score stays in [0,100] and is
/// monotone non-decreasing in each sub-metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricWeights {
    /// Weight of the sharpness sub-metric.
    pub sharpness: f64,
    /// Weight of the contrast sub-metric.
    pub contrast: f64,
    /// Weight of the noise sub-metric.
    pub noise: f64,
    /// Weight of the naturalness sub-metric.
    pub natural: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            sharpness: 0.3,
            contrast: 0.2,
            noise: 0.2,
            natural: 0.3,
        }
    }
}

impl MetricWeights {
    /// Sum of the four weights. 1.0 for any sane calibration.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.sharpness + self.contrast + self.noise + self.natural
    }
}

/// Immutable calibration for quality measurement and enhancement strength.
///
/// `Default` provides constants tuned so that typical photographs land in
/// the 50-80 sharpness band and flat or blurred images trend toward 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Laplacian-variance scale for the sharpness tanh mapping.
    pub sharpness_scale: f64,

    /// Mean absolute residual (0-255 units) that maps to a noise score of 0.
    pub noise_scale: f64,

    /// Laplacian magnitude above which a pixel counts as an edge and is
    /// excluded from noise estimation.
    pub edge_threshold: f64,

    /// Residual floor for 8-bit quantization (half an LSB). Keeps the noise
    /// score strictly below 100 so a flat image still has a measurable
    /// denoise deficiency.
    pub quantization_floor: f64,

    /// Reference per-channel means (R, G, B, 0-1) of the natural
    /// distribution.
    pub reference_mean: [f64; 3],

    /// Reference per-channel standard deviations (R, G, B, 0-1).
    pub reference_std: [f64; 3],

    /// Exponential decay scale for the naturalness deviation mapping.
    pub natural_scale: f64,

    /// Sub-metric weights for the overall score.
    pub weights: MetricWeights,

    /// Unsharp-mask gain at full sharpen strength.
    pub sharpen_gain: f64,

    /// Contrast stretch gain at full contrast strength.
    pub contrast_gain: f64,

    /// Luma-difference falloff (0-255 units) for the edge-aware denoise
    /// weight. Larger values smooth more aggressively across detail.
    pub denoise_edge_sigma: f64,

    /// Saturation boost at full color strength.
    pub saturation_gain: f64,

    /// Gray-world white-balance blend at full color strength.
    pub white_balance_gain: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            sharpness_scale: 300.0,
            noise_scale: 25.0,
            edge_threshold: 32.0,
            quantization_floor: 0.5,
            // Channel statistics of well-exposed outdoor photography,
            // slightly warm mean, mid-range spread.
            reference_mean: [0.46, 0.45, 0.42],
            reference_std: [0.23, 0.22, 0.22],
            natural_scale: 0.2,
            weights: MetricWeights::default(),
            sharpen_gain: 1.5,
            contrast_gain: 0.8,
            denoise_edge_sigma: 24.0,
            saturation_gain: 0.5,
            white_balance_gain: 0.6,
        }
    }
}
