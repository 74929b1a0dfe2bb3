//! Enhancement strength derivation from measured deficiencies.
//!
//! Each aspect's strength is the product of the user's enhancement level and
//! the metric's deficiency (its normalized shortfall from 100). An image
//! that already scores well on an aspect receives little processing for it,
//! even at full level.

use serde::{Deserialize, Serialize};

use crate::metrics::QualityMetrics;

/// Per-aspect enhancement strengths, each in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnhancementParams {
    /// Unsharp-mask strength.
    pub sharpness: f64,
    /// Contrast stretch strength.
    pub contrast: f64,
    /// Edge-aware smoothing strength.
    pub denoise: f64,
    /// Saturation / white-balance strength.
    pub color: f64,
}

impl EnhancementParams {
    /// Derive strengths from one image's metrics and the user level.
    ///
    /// `strength = level * clamp((100 - metric) / 100, 0, 1)` per aspect.
    /// The level is clamped to [0,1]; at level 0 every strength is exactly 0.
    #[must_use]
    pub fn derive(metrics: &QualityMetrics, level: f64) -> Self {
        let level = level.clamp(0.0, 1.0);
        let deficiency = |metric: f64| ((100.0 - metric) / 100.0).clamp(0.0, 1.0);

        Self {
            sharpness: (level * deficiency(metrics.sharpness)).clamp(0.0, 1.0),
            contrast: (level * deficiency(metrics.contrast)).clamp(0.0, 1.0),
            denoise: (level * deficiency(metrics.noise)).clamp(0.0, 1.0),
            color: (level * deficiency(metrics.natural)).clamp(0.0, 1.0),
        }
    }

    /// True when every strength is zero and enhancement is a no-op.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.sharpness == 0.0 && self.contrast == 0.0 && self.denoise == 0.0 && self.color == 0.0
    }
}
