//! Comparison result types.
//!
//! [`ComparisonResult`] is the packaged output of one comparison request:
//! original metrics for both images, the per-image enhancement strengths,
//! the re-measured metrics, the signed improvements, and the wall-clock
//! processing time. It is created once by the orchestrator and never
//! mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::{MetricDelta, QualityMetrics};
use crate::params::EnhancementParams;

/// A value computed independently for each of the two compared images.
///
/// Derivation, enhancement, and re-measurement all run per image — nothing
/// is shared or averaged between the two — so the enhancement fields of a
/// result carry one entry per image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePair<T> {
    /// Value for the first image.
    pub image1: T,
    /// Value for the second image.
    pub image2: T,
}

impl<T> ImagePair<T> {
    /// Build a pair from per-image values.
    pub fn new(image1: T, image2: T) -> Self {
        Self { image1, image2 }
    }
}

/// Packaged outcome of one comparison request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Identifier of the first image.
    pub image1_id: String,

    /// Identifier of the second image.
    pub image2_id: String,

    /// Enhancement level the request was processed at (clamped to [0,1]).
    pub enhancement_level: f64,

    /// Metrics of the first image before enhancement.
    pub image1_metrics: QualityMetrics,

    /// Metrics of the second image before enhancement.
    pub image2_metrics: QualityMetrics,

    /// Strengths derived independently from each image's own metrics.
    pub enhancement_params: ImagePair<EnhancementParams>,

    /// Metrics re-measured on each enhanced buffer.
    pub enhanced_metrics: ImagePair<QualityMetrics>,

    /// `enhanced_metrics - original metrics` per image; may be negative.
    pub improvements: ImagePair<MetricDelta>,

    /// Wall-clock seconds for retrieve → analyze → derive → enhance →
    /// re-analyze. Excludes persistence.
    pub processing_time: f64,

    /// When the result was assembled.
    pub created_at: DateTime<Utc>,
}

impl ComparisonResult {
    /// Identifier of the image with the higher original overall score.
    /// Ties go to the first image.
    #[must_use]
    pub fn better_image_id(&self) -> &str {
        if self.image2_metrics.overall_score > self.image1_metrics.overall_score {
            &self.image2_id
        } else {
            &self.image1_id
        }
    }
}
