//! Comparison orchestrator.
//!
//! [`ComparisonSession`] drives a full comparison request: retrieve both
//! images from the [`ImageStore`], analyze them, derive per-image
//! enhancement strengths, enhance, re-analyze, compute improvements, and
//! persist the packaged [`ComparisonResult`] through the [`RecordStore`].
//!
//! The two per-image pipelines are independent and run in parallel via
//! `rayon::join`. Persistence happens only after both pipelines succeed, so
//! a failure anywhere aborts the whole request without a partial record.

pub mod report;

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::calibration::Calibration;
use crate::enhance::enhance;
use crate::error::Result;
use crate::metrics::{analyze, QualityMetrics};
use crate::params::EnhancementParams;
use crate::store::{ImageStore, RecordStore};

pub use report::{ComparisonResult, ImagePair};

/// Configuration for a comparison session.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Measurement and engine constants.
    pub calibration: Calibration,

    /// Run the two per-image pipelines on separate rayon threads.
    /// Disabling this is occasionally useful for profiling; results are
    /// identical either way.
    pub parallel: bool,
}

impl CompareConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder::default()
    }
}

/// Builder for [`CompareConfig`].
#[derive(Debug, Default)]
pub struct CompareConfigBuilder {
    calibration: Option<Calibration>,
    parallel: Option<bool>,
}

impl CompareConfigBuilder {
    /// Set the calibration constants.
    #[must_use]
    pub fn calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = Some(calibration);
        self
    }

    /// Enable or disable parallel per-image pipelines.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> CompareConfig {
        CompareConfig {
            calibration: self.calibration.unwrap_or_default(),
            parallel: self.parallel.unwrap_or(true),
        }
    }
}

/// Outcome of one image's retrieve → analyze → derive → enhance →
/// re-analyze pipeline.
struct PipelineOutcome {
    metrics: QualityMetrics,
    params: EnhancementParams,
    enhanced_metrics: QualityMetrics,
}

/// Orchestrator for comparison requests.
///
/// # Example
///
/// ```rust,ignore
/// use enhance_eval::{CompareConfig, ComparisonSession, MemoryImageStore, MemoryRecordStore};
/// use std::sync::Arc;
///
/// let session = ComparisonSession::new(
///     CompareConfig::builder().build(),
///     Arc::new(images),
///     Arc::new(MemoryRecordStore::new()),
/// );
/// let result = session.compare("owner", "before.png", "after.png", 0.7)?;
/// ```
pub struct ComparisonSession {
    config: CompareConfig,
    images: Arc<dyn ImageStore>,
    records: Arc<dyn RecordStore>,
}

impl ComparisonSession {
    /// Create a session over the given stores.
    #[must_use]
    pub fn new(
        config: CompareConfig,
        images: Arc<dyn ImageStore>,
        records: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            config,
            images,
            records,
        }
    }

    /// Run a full comparison for two images owned by `owner_id`.
    ///
    /// # Arguments
    ///
    /// * `owner_id` - Requesting owner; both images must belong to them.
    /// * `image1_id` / `image2_id` - Identifiers resolved by the image store.
    /// * `enhancement_level` - User aggressiveness control, clamped to [0,1].
    ///
    /// # Errors
    ///
    /// [`Error::ImageNotFound`](crate::Error::ImageNotFound) if either id is
    /// missing or not owned by the requester,
    /// [`Error::InvalidImage`](crate::Error::InvalidImage) for malformed
    /// buffers. The first failure aborts the whole request; nothing is
    /// persisted and no one-sided result is returned.
    pub fn compare(
        &self,
        owner_id: &str,
        image1_id: &str,
        image2_id: &str,
        enhancement_level: f64,
    ) -> Result<ComparisonResult> {
        let level = enhancement_level.clamp(0.0, 1.0);

        let start = Instant::now();
        let (first, second) = if self.config.parallel {
            rayon::join(
                || self.run_pipeline(image1_id, owner_id, level),
                || self.run_pipeline(image2_id, owner_id, level),
            )
        } else {
            (
                self.run_pipeline(image1_id, owner_id, level),
                self.run_pipeline(image2_id, owner_id, level),
            )
        };
        let (first, second) = (first?, second?);
        let processing_time = start.elapsed().as_secs_f64();

        let result = ComparisonResult {
            image1_id: image1_id.to_string(),
            image2_id: image2_id.to_string(),
            enhancement_level: level,
            image1_metrics: first.metrics,
            image2_metrics: second.metrics,
            enhancement_params: ImagePair::new(first.params, second.params),
            enhanced_metrics: ImagePair::new(first.enhanced_metrics, second.enhanced_metrics),
            improvements: ImagePair::new(
                first.enhanced_metrics.improvement_over(&first.metrics),
                second.enhanced_metrics.improvement_over(&second.metrics),
            ),
            processing_time,
            created_at: Utc::now(),
        };

        self.records.save_comparison(&result)?;
        Ok(result)
    }

    /// One image's strictly sequential pipeline.
    fn run_pipeline(&self, image_id: &str, owner_id: &str, level: f64) -> Result<PipelineOutcome> {
        let calibration = &self.config.calibration;

        let buffer = self.images.fetch(image_id, owner_id)?;
        let metrics = analyze(&buffer, calibration)?;
        let params = EnhancementParams::derive(&metrics, level);
        let enhanced = enhance(&buffer, &params, calibration)?;
        let enhanced_metrics = analyze(&enhanced, calibration)?;

        Ok(PipelineOutcome {
            metrics,
            params,
            enhanced_metrics,
        })
    }
}
