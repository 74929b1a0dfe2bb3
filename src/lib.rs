//! # enhance-eval
//!
//! Image quality assessment and adaptive enhancement library.
//!
//! The pipeline measures four no-reference quality metrics for a decoded
//! image, derives per-aspect enhancement strengths from the user's level
//! and the image's measured deficiencies, applies the enhancement as a
//! fixed ordered chain of pure pixel transforms, and re-measures the
//! result. A comparison session runs this pipeline for two images in
//! parallel and persists the packaged outcome.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use enhance_eval::{CompareConfig, ComparisonSession, MemoryImageStore, MemoryRecordStore};
//! use std::sync::Arc;
//!
//! let mut images = MemoryImageStore::new();
//! images.insert("owner", "before.png", decoded_buffer);
//! images.insert("owner", "after.png", other_buffer);
//!
//! let session = ComparisonSession::new(
//!     CompareConfig::builder().build(),
//!     Arc::new(images),
//!     Arc::new(MemoryRecordStore::new()),
//! );
//!
//! let result = session.compare("owner", "before.png", "after.png", 0.7)?;
//! println!("better: {}", result.better_image_id());
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`buffer`]: Decoded raster buffers
//! - [`calibration`]: Immutable measurement and engine constants
//! - [`metrics`]: No-reference quality metrics
//! - [`params`]: Deficiency-linear strength derivation
//! - [`enhance`]: Ordered enhancement transforms
//! - [`compare`]: Comparison orchestration and result types
//! - [`store`]: Image and record store seams

pub mod buffer;
pub mod calibration;
pub mod compare;
pub mod enhance;
pub mod error;
pub mod metrics;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use buffer::PixelBuffer;
pub use calibration::{Calibration, MetricWeights};
pub use compare::{CompareConfig, ComparisonResult, ComparisonSession, ImagePair};
pub use enhance::enhance;
pub use error::{Error, Result};
pub use metrics::{analyze, MetricDelta, QualityMetrics};
pub use params::EnhancementParams;
pub use store::{ImageStore, JsonRecordStore, MemoryImageStore, MemoryRecordStore, RecordStore};
