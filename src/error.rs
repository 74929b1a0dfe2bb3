//! Error types for comparison pipeline operations.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during quality assessment and enhancement.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The supplied pixel buffer is malformed (empty, zero-dimension, or an
    /// unsupported channel layout). Client error, not retried.
    #[error("Invalid image: {reason}")]
    InvalidImage {
        /// Reason the buffer was rejected.
        reason: String,
    },

    /// The requested image does not exist or is not owned by the requester.
    /// The two cases are deliberately indistinguishable to the caller.
    #[error("Image not found: {image_id}")]
    ImageNotFound {
        /// Identifier that failed to resolve.
        image_id: String,
    },

    /// Unexpected internal failure in a pipeline stage. The pipeline is
    /// deterministic, so retrying would fail identically.
    #[error("Processing failed ({stage}): {reason}")]
    Processing {
        /// Pipeline stage that failed.
        stage: String,
        /// Reason for the failure.
        reason: String,
    },

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Construct an [`Error::InvalidImage`] from any displayable reason.
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    /// Construct an [`Error::ImageNotFound`] for the given identifier.
    pub fn not_found(image_id: impl Into<String>) -> Self {
        Self::ImageNotFound {
            image_id: image_id.into(),
        }
    }
}
