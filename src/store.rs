//! External collaborator seams: image retrieval and record persistence.
//!
//! The pipeline consumes these as trait objects so the surrounding service
//! layer can plug in its own storage. Codec decoding belongs behind
//! [`ImageStore`]; this crate only sees decoded rasters.
//!
//! Two reference implementations ship with the crate: in-memory stores for
//! tests and embedding, and [`JsonRecordStore`] which persists each
//! comparison as pretty JSON plus an append-only CSV summary row.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::buffer::PixelBuffer;
use crate::compare::report::ComparisonResult;
use crate::error::{Error, Result};

/// Source of decoded images, keyed by image id and owner.
pub trait ImageStore: Send + Sync {
    /// Fetch the decoded raster for `image_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageNotFound`] when the id is unknown **or** the
    /// image is not owned by `owner_id`; the caller cannot distinguish the
    /// two cases.
    fn fetch(&self, image_id: &str, owner_id: &str) -> Result<PixelBuffer>;
}

/// Sink for completed comparison records.
pub trait RecordStore: Send + Sync {
    /// Persist a completed result, returning the new record's identifier.
    fn save_comparison(&self, result: &ComparisonResult) -> Result<String>;
}

/// In-memory [`ImageStore`] keyed by `(owner_id, image_id)`.
#[derive(Default)]
pub struct MemoryImageStore {
    images: HashMap<(String, String), PixelBuffer>,
}

impl MemoryImageStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under an owner.
    pub fn insert(&mut self, owner_id: &str, image_id: &str, buffer: PixelBuffer) {
        self.images
            .insert((owner_id.to_string(), image_id.to_string()), buffer);
    }
}

impl ImageStore for MemoryImageStore {
    fn fetch(&self, image_id: &str, owner_id: &str) -> Result<PixelBuffer> {
        self.images
            .get(&(owner_id.to_string(), image_id.to_string()))
            .cloned()
            .ok_or_else(|| Error::not_found(image_id))
    }
}

/// In-memory [`RecordStore`] retaining every saved result.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<ComparisonResult>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// True when nothing has been persisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all persisted records.
    #[must_use]
    pub fn records(&self) -> Vec<ComparisonResult> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn save_comparison(&self, result: &ComparisonResult) -> Result<String> {
        let mut records = self.records.lock().map_err(|_| Error::Processing {
            stage: "persist".to_string(),
            reason: "record store lock poisoned".to_string(),
        })?;
        records.push(result.clone());
        Ok(format!("record-{}", records.len()))
    }
}

/// File-backed [`RecordStore`]: one pretty-JSON file per record plus an
/// append-only `comparisons.csv` summary.
pub struct JsonRecordStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonRecordStore {
    /// Create a store writing into `dir`. The directory is created on the
    /// first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    fn next_record_id(&self) -> Result<String> {
        let count = std::fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.path().extension().is_some_and(|ext| ext == "json")
            })
            .count();
        Ok(format!("cmp-{:06}", count + 1))
    }

    fn append_csv_row(&self, record_id: &str, result: &ComparisonResult) -> Result<()> {
        let path = self.dir.join("comparisons.csv");
        let write_header = !path.exists();

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            wtr.write_record([
                "record_id",
                "image1",
                "image2",
                "level",
                "overall1",
                "overall2",
                "enhanced_overall1",
                "enhanced_overall2",
                "improvement1",
                "improvement2",
                "processing_s",
                "created_at",
            ])?;
        }

        wtr.write_record([
            record_id,
            &result.image1_id,
            &result.image2_id,
            &format!("{:.2}", result.enhancement_level),
            &format!("{:.2}", result.image1_metrics.overall_score),
            &format!("{:.2}", result.image2_metrics.overall_score),
            &format!("{:.2}", result.enhanced_metrics.image1.overall_score),
            &format!("{:.2}", result.enhanced_metrics.image2.overall_score),
            &format!("{:.2}", result.improvements.image1.overall_score),
            &format!("{:.2}", result.improvements.image2.overall_score),
            &format!("{:.4}", result.processing_time),
            &result.created_at.to_rfc3339(),
        ])?;

        wtr.flush()?;
        Ok(())
    }
}

impl RecordStore for JsonRecordStore {
    fn save_comparison(&self, result: &ComparisonResult) -> Result<String> {
        let _guard = self.lock.lock().map_err(|_| Error::Processing {
            stage: "persist".to_string(),
            reason: "record store lock poisoned".to_string(),
        })?;

        std::fs::create_dir_all(&self.dir)?;
        let record_id = self.next_record_id()?;

        let json_path = self.dir.join(format!("{record_id}.json"));
        let json = serde_json::to_string_pretty(result)?;
        std::fs::write(json_path, json)?;

        self.append_csv_row(&record_id, result)?;
        Ok(record_id)
    }
}
