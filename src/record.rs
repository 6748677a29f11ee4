// 🗄️ Measurement Log - one append-only CSV file per subject
// <measurements dir>/<surname>_<first name>.csv, rows: Date,Range,Value (no header)

use crate::ranges::Category;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Default storage folder, relative to the working directory
pub const DEFAULT_MEASUREMENTS_DIR: &str = "measurements";

/// Short date and time, e.g. `10/17/26 - 14:03:05`
pub const DATE_FORMAT: &str = "%x - %X";

// ============================================================================
// SUBJECT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub first_name: String,
    pub surname: String,
}

impl Subject {
    pub fn new(first_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Subject {
            first_name: first_name.into(),
            surname: surname.into(),
        }
    }

    /// Lower-cased `surname_firstname`, the only identity a subject has
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.surname.to_lowercase(), self.first_name.to_lowercase())
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.file_stem())
    }
}

// ============================================================================
// RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Range")]
    pub range: Category,

    /// Already rounded
    #[serde(rename = "Value")]
    pub value: f64,
}

impl MeasurementRecord {
    pub fn new(recorded_at: DateTime<Local>, range: Category, value: f64) -> Self {
        MeasurementRecord {
            date: recorded_at.format(DATE_FORMAT).to_string(),
            range,
            value,
        }
    }

    /// Record stamped with the current local time
    pub fn now(range: Category, value: f64) -> Self {
        Self::new(Local::now(), range, value)
    }
}

// ============================================================================
// WRITER
// ============================================================================

pub struct RecordWriter {
    dir: PathBuf,
}

impl RecordWriter {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        RecordWriter {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, subject: &Subject) -> PathBuf {
        self.dir.join(subject.file_name())
    }

    /// Append one row to the subject's file, creating folder and file as needed.
    /// Existing rows are never read or rewritten. No locking.
    pub fn append(&self, subject: &Subject, record: &MeasurementRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create measurements folder: {:?}", self.dir))?;

        let path = self.path_for(subject);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open measurements file: {:?}", path))?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.serialize(record)
            .with_context(|| format!("Failed to write record to {:?}", path))?;
        wtr.flush()
            .with_context(|| format!("Failed to flush {:?}", path))?;

        log::info!("Appended {} {} to {:?}", record.range, record.value, path);
        Ok(path)
    }
}

/// Read a subject's log back into records. The CLI only appends; this is
/// for callers that want the history.
pub fn load_records(path: &Path) -> Result<Vec<MeasurementRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to open measurements file: {:?}", path))?;

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: MeasurementRecord = result.context("Failed to deserialize measurement")?;
        records.push(record);
    }

    Ok(records)
}
