use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Error, Result};
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{FieldValue, Sample, TIMESTAMP_FORMAT};

#[derive(Clone, Debug)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn daily_table(&self, date: NaiveDate) -> DailyTable {
        let file_name = format!("sox_index_{}.csv", date.format("%Y%m%d"));
        DailyTable {
            path: self.dir.join(file_name),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DailyTable {
    path: PathBuf,
}

impl DailyTable {
    pub fn path(&self) -> &Path {
        &self.path
    }

    // Appends one record in fixed column order and returns the record count
    // after the append. The file is only ever opened in append mode.
    pub fn append(&self, sample: &Sample) -> Result<usize> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create data directory {}", parent.display())
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open daily table {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(&[
                sample.timestamp_text(),
                sample.last_price().to_string(),
                sample.net_change().to_string(),
                sample.day_high().to_string(),
            ])
            .with_context(|| format!("Failed to append record to {}", self.path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;

        self.record_count()
    }

    pub fn record_count(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open daily table {}", self.path.display()))?;

        let mut count = 0;
        for record in reader.records() {
            record.with_context(|| format!("Failed to read record in {}", self.path.display()))?;
            count += 1;
        }

        Ok(count)
    }

    pub fn read(&self) -> Result<Vec<Sample>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open daily table {}", self.path.display()))?;

        let mut samples = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let rec = record
                .with_context(|| format!("Failed to read record at row {}", row_idx + 1))?;

            if rec.len() < 4 {
                return Err(Error::msg(format!(
                    "Invalid record at row {}: expected 4 fields, found {}",
                    row_idx + 1,
                    rec.len()
                )));
            }

            let timestamp = NaiveDateTime::parse_from_str(&rec[0], TIMESTAMP_FORMAT)
                .with_context(|| {
                    format!("Failed to parse timestamp '{}' at row {}", &rec[0], row_idx + 1)
                })?;

            samples.push(Sample::new(
                timestamp,
                FieldValue::from_str(&rec[1])?,
                FieldValue::from_str(&rec[2])?,
                FieldValue::from_str(&rec[3])?,
            ));
        }

        Ok(samples)
    }
}
