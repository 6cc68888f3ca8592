use std::path::PathBuf;

use anyhow::Result;
use derive_new::new;

use crate::models::{Field, Sample};
use crate::store::append_text;

#[derive(Clone, Debug, new)]
pub struct DiagnosticsLog {
    warning_path: PathBuf,
    error_path: PathBuf,
}

impl DiagnosticsLog {
    pub fn short_day(&self, sample: &Sample, count: usize) -> Result<()> {
        let line = format!(
            "[{}] WARNING: only {} sample(s) recorded for {} so far\n",
            sample.timestamp_text(),
            count,
            sample.date()
        );
        append_text(&self.warning_path, &line)
    }

    pub fn unresolved_fields(&self, sample: &Sample, fields: &[Field]) -> Result<()> {
        let names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        let line = format!(
            "[{}] ERROR: field extraction failed: {}\n",
            sample.timestamp_text(),
            names.join(", ")
        );
        append_text(&self.error_path, &line)
    }
}
