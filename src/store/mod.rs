use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

pub mod daily_table;
pub mod diagnostics;
pub mod lock;

pub use daily_table::{DailyTable, DataStore};
pub use diagnostics::DiagnosticsLog;
pub use lock::RunLock;

pub(crate) fn append_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Failed to append to log {}", path.display()))?;

    Ok(())
}
