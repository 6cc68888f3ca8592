use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDateTime};

use crate::models::TIMESTAMP_FORMAT;

// A crashed run leaves its lock file behind; anything older than this is
// treated as abandoned and taken over.
const STALE_AFTER_MINUTES: i64 = 15;

#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
}

impl RunLock {
    // Returns None when another live run holds the lock.
    pub fn acquire(path: &Path) -> Result<Option<RunLock>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create lock directory {}", parent.display())
                })?;
            }
        }

        let mut reclaimed = false;
        loop {
            match OpenOptions::new().write(true).create_new(true).open(path) {
                Ok(mut file) => {
                    let stamp = Local::now().naive_local().format(TIMESTAMP_FORMAT);
                    writeln!(file, "{} {}", std::process::id(), stamp)
                        .with_context(|| format!("Failed to write lock {}", path.display()))?;
                    return Ok(Some(RunLock {
                        path: path.to_path_buf(),
                    }));
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    if reclaimed || !is_stale(path) {
                        return Ok(None);
                    }
                    fs::remove_file(path).with_context(|| {
                        format!("Failed to remove stale lock {}", path.display())
                    })?;
                    reclaimed = true;
                }
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("Failed to create lock {}", path.display()));
                }
            }
        }
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn is_stale(path: &Path) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return true;
    };
    let Some((_pid, stamp)) = content.trim().split_once(' ') else {
        return true;
    };
    let Ok(acquired) = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT) else {
        return true;
    };
    Local::now().naive_local() - acquired > Duration::minutes(STALE_AFTER_MINUTES)
}
