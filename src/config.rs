use std::env;
use std::path::PathBuf;

use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;

pub const DEFAULT_SOURCE_URL: &str = "https://www.marketwatch.com/investing/index/sox";

// Plain reqwest user agents get bot-blocked by the quote page.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Clone, Debug, Getters, new)]
pub struct Config {
    source_url: String,
    user_agent: String,
    data_dir: PathBuf,
    warning_log: PathBuf,
    error_log: PathBuf,
    report_log: PathBuf,
    lock_path: PathBuf,
    market_hours_only: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            env_or("SOX_SOURCE_URL", DEFAULT_SOURCE_URL),
            env_or("SOX_USER_AGENT", DEFAULT_USER_AGENT),
            env_path("SOX_DATA_DIR", "data/historical"),
            env_path("SOX_WARNING_LOG", "logs/collector_warnings.log"),
            env_path("SOX_ERROR_LOG", "logs/collector_errors.log"),
            env_path("SOX_REPORT_LOG", "data/daily_report.log"),
            env_path("SOX_LOCK_PATH", "data/collector.lock"),
            env_flag("SOX_MARKET_HOURS_ONLY", true)?,
        ))
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_path(key: &str, default: &str) -> PathBuf {
    let raw = env_or(key, default);
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

fn env_flag(key: &str, default: bool) -> Result<bool> {
    match env::var(key) {
        Ok(raw) => {
            parse_flag(&raw).ok_or_else(|| anyhow::anyhow!("Invalid value for {}: '{}'", key, raw))
        }
        Err(_) => Ok(default),
    }
}

pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
