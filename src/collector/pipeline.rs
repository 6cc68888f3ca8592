use std::path::PathBuf;

use anyhow::Result;
use reqwest::Client;
use tracing::{info, warn};

use crate::api::{build_client, fetch_page};
use crate::config::Config;
use crate::models::{Field, Sample};
use crate::store::{DataStore, DiagnosticsLog, RunLock};

use super::extract::Extractor;
use super::market_hours::is_market_open;

// A day with fewer samples than this gets a warning after every append.
const MIN_DAILY_SAMPLES: usize = 2;

pub enum CycleOutcome {
    Collected(Sample),
    MarketClosed,
    AlreadyRunning,
}

pub struct Collector {
    client: Client,
    extractor: Extractor,
    store: DataStore,
    diagnostics: DiagnosticsLog,
    source_url: String,
    market_hours_only: bool,
    lock_path: PathBuf,
}

impl Collector {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_client(config.user_agent())?,
            extractor: Extractor::new()?,
            store: DataStore::new(config.data_dir().clone()),
            diagnostics: DiagnosticsLog::new(
                config.warning_log().clone(),
                config.error_log().clone(),
            ),
            source_url: config.source_url().clone(),
            market_hours_only: *config.market_hours_only(),
            lock_path: config.lock_path().clone(),
        })
    }

    pub async fn run_cycle(&self) -> Result<CycleOutcome> {
        if self.market_hours_only && !is_market_open() {
            info!("Market is closed, skipping collection");
            return Ok(CycleOutcome::MarketClosed);
        }

        let Some(_lock) = RunLock::acquire(&self.lock_path)? else {
            warn!("Another collector instance is running, skipping this cycle");
            return Ok(CycleOutcome::AlreadyRunning);
        };

        let page = fetch_page(&self.client, &self.source_url).await?;
        let sample = self.extractor.extract(&page);
        self.record(&sample)?;
        Ok(CycleOutcome::Collected(sample))
    }

    pub fn record(&self, sample: &Sample) -> Result<()> {
        let table = self.store.daily_table(sample.date());
        let count = table.append(sample)?;

        if count < MIN_DAILY_SAMPLES {
            self.diagnostics.short_day(sample, count)?;
        }

        let failed = [Field::LastPrice, Field::NetChange]
            .into_iter()
            .filter(|field| sample.value(*field).is_unavailable())
            .collect::<Vec<Field>>();
        if !failed.is_empty() {
            self.diagnostics.unresolved_fields(sample, &failed)?;
        }

        info!(
            "Recorded sample {} for {} ({} so far today)",
            sample.timestamp_text(),
            sample.date(),
            count
        );
        Ok(())
    }
}
