use anyhow::Result;
use chrono::{Local, NaiveDate};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use crate::config::Config;
use crate::models::Sample;
use crate::store::{append_text, DataStore};

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct DailyReport {
    date: NaiveDate,
    open: Option<Decimal>,
    close: Option<Decimal>,
    max: Option<Decimal>,
    min: Option<Decimal>,
    total_net_change: Decimal,
    data_points: usize,
}

impl DailyReport {
    // Aggregates skip unresolved fields; data_points still counts every row.
    pub fn from_samples(date: NaiveDate, samples: &[Sample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let prices = samples
            .iter()
            .filter_map(|sample| sample.last_price().value())
            .collect::<Vec<Decimal>>();
        let total_net_change = samples
            .iter()
            .filter_map(|sample| sample.net_change().value())
            .sum::<Decimal>();

        Some(Self::new(
            date,
            prices.first().copied(),
            prices.last().copied(),
            prices.iter().max().copied(),
            prices.iter().min().copied(),
            total_net_change,
            samples.len(),
        ))
    }

    pub fn render(&self) -> String {
        format!(
            "--- Daily Report ({}) ---\n\
             Date: {}\n\
             Open Price: {}\n\
             Close Price: {}\n\
             Max Price: {}\n\
             Min Price: {}\n\
             Total Net Change: {}\n\
             Data Points: {}\n\n",
            self.date,
            self.date,
            price(&self.open),
            price(&self.close),
            price(&self.max),
            price(&self.min),
            self.total_net_change,
            self.data_points
        )
    }
}

pub fn run(config: &Config) -> Result<()> {
    let today = Local::now().date_naive();
    let table = DataStore::new(config.data_dir().clone()).daily_table(today);

    if !table.path().exists() {
        println!("No data collected for today.");
        return Ok(());
    }

    let samples = table.read()?;
    let Some(report) = DailyReport::from_samples(today, &samples) else {
        println!("No data available for today.");
        return Ok(());
    };

    append_text(config.report_log(), &report.render())?;
    println!("Daily report saved.");
    Ok(())
}

fn price(value: &Option<Decimal>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::from("N/A"),
    }
}
