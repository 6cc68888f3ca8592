use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use regex::Regex;
use rust_decimal::Decimal;
use strum::IntoEnumIterator;

use crate::models::{Field, FieldValue, Sample};

// Candidate patterns per field, tried in order; the first capture group is
// the numeric text. The first shape is the quote table markup, the second
// the plain-text summary some mirrors of the page serve instead.
const LAST_PRICE_PATTERNS: &[&str] = &[
    r"<td>Last</td><td>\s*([0-9,.]+)\s*</td>",
    r"Latest Trade:\s*([0-9,.]+)\s*USD",
];

const NET_CHANGE_PATTERNS: &[&str] = &[
    r"<td>Net Change</td><td>\s*([+-]?[0-9,.]+)\s*</td>",
    r"Change:\s*([+-]?[0-9,.]+)",
];

const DAY_HIGH_PATTERNS: &[&str] = &[
    r"<td>Day High</td><td>\s*([0-9,.]+)\s*</td>",
    r"Today's Range:\s*[0-9,.]+\s*-\s*([0-9,.]+)",
];

pub struct Extractor {
    patterns: Vec<(Field, Vec<Regex>)>,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::new();
        for field in Field::iter() {
            let sources = match field {
                Field::LastPrice => LAST_PRICE_PATTERNS,
                Field::NetChange => NET_CHANGE_PATTERNS,
                Field::DayHigh => DAY_HIGH_PATTERNS,
            };
            let compiled = sources
                .iter()
                .map(|pattern| {
                    Regex::new(pattern)
                        .with_context(|| format!("Invalid pattern for {}: {}", field, pattern))
                })
                .collect::<Result<Vec<Regex>>>()?;
            patterns.push((field, compiled));
        }
        Ok(Self { patterns })
    }

    // Each field resolves on its own; a candidate that matches but does not
    // parse falls through to the next candidate.
    pub fn resolve(&self, field: Field, text: &str) -> FieldValue {
        let Some((_, candidates)) = self.patterns.iter().find(|(f, _)| *f == field) else {
            return FieldValue::Unavailable;
        };

        for pattern in candidates {
            if let Some(caps) = pattern.captures(text) {
                if let Some(value) = caps.get(1).and_then(|m| parse_numeric(m.as_str())) {
                    return FieldValue::Value(value);
                }
            }
        }

        FieldValue::Unavailable
    }

    pub fn extract(&self, text: &str) -> Sample {
        let now = Local::now().naive_local();
        let timestamp = now.with_nanosecond(0).unwrap_or(now);
        Sample::new(
            timestamp,
            self.resolve(Field::LastPrice, text),
            self.resolve(Field::NetChange, text),
            self.resolve(Field::DayHigh, text),
        )
    }
}

fn parse_numeric(raw: &str) -> Option<Decimal> {
    raw.trim().replace(',', "").parse::<Decimal>().ok()
}
