use chrono::{NaiveDate, NaiveDateTime};
use derive_getters::Getters;
use derive_new::new;

use super::{Field, FieldValue};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Sample {
    timestamp: NaiveDateTime,
    last_price: FieldValue,
    net_change: FieldValue,
    day_high: FieldValue,
}

impl Sample {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::LastPrice => self.last_price,
            Field::NetChange => self.net_change,
            Field::DayHigh => self.day_high,
        }
    }
}
