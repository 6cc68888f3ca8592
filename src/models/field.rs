use std::fmt;

use anyhow::Result;
use rust_decimal::Decimal;
use strum_macros::{Display, EnumIter};

pub const UNAVAILABLE: &str = "unavailable";

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    LastPrice,
    NetChange,
    DayHigh,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldValue {
    Value(Decimal),
    Unavailable,
}

impl FieldValue {
    pub fn from_str(s: &str) -> Result<FieldValue> {
        let trimmed = s.trim();
        if trimmed == UNAVAILABLE {
            return Ok(FieldValue::Unavailable);
        }
        trimmed
            .parse::<Decimal>()
            .map(FieldValue::Value)
            .map_err(|_| anyhow::anyhow!("Unknown field value '{}'", s))
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            FieldValue::Value(value) => Some(*value),
            FieldValue::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, FieldValue::Unavailable)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Value(value) => write!(f, "{}", value),
            FieldValue::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}
