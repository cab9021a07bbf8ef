use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::expressions::Literal;

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Date,
    Null,
}

impl DataType {
    /// Coerce a raw value into the canonical representation of this type.
    /// Dates become millisecond epoch timestamps; `null` leaves values untouched.
    pub fn normalize(&self, value: Literal) -> Literal {
        match self {
            DataType::String => match value {
                Literal::String(_) => value,
                other => Literal::String(other.to_string()),
            },
            DataType::Number => Literal::Number(value.to_number()),
            DataType::Date => Literal::Number(date_to_millis(&value)),
            DataType::Null => value,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::String => "string".fmt(f),
            DataType::Number => "number".fmt(f),
            DataType::Date => "date".fmt(f),
            DataType::Null => "null".fmt(f),
        }
    }
}

fn date_to_millis(value: &Literal) -> f64 {
    match value {
        Literal::Number(v) => *v,
        Literal::String(s) => parse_timestamp_millis(s).map_or(f64::NAN, |ms| ms as f64),
        _ => f64::NAN,
    }
}

/// Parse a textual date into milliseconds since the unix epoch.
///
/// Accepts RFC 3339, RFC 2822 and the common `YYYY-MM-DD[ HH:MM[:SS[.f]]]`
/// shapes. Values without an offset are read as UTC.
pub fn parse_timestamp_millis(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp_millis());
    }
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.timestamp_millis())
}
