//! Date and hour normalization for heterogeneous record input.
//!
//! The upstream record source is not consistent about date encoding: the
//! same column may carry `DD/MM/YYYY` text, ISO text (bare date or full
//! datetime), or an epoch-milliseconds number. Everything funnels through
//! here once, at the ingestion boundary, so downstream aggregation only
//! ever sees a canonical `NaiveDate`.
//!
//! All functions fail soft: unparsable input yields `None` and the caller
//! skips the record instead of aborting the aggregation.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Normalizes a raw JSON date value into a calendar date.
///
/// The calendar day is preserved verbatim from the source text; no timezone
/// arithmetic is applied beyond dropping the time component.
pub fn normalize_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(text) => parse_date(text),
        Value::Number(number) => number.as_i64().and_then(epoch_millis_date),
        _ => None,
    }
}

/// Parses `DD/MM/YYYY` or ISO (`YYYY-MM-DD`, optionally with a time suffix)
/// date text.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if text.contains('/') {
        return NaiveDate::parse_from_str(text, "%d/%m/%Y").ok();
    }
    if text.contains('-') {
        // Only the calendar day matters; cut off any time suffix.
        let day = text.split(['T', ' ']).next().unwrap_or(text);
        return NaiveDate::parse_from_str(day, "%Y-%m-%d").ok();
    }
    None
}

fn epoch_millis_date(millis: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

/// Reads the hour-of-day bucket from `HH:MM:SS` text.
pub fn parse_hour(text: &str) -> Option<u32> {
    let hour = text.trim().split(':').next()?;
    let hour: u32 = hour.parse().ok()?;
    (hour < 24).then_some(hour)
}
