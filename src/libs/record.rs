//! Canonical call-detail record model and the ingestion adapter.
//!
//! The upstream source delivers records in two shapes: JSON objects with
//! camelCase keys, and positional rows (plain JSON arrays) straight out of
//! the spreadsheet. Both shapes are normalized here, once, so no other
//! module ever sniffs shapes.
//!
//! ## Field conventions
//!
//! - Dates are normalized to `NaiveDate` on ingest; unparsable dates become
//!   `None` and are skipped by date-bounded computation.
//! - The `hour` column and the three duration columns stay as raw text: the
//!   aggregator needs the literal `"00:00:00"` to apply its zero handling.
//! - Ratings are parsed to numbers on ingest; non-numeric input drops to
//!   `None`. Range validation happens in the aggregator.
//! - A missing or blank operator canonicalizes to the `"Sem Operador"`
//!   sentinel so unassigned calls stay in company-wide totals.

use crate::libs::normalizer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operator sentinel for unassigned calls.
pub const NO_OPERATOR: &str = "Sem Operador";

/// Column positions of the positional (spreadsheet row) record shape.
pub mod columns {
    pub const DATE: usize = 0;
    pub const OPERATOR: usize = 1;
    pub const HOUR: usize = 2;
    pub const OUTCOME: usize = 3;
    pub const IVR_DURATION: usize = 11;
    pub const WAIT_DURATION: usize = 12;
    pub const TALK_DURATION: usize = 14;
    pub const RATING_ATTENDANCE: usize = 27;
    pub const RATING_SOLUTION: usize = 28;
}

/// Outcome of a single call, matching the upstream literals exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutcome {
    #[serde(rename = "Atendida")]
    Answered,
    #[serde(rename = "Retida na URA")]
    IvrRetained,
    #[serde(rename = "Abandonada")]
    Abandoned,
}

impl CallOutcome {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "Atendida" => Some(Self::Answered),
            "Retida na URA" => Some(Self::IvrRetained),
            "Abandonada" => Some(Self::Abandoned),
            _ => None,
        }
    }
}

/// One telephony event with outcome, ratings, and durations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub date: Option<NaiveDate>,
    pub hour: Option<String>,
    pub operator: String,
    pub outcome: Option<CallOutcome>,
    pub rating_attendance: Option<f64>,
    pub rating_solution: Option<f64>,
    pub talk_duration: Option<String>,
    pub wait_duration: Option<String>,
    pub ivr_duration: Option<String>,
}

impl Default for CallRecord {
    fn default() -> Self {
        Self {
            date: None,
            hour: None,
            operator: NO_OPERATOR.to_string(),
            outcome: None,
            rating_attendance: None,
            rating_solution: None,
            talk_duration: None,
            wait_duration: None,
            ivr_duration: None,
        }
    }
}

/// Parses the raw JSON array delivered by the record source.
///
/// Elements that are neither objects nor arrays are skipped; nothing here
/// ever fails the pipeline.
pub fn parse_records(value: &Value) -> Vec<CallRecord> {
    let Some(items) = value.as_array() else {
        tracing::warn!("record source is not a JSON array");
        return Vec::new();
    };
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        match from_value(item) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, total = items.len(), "skipped malformed record elements");
    }
    tracing::debug!(count = records.len(), "ingested call records");
    records
}

/// Converts one raw element into a canonical record, handling both shapes.
pub fn from_value(value: &Value) -> Option<CallRecord> {
    match value {
        Value::Object(_) => Some(from_object(value)),
        Value::Array(row) => Some(from_row(row)),
        _ => None,
    }
}

fn from_object(value: &Value) -> CallRecord {
    CallRecord {
        date: value.get("date").and_then(normalizer::normalize_date),
        hour: text_field(value.get("hour")),
        operator: operator_name(text_field(value.get("operator"))),
        outcome: text_field(value.get("callOutcome")).and_then(|s| CallOutcome::parse(&s)),
        rating_attendance: numeric_field(value.get("ratingAttendance")),
        rating_solution: numeric_field(value.get("ratingSolution")),
        talk_duration: text_field(value.get("talkDuration")),
        wait_duration: text_field(value.get("waitDuration")),
        ivr_duration: text_field(value.get("ivrDuration")),
    }
}

fn from_row(row: &[Value]) -> CallRecord {
    CallRecord {
        date: row.get(columns::DATE).and_then(normalizer::normalize_date),
        hour: text_field(row.get(columns::HOUR)),
        operator: operator_name(text_field(row.get(columns::OPERATOR))),
        outcome: text_field(row.get(columns::OUTCOME)).and_then(|s| CallOutcome::parse(&s)),
        rating_attendance: numeric_field(row.get(columns::RATING_ATTENDANCE)),
        rating_solution: numeric_field(row.get(columns::RATING_SOLUTION)),
        talk_duration: text_field(row.get(columns::TALK_DURATION)),
        wait_duration: text_field(row.get(columns::WAIT_DURATION)),
        ivr_duration: text_field(row.get(columns::IVR_DURATION)),
    }
}

fn operator_name(raw: Option<String>) -> String {
    raw.unwrap_or_else(|| NO_OPERATOR.to_string())
}

fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn numeric_field(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
