//! Named reporting periods and their resolution to concrete date ranges.
//!
//! The UI sends one token from a closed vocabulary (plus optional custom
//! bounds); resolution happens against an explicit reference date so the
//! whole module stays pure and testable. All ranges are inclusive of both
//! bounds at day granularity.

use crate::libs::normalizer;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The closed period-token vocabulary spoken by the UI.
///
/// The month tokens kept their original Portuguese wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodToken {
    #[serde(rename = "last7Days")]
    Last7Days,
    #[serde(rename = "last15Days")]
    Last15Days,
    #[serde(rename = "currentMonth")]
    CurrentMonth,
    #[serde(rename = "ultimoMes")]
    LastMonth,
    #[serde(rename = "penultimoMes")]
    PenultimateMonth,
    #[serde(rename = "allRecords")]
    AllRecords,
    #[serde(rename = "custom")]
    Custom,
}

impl PeriodToken {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "last7Days" => Some(Self::Last7Days),
            "last15Days" => Some(Self::Last15Days),
            "currentMonth" => Some(Self::CurrentMonth),
            "ultimoMes" => Some(Self::LastMonth),
            "penultimoMes" => Some(Self::PenultimateMonth),
            "allRecords" => Some(Self::AllRecords),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// An inclusive date range with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_days: i64,
    pub label: String,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate, label: impl Into<String>) -> Self {
        let total_days = (end - start).num_days() + 1;
        Self { start, end, total_days, label: label.into() }
    }

    /// First instant of the period (start day at 00:00:00.000).
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Last instant of the period (end day at 23:59:59.999).
    pub fn end_datetime(&self) -> NaiveDateTime {
        self.end.and_hms_milli_opt(23, 59, 59, 999).expect("end-of-day is a valid time")
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Resolver output consumed by the filter and the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodSelection {
    /// No recognizable token; callers present the full dataset and suppress
    /// the ranking and period label.
    NotSelected,
    /// Explicit "allRecords": full dataset, normal UI.
    All,
    /// A concrete inclusive date range.
    Range(Period),
}

/// Resolves a raw token (and optional custom bounds) against a reference
/// date.
pub fn resolve(
    token: Option<&str>,
    custom_start: Option<&str>,
    custom_end: Option<&str>,
    today: NaiveDate,
) -> PeriodSelection {
    match token.and_then(PeriodToken::parse) {
        Some(token) => resolve_token(token, custom_start, custom_end, today),
        None => {
            tracing::debug!("no period token selected, presenting unfiltered dataset");
            PeriodSelection::NotSelected
        }
    }
}

/// Resolves an already-parsed token.
pub fn resolve_token(
    token: PeriodToken,
    custom_start: Option<&str>,
    custom_end: Option<&str>,
    today: NaiveDate,
) -> PeriodSelection {
    match token {
        PeriodToken::Last7Days => {
            PeriodSelection::Range(Period::new(today - Duration::days(6), today, "Últimos 7 dias"))
        }
        PeriodToken::Last15Days => {
            PeriodSelection::Range(Period::new(today - Duration::days(14), today, "Últimos 15 dias"))
        }
        PeriodToken::CurrentMonth => {
            PeriodSelection::Range(Period::new(month_start(today, 0), today, "Mês atual"))
        }
        PeriodToken::LastMonth => {
            let start = month_start(today, 1);
            let end = month_start(today, 0) - Duration::days(1);
            PeriodSelection::Range(Period::new(start, end, "Mês anterior"))
        }
        PeriodToken::PenultimateMonth => {
            let start = month_start(today, 2);
            let end = month_start(today, 1) - Duration::days(1);
            PeriodSelection::Range(Period::new(start, end, "Mês retrasado"))
        }
        PeriodToken::AllRecords => PeriodSelection::All,
        PeriodToken::Custom => resolve_custom(custom_start, custom_end),
    }
}

/// First day of the month `months_back` months before `date`'s month.
fn month_start(date: NaiveDate, months_back: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 - months_back;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

fn resolve_custom(start: Option<&str>, end: Option<&str>) -> PeriodSelection {
    let bounds = start
        .and_then(normalizer::parse_date)
        .zip(end.and_then(normalizer::parse_date));
    match bounds {
        Some((start, end)) if start <= end => {
            let label = format!("{} a {}", start.format("%d/%m/%Y"), end.format("%d/%m/%Y"));
            PeriodSelection::Range(Period::new(start, end, label))
        }
        _ => {
            tracing::warn!("invalid custom period bounds, falling back to the full dataset");
            PeriodSelection::All
        }
    }
}
