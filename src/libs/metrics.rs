//! Company-wide aggregation of call records into summary metrics.
//!
//! Every value here degrades to zero on empty input: rates and averages are
//! `0.0` rather than `NaN`, and nothing in this module can fail. The UI
//! layer has no error path for aggregation and relies on always-well-typed
//! output.
//!
//! ## Duration averaging
//!
//! Talk time and wait/IVR time follow different rules. Talk time drops the
//! literal `"00:00:00"` and non-positive values before averaging. Wait and
//! IVR time keep legitimate zeros, except when zeros dominate the sample:
//! when more than `zero_inflation_threshold` of the present values are
//! exactly zero, the zero mass is treated as "not recorded" and the average
//! is taken over the non-zero subset only.

use crate::libs::duration;
use crate::libs::normalizer;
use crate::libs::record::{CallOutcome, CallRecord};
use serde::{Deserialize, Serialize};

/// Valid rating bounds; anything outside is treated as absent.
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;

/// Literal a record carries when no talk time was recorded.
pub const ZERO_DURATION: &str = "00:00:00";

/// Aggregate metrics over one record collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_calls: usize,
    pub answered: usize,
    pub ivr_retained: usize,
    pub abandoned: usize,
    /// Percent of calls answered, one decimal.
    pub answer_rate: f64,
    /// Percent of calls abandoned, one decimal.
    pub abandon_rate: f64,
    pub avg_rating_attendance: f64,
    pub avg_rating_solution: f64,
    pub avg_talk_minutes: f64,
    pub avg_wait_minutes: f64,
    pub avg_ivr_minutes: f64,
    /// Calls carrying at least one valid rating.
    pub evaluated_calls: usize,
}

/// Reduces a filtered record collection into a snapshot. Recomputed from
/// scratch on every invocation; never incremental.
pub fn aggregate(records: &[CallRecord], zero_inflation_threshold: f64) -> MetricsSnapshot {
    let total_calls = records.len();
    let answered = count_outcome(records, CallOutcome::Answered);
    let ivr_retained = count_outcome(records, CallOutcome::IvrRetained);
    let abandoned = count_outcome(records, CallOutcome::Abandoned);

    let attendance = valid_ratings(records.iter().map(|r| r.rating_attendance));
    let solution = valid_ratings(records.iter().map(|r| r.rating_solution));
    let evaluated_calls = records
        .iter()
        .filter(|r| is_valid_rating(r.rating_attendance) || is_valid_rating(r.rating_solution))
        .count();

    let talk: Vec<f64> = records
        .iter()
        .filter_map(|r| r.talk_duration.as_deref())
        .filter(|raw| raw.trim() != ZERO_DURATION)
        .map(duration::parse_minutes)
        .filter(|minutes| *minutes > 0.0)
        .collect();

    let wait = present_minutes(records, |r| r.wait_duration.as_deref());
    let ivr = present_minutes(records, |r| r.ivr_duration.as_deref());

    MetricsSnapshot {
        total_calls,
        answered,
        ivr_retained,
        abandoned,
        answer_rate: rate(answered, total_calls),
        abandon_rate: rate(abandoned, total_calls),
        avg_rating_attendance: round1(mean(&attendance)),
        avg_rating_solution: round1(mean(&solution)),
        avg_talk_minutes: round1(mean(&talk)),
        avg_wait_minutes: round1(zero_inflated_mean(&wait, zero_inflation_threshold)),
        avg_ivr_minutes: round1(zero_inflated_mean(&ivr, zero_inflation_threshold)),
        evaluated_calls,
    }
}

/// Calls per hour of day, read from the `hour` column. Records without a
/// parsable hour are skipped.
pub fn hourly_distribution(records: &[CallRecord]) -> [usize; 24] {
    let mut buckets = [0usize; 24];
    for record in records {
        if let Some(hour) = record.hour.as_deref().and_then(normalizer::parse_hour) {
            buckets[hour as usize] += 1;
        }
    }
    buckets
}

/// True for a finite rating within `[RATING_MIN, RATING_MAX]`.
pub fn is_valid_rating(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v.is_finite() && (RATING_MIN..=RATING_MAX).contains(&v))
}

fn count_outcome(records: &[CallRecord], outcome: CallOutcome) -> usize {
    records.iter().filter(|r| r.outcome == Some(outcome)).count()
}

fn valid_ratings(values: impl Iterator<Item = Option<f64>>) -> Vec<f64> {
    values
        .flatten()
        .filter(|v| v.is_finite() && (RATING_MIN..=RATING_MAX).contains(v))
        .collect()
}

fn present_minutes<'a, F>(records: &'a [CallRecord], field: F) -> Vec<f64>
where
    F: Fn(&'a CallRecord) -> Option<&'a str>,
{
    records.iter().filter_map(|r| field(r)).map(duration::parse_minutes).collect()
}

/// Percentage of `part` over `total`, one decimal, `0.0` when empty.
pub fn rate(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(part as f64 / total as f64 * 100.0)
}

/// Arithmetic mean, `0.0` on an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean that ignores a dominant mass of zero values.
///
/// When the share of exact zeros exceeds `threshold`, the zeros are treated
/// as unrecorded and the mean is taken over the non-zero subset.
pub fn zero_inflated_mean(values: &[f64], threshold: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let zeros = values.iter().filter(|v| **v == 0.0).count();
    if zeros as f64 / values.len() as f64 > threshold {
        let non_zero: Vec<f64> = values.iter().copied().filter(|v| *v > 0.0).collect();
        mean(&non_zero)
    } else {
        mean(values)
    }
}

/// Rounds to one decimal place; non-finite input collapses to `0.0`.
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}
