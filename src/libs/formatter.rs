//! Display formatting for metrics and durations.
//!
//! The UI binds pre-formatted strings rather than raw numbers: rates and
//! ratings as one-decimal text (`"0.0"` when nothing was measured) and
//! duration averages as `H:MM:SS` clock text. Pre-formatting keeps every
//! consumer — tables, exports, API responses — rendering identical values.

use crate::libs::metrics::MetricsSnapshot;
use serde::{Deserialize, Serialize};

/// Formats fractional minutes as `H:MM:SS`.
///
/// Hours are not zero-padded; negative input collapses to `"0:00:00"`.
///
/// ```rust
/// use callsight::libs::formatter::format_minutes;
///
/// assert_eq!(format_minutes(90.0), "1:30:00");
/// assert_eq!(format_minutes(0.5), "0:00:30");
/// assert_eq!(format_minutes(0.0), "0:00:00");
/// ```
pub fn format_minutes(minutes: f64) -> String {
    let total_seconds = (minutes.max(0.0) * 60.0).round() as i64;
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}:{:02}", hours, mins, secs)
}

/// One-decimal display rendering of a rate or rating value.
pub fn format_metric(value: f64) -> String {
    format!("{:.1}", value)
}

/// String projection of a `MetricsSnapshot` for direct display binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSnapshot {
    pub total_calls: usize,
    pub answered: usize,
    pub ivr_retained: usize,
    pub abandoned: usize,
    pub answer_rate: String,
    pub abandon_rate: String,
    pub avg_rating_attendance: String,
    pub avg_rating_solution: String,
    pub avg_talk_duration: String,
    pub avg_wait_duration: String,
    pub avg_ivr_duration: String,
    pub evaluated_calls: usize,
}

impl From<&MetricsSnapshot> for FormattedSnapshot {
    fn from(snapshot: &MetricsSnapshot) -> Self {
        Self {
            total_calls: snapshot.total_calls,
            answered: snapshot.answered,
            ivr_retained: snapshot.ivr_retained,
            abandoned: snapshot.abandoned,
            answer_rate: format_metric(snapshot.answer_rate),
            abandon_rate: format_metric(snapshot.abandon_rate),
            avg_rating_attendance: format_metric(snapshot.avg_rating_attendance),
            avg_rating_solution: format_metric(snapshot.avg_rating_solution),
            avg_talk_duration: format_minutes(snapshot.avg_talk_minutes),
            avg_wait_duration: format_minutes(snapshot.avg_wait_minutes),
            avg_ivr_duration: format_minutes(snapshot.avg_ivr_minutes),
            evaluated_calls: snapshot.evaluated_calls,
        }
    }
}
