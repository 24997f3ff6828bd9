//! Period-over-period comparison with trend classification.
//!
//! Each tracked metric carries an explicit kind tag: for volume and rating
//! metrics an increase is favorable, for duration metrics a decrease is.
//! The classifier swaps the growth/decline labels for time-like metrics so
//! the UI can color trends by favorability without knowing metric names.

use crate::libs::config::AnalyticsConfig;
use crate::libs::filter;
use crate::libs::metrics::{self, MetricsSnapshot};
use crate::libs::period::{Period, PeriodSelection};
use crate::libs::record::CallRecord;
use serde::{Deserialize, Serialize};

/// Favorable-direction tag; deliberately explicit, never inferred from the
/// metric name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    /// Higher is better: counts, rates, ratings.
    VolumeLike,
    /// Lower is better: durations.
    TimeLike,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Growth,
    Decline,
    Neutral,
}

/// The closed set of metrics the comparison view tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackedMetric {
    TotalCalls,
    Answered,
    AnswerRate,
    AbandonRate,
    AvgRatingAttendance,
    AvgRatingSolution,
    EvaluatedCalls,
    AvgTalkMinutes,
    AvgWaitMinutes,
    AvgIvrMinutes,
}

impl TrackedMetric {
    pub const ALL: [TrackedMetric; 10] = [
        TrackedMetric::TotalCalls,
        TrackedMetric::Answered,
        TrackedMetric::AnswerRate,
        TrackedMetric::AbandonRate,
        TrackedMetric::AvgRatingAttendance,
        TrackedMetric::AvgRatingSolution,
        TrackedMetric::EvaluatedCalls,
        TrackedMetric::AvgTalkMinutes,
        TrackedMetric::AvgWaitMinutes,
        TrackedMetric::AvgIvrMinutes,
    ];

    pub fn kind(self) -> MetricKind {
        match self {
            Self::AvgTalkMinutes | Self::AvgWaitMinutes | Self::AvgIvrMinutes => {
                MetricKind::TimeLike
            }
            _ => MetricKind::VolumeLike,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TotalCalls => "Total de chamadas",
            Self::Answered => "Atendidas",
            Self::AnswerRate => "Taxa de atendimento",
            Self::AbandonRate => "Taxa de abandono",
            Self::AvgRatingAttendance => "Nota média de atendimento",
            Self::AvgRatingSolution => "Nota média de solução",
            Self::EvaluatedCalls => "Chamadas avaliadas",
            Self::AvgTalkMinutes => "Tempo médio de conversa",
            Self::AvgWaitMinutes => "Tempo médio de espera",
            Self::AvgIvrMinutes => "Tempo médio na URA",
        }
    }

    fn read(self, snapshot: &MetricsSnapshot) -> f64 {
        match self {
            Self::TotalCalls => snapshot.total_calls as f64,
            Self::Answered => snapshot.answered as f64,
            Self::AnswerRate => snapshot.answer_rate,
            Self::AbandonRate => snapshot.abandon_rate,
            Self::AvgRatingAttendance => snapshot.avg_rating_attendance,
            Self::AvgRatingSolution => snapshot.avg_rating_solution,
            Self::EvaluatedCalls => snapshot.evaluated_calls as f64,
            Self::AvgTalkMinutes => snapshot.avg_talk_minutes,
            Self::AvgWaitMinutes => snapshot.avg_wait_minutes,
            Self::AvgIvrMinutes => snapshot.avg_ivr_minutes,
        }
    }
}

/// Delta and trend for one tracked metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub metric: TrackedMetric,
    pub kind: MetricKind,
    pub current_value: f64,
    pub previous_value: f64,
    pub percent_delta: f64,
    pub trend: Trend,
}

/// Full output of the temporal-comparison view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub previous_label: String,
    pub current_label: String,
    pub previous: MetricsSnapshot,
    pub current: MetricsSnapshot,
    pub metrics: Vec<MetricComparison>,
}

/// Percent change of `current` relative to `previous`, one decimal; `0.0`
/// when there is no previous baseline.
pub fn percent_delta(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    metrics::round1((current - previous) / previous * 100.0)
}

/// Classifies a raw delta against the threshold, swapping the favorable
/// direction for time-like metrics where a decrease is the improvement.
pub fn classify(percent_delta: f64, kind: MetricKind, threshold: f64) -> Trend {
    let raw = if percent_delta > threshold {
        Trend::Growth
    } else if percent_delta < -threshold {
        Trend::Decline
    } else {
        Trend::Neutral
    };
    match (kind, raw) {
        (MetricKind::TimeLike, Trend::Growth) => Trend::Decline,
        (MetricKind::TimeLike, Trend::Decline) => Trend::Growth,
        (_, raw) => raw,
    }
}

/// Diffs two company-wide snapshots across every tracked metric.
pub fn compare_snapshots(
    previous: &MetricsSnapshot,
    current: &MetricsSnapshot,
    threshold: f64,
) -> Vec<MetricComparison> {
    TrackedMetric::ALL
        .iter()
        .map(|&metric| {
            let previous_value = metric.read(previous);
            let current_value = metric.read(current);
            let delta = percent_delta(current_value, previous_value);
            MetricComparison {
                metric,
                kind: metric.kind(),
                current_value,
                previous_value,
                percent_delta: delta,
                trend: classify(delta, metric.kind(), threshold),
            }
        })
        .collect()
}

/// Entry point of the temporal-comparison view: filters and aggregates the
/// same record collection once per period, then diffs the snapshots.
pub fn compare_periods(
    records: &[CallRecord],
    previous: &Period,
    current: &Period,
    hide_excluded: bool,
    config: &AnalyticsConfig,
) -> PeriodComparison {
    let previous_records = filter::filter_records(
        records,
        &PeriodSelection::Range(previous.clone()),
        hide_excluded,
        &config.excluded_name_markers,
    );
    let current_records = filter::filter_records(
        records,
        &PeriodSelection::Range(current.clone()),
        hide_excluded,
        &config.excluded_name_markers,
    );
    tracing::debug!(
        previous = previous_records.len(),
        current = current_records.len(),
        "comparing periods"
    );
    let previous_snapshot = metrics::aggregate(&previous_records, config.zero_inflation_threshold);
    let current_snapshot = metrics::aggregate(&current_records, config.zero_inflation_threshold);
    PeriodComparison {
        previous_label: previous.label.clone(),
        current_label: current.label.clone(),
        metrics: compare_snapshots(&previous_snapshot, &current_snapshot, config.trend_threshold),
        previous: previous_snapshot,
        current: current_snapshot,
    }
}
