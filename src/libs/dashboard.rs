//! The single aggregation pipeline shared by the dashboard and the
//! temporal-comparison view.
//!
//! Both former call sites go through `build_dashboard`; the comparison view
//! additionally calls `comparison::compare_periods` with two resolved
//! periods. Re-running with identical inputs always produces an identical
//! `Dashboard`.

use crate::libs::config::AnalyticsConfig;
use crate::libs::filter;
use crate::libs::metrics::{self, MetricsSnapshot};
use crate::libs::operator::{self, OperatorMetrics};
use crate::libs::period::{Period, PeriodSelection};
use crate::libs::ranking::{self, RankingEntry};
use crate::libs::record::CallRecord;
use serde::{Deserialize, Serialize};

/// Everything the dashboard UI binds for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Resolved period metadata; `None` when no bounded period applies.
    pub period: Option<Period>,
    pub summary: MetricsSnapshot,
    pub operators: Vec<OperatorMetrics>,
    /// Suppressed (`None`) when no period token was selected.
    pub ranking: Option<Vec<RankingEntry>>,
    /// Calls per hour of day, for the hourly chart.
    pub hourly: [usize; 24],
}

/// Runs filter → aggregate → rank for one period selection.
pub fn build_dashboard(
    records: &[CallRecord],
    selection: &PeriodSelection,
    hide_excluded: bool,
    config: &AnalyticsConfig,
) -> Dashboard {
    let filtered = filter::filter_records(
        records,
        selection,
        hide_excluded,
        &config.excluded_name_markers,
    );
    let summary = metrics::aggregate(&filtered, config.zero_inflation_threshold);
    let operators = operator::aggregate_by_operator(&filtered, config.zero_inflation_threshold);
    let hourly = metrics::hourly_distribution(&filtered);

    let (period, ranking) = match selection {
        PeriodSelection::NotSelected => (None, None),
        PeriodSelection::All => {
            (None, Some(ranking::build_ranking(&operators, config.ranking_limit)))
        }
        PeriodSelection::Range(period) => (
            Some(period.clone()),
            Some(ranking::build_ranking(&operators, config.ranking_limit)),
        ),
    };

    tracing::debug!(
        total = records.len(),
        filtered = filtered.len(),
        operators = operators.len(),
        "dashboard built"
    );
    Dashboard { period, summary, operators, ranking, hourly }
}
