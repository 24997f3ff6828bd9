//! Per-operator grouping and aggregation.

use crate::libs::metrics::{self, MetricsSnapshot};
use crate::libs::record::{CallRecord, NO_OPERATOR};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One operator's snapshot plus the combined rating score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorMetrics {
    pub operator: String,
    pub metrics: MetricsSnapshot,
    /// Sum of the two average ratings, one decimal.
    pub score: f64,
}

/// Groups records by operator and aggregates each group with the same rules
/// as the company-wide snapshot (zero-inflation scoped per operator).
///
/// Unassigned calls (the `"Sem Operador"` sentinel) are excluded. Output is
/// sorted by operator name, which keeps repeated runs identical.
pub fn aggregate_by_operator(
    records: &[CallRecord],
    zero_inflation_threshold: f64,
) -> Vec<OperatorMetrics> {
    let mut groups: BTreeMap<&str, Vec<CallRecord>> = BTreeMap::new();
    for record in records {
        if record.operator == NO_OPERATOR {
            continue;
        }
        groups.entry(record.operator.as_str()).or_default().push(record.clone());
    }
    tracing::debug!(operators = groups.len(), "grouped records by operator");
    groups
        .into_iter()
        .map(|(operator, group)| {
            let snapshot = metrics::aggregate(&group, zero_inflation_threshold);
            let score = metrics::round1(snapshot.avg_rating_attendance + snapshot.avg_rating_solution);
            OperatorMetrics { operator: operator.to_string(), metrics: snapshot, score }
        })
        .collect()
}
