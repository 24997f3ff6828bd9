//! Operator leaderboard construction.

use crate::libs::operator::OperatorMetrics;
use serde::{Deserialize, Serialize};

/// Leaderboard truncation bound applied when none is configured.
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// One leaderboard row, a display projection of `OperatorMetrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based leaderboard position.
    pub position: usize,
    pub operator: String,
    pub total_calls: usize,
    pub score: f64,
    pub avg_talk_minutes: f64,
    pub avg_rating_attendance: f64,
    pub avg_rating_solution: f64,
    pub evaluated_calls: usize,
}

/// Ranks operators by call volume, descending, and truncates to `limit`.
///
/// Equal call counts resolve by ascending operator name so the ordering is
/// deterministic across runs.
pub fn build_ranking(operators: &[OperatorMetrics], limit: usize) -> Vec<RankingEntry> {
    let mut ordered: Vec<&OperatorMetrics> = operators.iter().collect();
    ordered.sort_by(|a, b| {
        b.metrics
            .total_calls
            .cmp(&a.metrics.total_calls)
            .then_with(|| a.operator.cmp(&b.operator))
    });
    ordered
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, op)| RankingEntry {
            position: index + 1,
            operator: op.operator.clone(),
            total_calls: op.metrics.total_calls,
            score: op.score,
            avg_talk_minutes: op.metrics.avg_talk_minutes,
            avg_rating_attendance: op.metrics.avg_rating_attendance,
            avg_rating_solution: op.metrics.avg_rating_solution,
            evaluated_calls: op.metrics.evaluated_calls,
        })
        .collect()
}
