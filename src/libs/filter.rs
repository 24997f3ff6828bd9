//! Record filtering by resolved period and operator exclusion markers.

use crate::libs::period::PeriodSelection;
use crate::libs::record::CallRecord;

/// Operator-name substrings that mark disengaged operators.
pub const DEFAULT_EXCLUDED_MARKERS: [&str; 4] = ["desl", "excluido", "desligado", "inativo"];

/// Filters records down to the selected period, optionally dropping calls
/// handled by disengaged operators. Order-preserving.
///
/// Records without a parsable date are excluded from bounded ranges but
/// retained when no date bounds apply. The exclusion flag is applied after
/// the date filter.
pub fn filter_records(
    records: &[CallRecord],
    selection: &PeriodSelection,
    hide_excluded: bool,
    markers: &[String],
) -> Vec<CallRecord> {
    let mut filtered: Vec<CallRecord> = match selection {
        PeriodSelection::Range(period) => records
            .iter()
            .filter(|record| matches!(record.date, Some(date) if period.contains(date)))
            .cloned()
            .collect(),
        PeriodSelection::All | PeriodSelection::NotSelected => records.to_vec(),
    };
    if hide_excluded {
        filtered.retain(|record| !is_excluded_name(&record.operator, markers));
    }
    tracing::debug!(total = records.len(), kept = filtered.len(), "filtered call records");
    filtered
}

/// True when the lower-cased operator name contains any exclusion marker.
pub fn is_excluded_name(name: &str, markers: &[String]) -> bool {
    let lowered = name.to_lowercase();
    markers.iter().any(|marker| lowered.contains(marker.as_str()))
}
