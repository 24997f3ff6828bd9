//! Console table rendering of analytics output.

use crate::libs::comparison::{PeriodComparison, Trend};
use crate::libs::dashboard::Dashboard;
use crate::libs::formatter::{format_metric, format_minutes, FormattedSnapshot};
use crate::libs::ranking::RankingEntry;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn summary(dashboard: &Dashboard) -> Result<()> {
        if let Some(period) = &dashboard.period {
            println!("{} ({} dias)", period.label, period.total_days);
        }
        let formatted = FormattedSnapshot::from(&dashboard.summary);
        let mut table = Table::new();

        table.add_row(row!["INDICADOR", "VALOR"]);
        table.add_row(row!["Total de chamadas", formatted.total_calls]);
        table.add_row(row!["Atendidas", formatted.answered]);
        table.add_row(row!["Retidas na URA", formatted.ivr_retained]);
        table.add_row(row!["Abandonadas", formatted.abandoned]);
        table.add_row(row!["Taxa de atendimento (%)", formatted.answer_rate]);
        table.add_row(row!["Taxa de abandono (%)", formatted.abandon_rate]);
        table.add_row(row!["Nota média de atendimento", formatted.avg_rating_attendance]);
        table.add_row(row!["Nota média de solução", formatted.avg_rating_solution]);
        table.add_row(row!["Tempo médio de conversa", formatted.avg_talk_duration]);
        table.add_row(row!["Tempo médio de espera", formatted.avg_wait_duration]);
        table.add_row(row!["Tempo médio na URA", formatted.avg_ivr_duration]);
        table.add_row(row!["Chamadas avaliadas", formatted.evaluated_calls]);
        table.printstd();

        Ok(())
    }

    /// Renders the leaderboard. `hide_names` masks operator identities for
    /// viewers without the manager role; the flag is always passed in
    /// explicitly, never read from ambient state.
    pub fn ranking(entries: &[RankingEntry], hide_names: bool) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "OPERADOR", "CHAMADAS", "NOTA", "T. CONVERSA", "AVALIADAS"]);
        for entry in entries {
            table.add_row(row![
                entry.position,
                display_name(entry, hide_names),
                entry.total_calls,
                format_metric(entry.score),
                format_minutes(entry.avg_talk_minutes),
                entry.evaluated_calls
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn comparison(comparison: &PeriodComparison) -> Result<()> {
        println!("{} → {}", comparison.previous_label, comparison.current_label);
        let mut table = Table::new();

        table.add_row(row!["MÉTRICA", "ANTERIOR", "ATUAL", "VARIAÇÃO (%)", "TENDÊNCIA"]);
        for metric in &comparison.metrics {
            table.add_row(row![
                metric.metric.label(),
                format_metric(metric.previous_value),
                format_metric(metric.current_value),
                format_metric(metric.percent_delta),
                trend_symbol(metric.trend)
            ]);
        }
        table.printstd();

        Ok(())
    }
}

/// Leaderboard display name, anonymized by position when names are hidden.
pub fn display_name(entry: &RankingEntry, hide_names: bool) -> String {
    if hide_names {
        format!("Operador {}", entry.position)
    } else {
        entry.operator.clone()
    }
}

fn trend_symbol(trend: Trend) -> &'static str {
    match trend {
        Trend::Growth => "▲",
        Trend::Decline => "▼",
        Trend::Neutral => "●",
    }
}
