#[cfg(test)]
mod tests {
    use callsight::libs::config::AnalyticsConfig;
    use callsight::libs::dashboard::build_dashboard;
    use callsight::libs::period::{resolve, PeriodSelection};
    use callsight::libs::record::{parse_records, CallRecord, NO_OPERATOR};
    use chrono::NaiveDate;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
    }

    fn sample_records() -> Vec<CallRecord> {
        parse_records(&json!([
            {
                "date": "05/03/2025", "hour": "09:00:00", "operator": "Ana Souza",
                "callOutcome": "Atendida", "ratingAttendance": 5, "ratingSolution": 4,
                "talkDuration": "00:08:00", "waitDuration": "00:00:30", "ivrDuration": "00:00:20"
            },
            {
                "date": "10/03/2025", "hour": "09:30:00", "operator": "Ana Souza",
                "callOutcome": "Atendida", "ratingAttendance": 4,
                "talkDuration": "00:04:00", "waitDuration": "00:00:30"
            },
            {
                "date": "12/03/2025", "hour": "14:10:00", "operator": "Bruno Lima",
                "callOutcome": "Abandonada", "waitDuration": "00:02:00"
            },
            {
                "date": "20/03/2025", "hour": "16:45:00", "operator": NO_OPERATOR,
                "callOutcome": "Retida na URA", "ivrDuration": "00:01:00"
            },
            // February call, outside the current month.
            {
                "date": "10/02/2025", "operator": "Ana Souza", "callOutcome": "Atendida"
            },
            // Unparsable date, only visible without bounds.
            {
                "date": "??", "operator": "Carla Dias", "callOutcome": "Atendida"
            }
        ]))
    }

    #[test]
    fn test_current_month_dashboard() {
        let records = sample_records();
        let selection = resolve(Some("currentMonth"), None, None, today());
        let config = AnalyticsConfig::default();

        let dashboard = build_dashboard(&records, &selection, false, &config);

        let period = dashboard.period.as_ref().unwrap();
        assert_eq!(period.label, "Mês atual");
        assert_eq!(period.total_days, 31);

        // March only: 4 of the 6 records.
        assert_eq!(dashboard.summary.total_calls, 4);
        assert_eq!(dashboard.summary.answered, 2);
        assert_eq!(dashboard.summary.abandoned, 1);
        assert_eq!(dashboard.summary.ivr_retained, 1);
        assert_eq!(dashboard.summary.answer_rate, 50.0);
        assert_eq!(dashboard.summary.evaluated_calls, 2);
        // Talk: (8 + 4) / 2; wait: (0.5 + 0.5 + 2) / 3 rounded.
        assert_eq!(dashboard.summary.avg_talk_minutes, 6.0);
        assert_eq!(dashboard.summary.avg_wait_minutes, 1.0);

        // Unassigned calls stay in company totals but not in the groups.
        let names: Vec<_> = dashboard.operators.iter().map(|o| o.operator.as_str()).collect();
        assert_eq!(names, vec!["Ana Souza", "Bruno Lima"]);

        let ranking = dashboard.ranking.as_ref().unwrap();
        assert_eq!(ranking[0].operator, "Ana Souza");
        assert_eq!(ranking[0].total_calls, 2);

        assert_eq!(dashboard.hourly[9], 2);
        assert_eq!(dashboard.hourly[14], 1);
        assert_eq!(dashboard.hourly[16], 1);
    }

    #[test]
    fn test_no_selection_suppresses_ranking_and_period() {
        let records = sample_records();
        let selection = resolve(None, None, None, today());
        let config = AnalyticsConfig::default();

        let dashboard = build_dashboard(&records, &selection, false, &config);

        assert_eq!(dashboard.period, None);
        assert!(dashboard.ranking.is_none());
        // Unfiltered dataset, including the unparsable-date record.
        assert_eq!(dashboard.summary.total_calls, 6);
    }

    #[test]
    fn test_all_records_keeps_unparsable_dates_and_ranking() {
        let records = sample_records();
        let config = AnalyticsConfig::default();

        let dashboard = build_dashboard(&records, &PeriodSelection::All, false, &config);

        assert_eq!(dashboard.period, None);
        assert_eq!(dashboard.summary.total_calls, 6);
        let ranking = dashboard.ranking.as_ref().unwrap();
        assert_eq!(ranking[0].operator, "Ana Souza");
        assert_eq!(ranking[0].total_calls, 3);
    }

    #[test]
    fn test_hide_excluded_operators() {
        let mut records = sample_records();
        records.push(CallRecord {
            date: NaiveDate::from_ymd_opt(2025, 3, 11),
            operator: "Rita (Desligada)".to_string(),
            ..Default::default()
        });
        let selection = resolve(Some("currentMonth"), None, None, today());
        let config = AnalyticsConfig::default();

        let visible = build_dashboard(&records, &selection, false, &config);
        assert_eq!(visible.summary.total_calls, 5);

        let hidden = build_dashboard(&records, &selection, true, &config);
        assert_eq!(hidden.summary.total_calls, 4);
        assert!(hidden.operators.iter().all(|o| o.operator != "Rita (Desligada)"));
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let records = sample_records();
        let selection = resolve(Some("currentMonth"), None, None, today());
        let config = AnalyticsConfig::default();

        let first = build_dashboard(&records, &selection, false, &config);
        let second = build_dashboard(&records, &selection, false, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_dataset_produces_zeroed_dashboard() {
        let selection = resolve(Some("last7Days"), None, None, today());
        let config = AnalyticsConfig::default();

        let dashboard = build_dashboard(&[], &selection, false, &config);

        assert_eq!(dashboard.summary.total_calls, 0);
        assert_eq!(dashboard.summary.answer_rate, 0.0);
        assert!(dashboard.operators.is_empty());
        assert_eq!(dashboard.ranking.map(|r| r.len()), Some(0));
        assert_eq!(dashboard.hourly.iter().sum::<usize>(), 0);
    }
}
