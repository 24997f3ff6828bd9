//! # Callsight - Call-center analytics engine
//!
//! A pure, synchronous aggregation pipeline that turns raw call-detail
//! records into the data a call-center dashboard displays.
//!
//! ## Features
//!
//! - **Record Normalization**: Accepts object- and positional-row record
//!   shapes from the upstream source and produces one canonical record type
//! - **Period Resolution**: Named reporting periods (last 7/15 days, current,
//!   previous and penultimate month, custom ranges) resolved to inclusive
//!   date ranges
//! - **Company Metrics**: Outcome counts, answer/abandonment rates, rating
//!   averages, and duration averages with zero-inflation handling
//! - **Operator Metrics**: The same metrics grouped per operator, plus a
//!   combined rating score
//! - **Leaderboard**: Deterministic call-volume ranking with a configurable
//!   bound
//! - **Trend Analysis**: Period-over-period comparison with favorable
//!   direction awareness for time-like metrics
//!
//! ## Usage
//!
//! ```rust,no_run
//! use callsight::libs::config::AnalyticsConfig;
//! use callsight::libs::dashboard;
//! use callsight::libs::period;
//! use callsight::libs::record;
//! use chrono::NaiveDate;
//!
//! let raw = serde_json::json!([
//!     { "date": "15/03/2025", "operator": "Ana Souza", "callOutcome": "Atendida" }
//! ]);
//! let records = record::parse_records(&raw);
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
//! let selection = period::resolve(Some("currentMonth"), None, None, today);
//!
//! let config = AnalyticsConfig::default();
//! let dashboard = dashboard::build_dashboard(&records, &selection, false, &config);
//! println!("{} chamadas", dashboard.summary.total_calls);
//! ```

pub mod libs;
