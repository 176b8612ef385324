//! Record builders. Metrics not under test are set to 0.0 so rows compare
//! equal with `==`.

use chrono::NaiveDate;
use rankboard_common::{Metric, PerformanceEntry, Period, Project, ProjectStatus, Row};

pub fn row(id: u32, name: &str, team: &str, period: Period) -> Row {
    Row {
        interviewer_id: id,
        name: name.to_string(),
        team: team.to_string(),
        completed: 0.0,
        conversion_rate: 0.0,
        avg_duration: 0.0,
        qa_score: 0.0,
        period,
    }
}

/// Team A, MONTH row named `row-<id>` whose `metric` reads `value`.
pub fn row_with_value(metric: Metric, id: u32, value: f64) -> Row {
    let mut r = row(id, &format!("row-{}", id), "A", Period::Month);
    match metric {
        Metric::Completed => r.completed = value,
        Metric::ConversionRate => r.conversion_rate = value,
        Metric::QaScore => r.qa_score = value,
        Metric::AvgDuration => r.avg_duration = value,
    }
    r
}

/// Ids run from 1 in slice order.
pub fn rows_with_values(metric: Metric, values: &[f64]) -> Vec<Row> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| row_with_value(metric, i as u32 + 1, v))
        .collect()
}

pub fn cohort(entries: &[(&str, f64)]) -> Vec<PerformanceEntry> {
    entries
        .iter()
        .map(|&(name, avg)| PerformanceEntry::new(name, avg))
        .collect()
}

pub fn project(id: u32, name: &str, members: &[&str], status: ProjectStatus) -> Project {
    Project {
        id,
        name: name.to_string(),
        created: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid fixture date"),
        members: members.iter().map(|m| m.to_string()).collect(),
        progress: 50,
        status,
    }
}
