use super::*;
use crate::net::types::PriorityBreakdown;

fn summary() -> DashboardSummary {
    DashboardSummary {
        total_tasks: 10,
        completed_tasks: 4,
        overdue_tasks: 1,
        tasks_by_priority: PriorityBreakdown { high: 5, medium: 3, low: 2 },
        risk_distribution: BTreeMap::from([("HIGH".to_owned(), 1), ("LOW".to_owned(), 9)]),
        status_distribution: BTreeMap::from([("IN_PROGRESS".to_owned(), 6), ("DONE".to_owned(), 4)]),
    }
}

#[test]
fn priority_rows_follow_high_medium_low() {
    let rows = priority_rows(&summary());
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["High Priority", "Medium Priority", "Low Priority"]);
    assert!((rows[0].percent - 50.0).abs() < f64::EPSILON);
    assert_eq!(rows[2].count, 2);
}

#[test]
fn distribution_rows_humanize_status_keys() {
    let summary = summary();
    let rows = distribution_rows(&summary.status_distribution, summary.total_tasks);
    assert_eq!(rows[0].label, "DONE");
    assert_eq!(rows[1].label, "IN PROGRESS");
    assert_eq!(rows[1].key, "in_progress");
    assert!((rows[1].percent - 60.0).abs() < f64::EPSILON);
}

#[test]
fn empty_summary_has_zero_width_bars() {
    let rows = priority_rows(&DashboardSummary::default());
    assert!(rows.iter().all(|r| r.count == 0 && r.percent.abs() < f64::EPSILON));
}
