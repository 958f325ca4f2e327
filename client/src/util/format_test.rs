use super::*;

#[test]
fn completion_rate_rounds_to_whole_percent() {
    assert_eq!(completion_rate(4, 10), Some(40));
    assert_eq!(completion_rate(1, 3), Some(33));
    assert_eq!(completion_rate(2, 3), Some(67));
}

#[test]
fn completion_rate_is_none_without_tasks() {
    assert_eq!(completion_rate(0, 0), None);
}

#[test]
fn share_percent_handles_zero_total_and_overflow() {
    assert!((share_percent(1, 4) - 25.0).abs() < f64::EPSILON);
    assert!(share_percent(3, 0).abs() < f64::EPSILON);
    assert!((share_percent(9, 4) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn labels_are_humanized() {
    assert_eq!(status_label("IN_PROGRESS"), "IN PROGRESS");
    assert_eq!(capitalize("insights"), "Insights");
    assert_eq!(capitalize(""), "");
    assert_eq!(risk_label(Some(5)), "Very High");
    assert_eq!(risk_label(None), "Unknown");
}

#[test]
fn average_delay_converts_seconds_to_days() {
    assert_eq!(average_delay_days(Some(172_800.0)), "2 days");
    assert_eq!(average_delay_days(Some(129_600.0)), "2 days");
    assert_eq!(average_delay_days(Some(0.0)), "N/A");
    assert_eq!(average_delay_days(None), "N/A");
}

#[test]
fn due_date_label_keeps_calendar_date() {
    assert_eq!(due_date_label(Some("2024-02-01T17:00:00Z")), "Due: 2024-02-01");
    assert_eq!(due_date_label(Some("2024-02-02")), "Due: 2024-02-02");
    assert_eq!(due_date_label(None), "No due date");
}

#[test]
fn polyline_spreads_points_and_scales_to_max() {
    assert_eq!(polyline_points(&[0, 5, 10], 100.0, 50.0, 10), "0.0,50.0 50.0,25.0 100.0,0.0");
}

#[test]
fn polyline_single_point_and_empty() {
    assert_eq!(polyline_points(&[4], 100.0, 50.0, 4), "0.0,0.0");
    assert_eq!(polyline_points(&[], 100.0, 50.0, 1), "");
}

#[test]
fn series_max_is_at_least_one() {
    let created = [1, 7, 3];
    let completed = [2, 4];
    assert_eq!(series_max([&created[..], &completed[..]]), 7);
    assert_eq!(series_max(std::iter::empty()), 1);
}
