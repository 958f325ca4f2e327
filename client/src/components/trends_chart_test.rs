use super::*;
use crate::net::types::{DailyCompletion, DailyCreation};

fn trends() -> TaskTrends {
    TaskTrends {
        daily_creation: vec![
            DailyCreation { day: "2024-02-01T00:00:00Z".to_owned(), created: 2 },
            DailyCreation { day: "2024-02-02T00:00:00Z".to_owned(), created: 4 },
        ],
        daily_completion: vec![
            DailyCompletion { day: "2024-02-01T00:00:00Z".to_owned(), completed: 0 },
            DailyCompletion { day: "2024-02-02T00:00:00Z".to_owned(), completed: 8 },
        ],
        ..TaskTrends::default()
    }
}

#[test]
fn both_series_share_one_scale() {
    let lines = chart_lines(&trends());
    assert_eq!(lines.max, 8);
    assert_eq!(lines.created, "0.0,180.0 600.0,120.0");
    assert_eq!(lines.completed, "0.0,240.0 600.0,0.0");
}

#[test]
fn labels_use_calendar_dates() {
    assert_eq!(chart_lines(&trends()).labels, ["2024-02-01", "2024-02-02"]);
}

#[test]
fn empty_trends_draw_nothing() {
    let lines = chart_lines(&TaskTrends::default());
    assert!(lines.labels.is_empty());
    assert!(lines.created.is_empty());
    assert_eq!(lines.max, 1);
}
