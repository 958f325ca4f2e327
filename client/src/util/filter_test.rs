use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use futures::future::ready;

use super::*;
use crate::net::types::{Priority, TaskStatus};

fn task(id: i64, title: &str) -> Task {
    Task {
        id,
        title: title.to_owned(),
        description: String::new(),
        status: TaskStatus::Todo,
        priority: Priority::High,
        risk_level: Some(3),
        due_date: None,
        is_overdue: false,
        intelligence_notes: String::new(),
    }
}

// =============================================================
// Editing
// =============================================================

#[test]
fn toggle_adds_then_removes_value() {
    let mut filter = TaskFilter::default();
    toggle(&mut filter, FilterField::Priority, "HIGH");
    toggle(&mut filter, FilterField::Priority, "LOW");
    assert_eq!(filter.priority, vec!["HIGH".to_owned(), "LOW".to_owned()]);
    assert!(is_selected(&filter, FilterField::Priority, "LOW"));

    toggle(&mut filter, FilterField::Priority, "HIGH");
    assert_eq!(filter.priority, vec!["LOW".to_owned()]);
    assert!(!is_selected(&filter, FilterField::Priority, "HIGH"));
}

#[test]
fn groups_toggle_independently() {
    let mut filter = TaskFilter::default();
    toggle(&mut filter, FilterField::RiskLevel, "HIGH");
    toggle(&mut filter, FilterField::Status, "IN_PROGRESS");
    assert!(filter.priority.is_empty());
    assert_eq!(filter.risk_level, vec!["HIGH".to_owned()]);
    assert_eq!(filter.status, vec!["IN_PROGRESS".to_owned()]);
}

#[test]
fn date_window_is_dropped_once_both_ends_clear() {
    let mut filter = TaskFilter::default();
    set_date(&mut filter, DateBound::Start, "2024-03-01");
    set_date(&mut filter, DateBound::End, "2024-03-31");
    assert_eq!(date_value(&filter, DateBound::End), "2024-03-31");

    set_date(&mut filter, DateBound::Start, "");
    assert_eq!(filter.due_date, Some(DateRange { start: None, end: Some("2024-03-31".to_owned()) }));

    set_date(&mut filter, DateBound::End, "  ");
    assert_eq!(filter.due_date, None);
    assert_eq!(date_value(&filter, DateBound::Start), "");
}

#[test]
fn field_options_match_panel_groups() {
    assert_eq!(FilterField::Priority.options(), ["HIGH", "MEDIUM", "LOW"]);
    assert_eq!(FilterField::RiskLevel.options(), ["HIGH", "MEDIUM", "LOW"]);
    assert_eq!(FilterField::Status.options(), ["TODO", "IN_PROGRESS", "DONE"]);
}

// =============================================================
// Search
// =============================================================

#[test]
fn apply_filter_sends_exact_filter_and_replaces_results() {
    let filter = TaskFilter {
        priority: vec!["HIGH".to_owned()],
        status: vec!["TODO".to_owned()],
        ..TaskFilter::default()
    };
    let results = Rc::new(RefCell::new(vec![task(1, "old")]));
    let seen = RefCell::new(None);

    block_on(apply_filter(
        |sent| {
            *seen.borrow_mut() = Some(sent);
            ready(Ok(vec![task(2, "urgent"), task(3, "blocker")]))
        },
        filter.clone(),
        results.clone(),
        Liveness::new(),
    ));

    assert_eq!(seen.into_inner(), Some(filter));
    let ids: Vec<i64> = results.borrow().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn failed_search_leaves_results_unchanged() {
    let results = Rc::new(RefCell::new(vec![task(1, "kept")]));

    block_on(apply_filter(
        |_| ready(Err(ApiError::Network("offline".to_owned()))),
        TaskFilter::default(),
        results.clone(),
        Liveness::new(),
    ));

    assert_eq!(*results.borrow(), vec![task(1, "kept")]);
}
