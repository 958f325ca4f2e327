use super::*;
use crate::net::types::{Priority, TaskStatus};

fn tasks(count: i64) -> Vec<Task> {
    (1..=count)
        .map(|id| Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Low,
            risk_level: None,
            due_date: None,
            is_overdue: false,
            intelligence_notes: String::new(),
        })
        .collect()
}

#[test]
fn limit_truncates_long_lists() {
    let all = tasks(8);
    let ids: Vec<i64> = visible(&all, Some(5)).iter().map(|t| t.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
}

#[test]
fn limit_larger_than_list_keeps_everything() {
    let all = tasks(3);
    assert_eq!(visible(&all, Some(10)).len(), 3);
    assert_eq!(visible(&all, None).len(), 3);
}

#[test]
fn empty_list_stays_empty() {
    assert!(visible(&[], Some(5)).is_empty());
}
