use super::*;
use crate::net::types::DateRange;

#[test]
fn build_url_with_base_joins_without_double_slash() {
    assert_eq!(
        build_url_with_base("http://localhost:8000/", "/dashboard/summary/"),
        "http://localhost:8000/dashboard/summary/"
    );
    assert_eq!(build_url_with_base("  ", "/tasks/"), "/tasks/");
}

#[test]
fn authorization_value_uses_token_scheme() {
    assert_eq!(authorization_value(&AuthToken::new("abc")), "Token abc");
}

#[test]
fn search_query_repeats_multi_select_keys() {
    let filter = TaskFilter {
        priority: vec!["HIGH".to_owned(), "LOW".to_owned()],
        status: vec!["TODO".to_owned()],
        ..TaskFilter::default()
    };
    assert_eq!(search_query(&filter), "priority=HIGH&priority=LOW&status=TODO");
}

#[test]
fn search_query_encodes_search_and_date_range() {
    let filter = TaskFilter {
        risk_level: vec!["MEDIUM".to_owned()],
        search: "  quarterly report ".to_owned(),
        due_date: Some(DateRange { start: Some("2024-02-01".to_owned()), end: None }),
        ..TaskFilter::default()
    };
    assert_eq!(
        search_query(&filter),
        "riskLevel=MEDIUM&search=quarterly+report&dueDate%5Bstart%5D=2024-02-01"
    );
}

#[test]
fn search_path_omits_question_mark_for_empty_filter() {
    assert_eq!(search_path(&TaskFilter::default()), "/tasks/search/");
    let filter = TaskFilter { search: "   ".to_owned(), ..TaskFilter::default() };
    assert_eq!(search_path(&filter), "/tasks/search/");
}

#[test]
fn search_path_appends_query() {
    let filter = TaskFilter { priority: vec!["HIGH".to_owned()], ..TaskFilter::default() };
    assert_eq!(search_path(&filter), "/tasks/search/?priority=HIGH");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_report_unavailable() {
    let result = futures::executor::block_on(fetch_dashboard_summary(None));
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(search_tasks(Some(AuthToken::new("t")), TaskFilter::default()));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn unauthorized_statuses_are_detected() {
    assert!(ApiError::Status(401).is_unauthorized());
    assert!(ApiError::Status(403).is_unauthorized());
    assert!(!ApiError::Status(500).is_unauthorized());
    assert!(!ApiError::Network("reset".to_owned()).is_unauthorized());
}
