use super::*;

#[test]
fn default_starts_loading_without_data() {
    let state = FetchState::<u32>::default();
    assert!(state.loading);
    assert_eq!(state.data, None);
    assert_eq!(state.error, None);
}

#[test]
fn resolve_stores_payload_and_clears_error() {
    let mut state = FetchState::<u32>::default();
    state.fail("boom");
    state.resolve(7);
    assert_eq!(state, FetchState { data: Some(7), loading: false, error: None });
}

#[test]
fn fail_keeps_previous_payload() {
    let mut state = FetchState::<u32>::default();
    state.resolve(3);
    state.fail("Failed to load dashboard data");
    assert_eq!(state.data, Some(3));
    assert_eq!(state.error.as_deref(), Some("Failed to load dashboard data"));
    assert!(!state.loading);
}
