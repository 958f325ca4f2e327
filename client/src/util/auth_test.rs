use std::cell::RefCell;

use super::*;
use crate::net::types::{AuthToken, UserProfile};

struct RecordingNavigator {
    path: String,
    redirects: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    fn at(path: &str) -> Self {
        Self { path: path.to_owned(), redirects: RefCell::new(Vec::new()) }
    }

    fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_owned());
    }
}

fn user(approved: bool) -> UserProfile {
    UserProfile { id: 7, username: "grace".to_owned(), is_approved: approved, ..UserProfile::default() }
}

fn signed_in(approved: bool) -> Session {
    Session::signed_in(AuthToken::new("tok"), user(approved))
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn loading_session_waits_regardless_of_contents() {
    for session in [
        Session::default(),
        Session { loading: true, ..signed_in(true) },
        Session { loading: true, ..signed_in(false) },
    ] {
        assert_eq!(evaluate(&session, "/dashboard"), GuardDecision::Wait);
    }
}

#[test]
fn token_without_profile_waits() {
    let session = Session { user: None, token: Some(AuthToken::new("tok")), loading: false };
    assert_eq!(evaluate(&session, "/tasks"), GuardDecision::Wait);
}

#[test]
fn user_without_token_is_sent_to_login() {
    let session = Session { user: Some(user(true)), token: None, loading: false };
    assert_eq!(evaluate(&session, "/tasks"), GuardDecision::Redirect("/login?redirect=%2Ftasks".to_owned()));
}

#[test]
fn approved_user_renders() {
    assert_eq!(evaluate(&signed_in(true), "/dashboard"), GuardDecision::Render);
}

// =============================================================
// guard
// =============================================================

#[test]
fn loading_guard_renders_nothing_and_never_redirects() {
    let nav = RecordingNavigator::at("/dashboard");
    assert!(!guard(&Session::default(), &nav));
    assert!(nav.redirects().is_empty());
}

#[test]
fn anonymous_guard_redirects_once_to_login_with_return_path() {
    let nav = RecordingNavigator::at("/dashboard");
    assert!(!guard(&Session::anonymous(), &nav));
    assert_eq!(nav.redirects(), vec!["/login?redirect=%2Fdashboard".to_owned()]);
}

#[test]
fn unapproved_guard_redirects_to_pending_approval() {
    let nav = RecordingNavigator::at("/dashboard");
    assert!(!guard(&signed_in(false), &nav));
    assert_eq!(nav.redirects(), vec![PENDING_APPROVAL_PATH.to_owned()]);
}

#[test]
fn unapproved_guard_on_pending_approval_renders_without_loop() {
    let nav = RecordingNavigator::at(PENDING_APPROVAL_PATH);
    assert!(guard(&signed_in(false), &nav));
    assert!(nav.redirects().is_empty());
}

#[test]
fn approved_guard_renders_without_redirect() {
    let nav = RecordingNavigator::at("/tasks");
    assert!(guard(&signed_in(true), &nav));
    assert!(nav.redirects().is_empty());
}

// =============================================================
// Redirect helpers
// =============================================================

#[test]
fn login_redirect_encodes_nested_paths() {
    assert_eq!(login_redirect("/tasks/12"), "/login?redirect=%2Ftasks%2F12");
}

#[test]
fn redirect_target_accepts_local_paths() {
    assert_eq!(redirect_target(Some("/tasks")), "/tasks");
    assert_eq!(redirect_target(Some(" /dashboard ")), "/dashboard");
}

#[test]
fn redirect_target_rejects_missing_and_foreign_targets() {
    assert_eq!(redirect_target(None), DEFAULT_AFTER_LOGIN);
    assert_eq!(redirect_target(Some("")), DEFAULT_AFTER_LOGIN);
    assert_eq!(redirect_target(Some("https://evil.example")), DEFAULT_AFTER_LOGIN);
    assert_eq!(redirect_target(Some("//evil.example")), DEFAULT_AFTER_LOGIN);
    assert_eq!(redirect_target(Some("/\\evil.example")), DEFAULT_AFTER_LOGIN);
}
