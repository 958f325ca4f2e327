#![cfg(feature = "ssr")]

use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

use super::*;
use crate::net::types::{AuthToken, UserProfile};

const CONTENT: &str = "protected-content";

fn signed_in(is_approved: bool) -> Session {
    Session::signed_in(AuthToken::new("tok"), UserProfile { id: 1, is_approved, ..UserProfile::default() })
}

/// Server-render `<Protected>` at `path` for `session`.
fn render_at(path: &str, session: Session) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new(path));
        provide_context(RwSignal::new(session));
        view! {
            <Router>
                <Protected>
                    <p>{CONTENT}</p>
                </Protected>
            </Router>
        }
        .to_html()
    })
}

#[test]
fn restoring_session_renders_nothing() {
    let mut session = signed_in(true);
    session.loading = true;
    assert!(!render_at("/dashboard", session).contains(CONTENT));
    assert!(!render_at("/dashboard", Session::default()).contains(CONTENT));
}

#[test]
fn anonymous_session_renders_nothing() {
    assert!(!render_at("/dashboard", Session::anonymous()).contains(CONTENT));
}

#[test]
fn unapproved_user_sees_nothing_outside_pending_page() {
    assert!(!render_at("/dashboard", signed_in(false)).contains(CONTENT));
}

#[test]
fn unapproved_user_sees_pending_page() {
    assert!(render_at("/pending-approval", signed_in(false)).contains(CONTENT));
}

#[test]
fn approved_user_sees_children() {
    assert!(render_at("/dashboard", signed_in(true)).contains(CONTENT));
}

#[test]
fn render_after_sign_in_shows_children() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(Session::default());
        provide_context(RequestUrl::new("/tasks"));
        provide_context(session);
        let render = move || {
            view! {
                <Router>
                    <Protected>
                        <p>{CONTENT}</p>
                    </Protected>
                </Router>
            }
            .to_html()
        };
        assert!(!render().contains(CONTENT));
        session.set(signed_in(true));
        assert!(render().contains(CONTENT));
    });
}
