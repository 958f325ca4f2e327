//! Route access decisions for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same three checks against the session:
//! still restoring, signed out, or signed in but unapproved. The decision is a
//! pure function so it can be tested without a router; `Protected` wires it to
//! the Leptos location and navigate hooks.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use url::form_urlencoded;

use crate::state::auth::Session;

pub const LOGIN_PATH: &str = "/login";
pub const PENDING_APPROVAL_PATH: &str = "/pending-approval";
pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

/// What a protected route should do for the current session and path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Not enough is known yet; render nothing and stay put.
    Wait,
    /// Render nothing and navigate elsewhere.
    Redirect(String),
    /// Render the wrapped page.
    Render,
}

/// Navigation service the guard redirects through.
pub trait Navigator {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str);
}

/// Decide how a protected page at `path` is handled for `session`.
pub fn evaluate(session: &Session, path: &str) -> GuardDecision {
    if session.loading {
        return GuardDecision::Wait;
    }
    if !session.is_authenticated() {
        return GuardDecision::Redirect(login_redirect(path));
    }
    let Some(user) = session.current_user() else {
        // Token without profile: the restore has not published a user yet.
        return GuardDecision::Wait;
    };
    if !user.is_approved && path != PENDING_APPROVAL_PATH {
        return GuardDecision::Redirect(PENDING_APPROVAL_PATH.to_owned());
    }
    GuardDecision::Render
}

/// Apply the decision through `navigator`. Returns whether the page may render.
pub fn guard(session: &Session, navigator: &impl Navigator) -> bool {
    match evaluate(session, &navigator.current_path()) {
        GuardDecision::Render => true,
        GuardDecision::Wait => false,
        GuardDecision::Redirect(target) => {
            navigator.redirect(&target);
            false
        }
    }
}

/// Login location that returns to `path` after a successful sign-in.
pub fn login_redirect(path: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(path.as_bytes()).collect();
    format!("{LOGIN_PATH}?redirect={encoded}")
}

/// Where to go after login. Only same-origin absolute paths are honoured.
pub fn redirect_target(requested: Option<&str>) -> String {
    match requested.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") => path.to_owned(),
        _ => DEFAULT_AFTER_LOGIN.to_owned(),
    }
}
