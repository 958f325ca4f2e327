//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is provided once as `RwSignal<Session>` context. Route guards
//! and the navigation bar only read it; the restore, login and logout flows
//! below are the only writers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{AuthToken, Credentials, UserProfile};
use crate::util::storage;

/// Authentication state: the signed-in user, their token, and whether the
/// start-up restore is still running.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<AuthToken>,
    pub loading: bool,
}

/// Starts in the restoring state so nothing protected renders before the
/// persisted token has been checked.
impl Default for Session {
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None, token: None, loading: false }
    }

    pub fn signed_in(token: AuthToken, user: UserProfile) -> Self {
        Self { user: Some(user), token: Some(token), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The user, but only while a token is held.
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.token.as_ref().and(self.user.as_ref())
    }

    pub fn is_approved(&self) -> bool {
        self.current_user().is_some_and(|user| user.is_approved)
    }
}

/// Result of checking a persisted token at start-up.
#[derive(Debug, PartialEq)]
pub struct RestoreOutcome {
    pub session: Session,
    /// The stored token was rejected and should be removed.
    pub forget_token: bool,
}

/// Turn a stored token into a session by looking up its profile.
///
/// Transport failures end anonymous but keep the token for the next load;
/// only an unauthorized answer marks it for removal.
pub async fn restore_from<F, Fut>(stored: Option<AuthToken>, fetch_user: F) -> RestoreOutcome
where
    F: FnOnce(AuthToken) -> Fut,
    Fut: Future<Output = Result<UserProfile, ApiError>>,
{
    let Some(token) = stored else {
        return RestoreOutcome { session: Session::anonymous(), forget_token: false };
    };
    match fetch_user(token.clone()).await {
        Ok(user) => RestoreOutcome { session: Session::signed_in(token, user), forget_token: false },
        Err(err) => {
            leptos::logging::warn!("session restore failed: {err}");
            RestoreOutcome { session: Session::anonymous(), forget_token: err.is_unauthorized() }
        }
    }
}

/// Exchange credentials for a token, then load the matching profile.
///
/// # Errors
///
/// Returns the first failing call's error.
pub async fn sign_in_with<L, LFut, U, UFut>(credentials: Credentials, login: L, fetch_user: U) -> Result<Session, ApiError>
where
    L: FnOnce(Credentials) -> LFut,
    LFut: Future<Output = Result<AuthToken, ApiError>>,
    U: FnOnce(AuthToken) -> UFut,
    UFut: Future<Output = Result<UserProfile, ApiError>>,
{
    let token = login(credentials).await?;
    let user = fetch_user(token.clone()).await?;
    Ok(Session::signed_in(token, user))
}

/// Restore the session from localStorage and publish it.
pub async fn restore(session: RwSignal<Session>) {
    let outcome = restore_from(storage::load_token(), crate::net::api::fetch_current_user).await;
    if outcome.forget_token {
        storage::clear_token();
    }
    session.set(outcome.session);
}

/// Log in against the API, persist the token, and publish the session.
///
/// # Errors
///
/// Returns the API error when either the token exchange or profile lookup fails.
pub async fn sign_in(session: RwSignal<Session>, credentials: Credentials) -> Result<(), ApiError> {
    let next = sign_in_with(credentials, crate::net::api::login, crate::net::api::fetch_current_user).await?;
    if let Some(token) = next.token.as_ref() {
        storage::save_token(token);
    }
    session.set(next);
    Ok(())
}

/// Drop the token locally; the API token itself is left to expire server-side.
pub fn sign_out(session: RwSignal<Session>) {
    storage::clear_token();
    session.set(Session::anonymous());
}
