//! Holding page for signed-in accounts an administrator has not approved.
//!
//! The page is not behind `Protected`: it applies its own redirects so a
//! signed-out visitor goes to login and an approved user moves on.

#[cfg(test)]
#[path = "pending_approval_test.rs"]
mod pending_approval_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::Session;
use crate::util::auth::{DEFAULT_AFTER_LOGIN, LOGIN_PATH};

/// Where this page sends the session, if anywhere.
pub fn pending_redirect(session: &Session) -> Option<&'static str> {
    if session.loading {
        None
    } else if !session.is_authenticated() {
        Some(LOGIN_PATH)
    } else if session.is_approved() {
        Some(DEFAULT_AFTER_LOGIN)
    } else {
        None
    }
}

#[component]
pub fn PendingApprovalPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = session.with(pending_redirect) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Account Pending Approval"</h2>
                <p>"Your account is currently pending approval from an administrator."</p>
                <p>"You will be able to access the full features of the application once your account is approved."</p>
                <p class="auth-card__hint">"Please check back later or contact support if you have any questions."</p>
            </div>
        </div>
    }
}
