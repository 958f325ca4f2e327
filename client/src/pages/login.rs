//! Login page: username + password against the token endpoint.
//!
//! After a successful sign-in the user is sent to the `redirect` query target
//! left by the route guard, or to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::Session;
use crate::util::auth::redirect_target;
use crate::util::forms;

pub const LOGIN_FAILURE: &str = "Invalid credentials";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let signed_in_target = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(target) = signed_in_target.get() {
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match forms::credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        let target = redirect_target(query.with_untracked(|q| q.get("redirect")).as_deref());
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::state::auth::sign_in(session, credentials).await {
                Ok(()) => signed_in_target.set(Some(target)),
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    error.set(Some(LOGIN_FAILURE.to_owned()));
                    password.set(String::new());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, target, session);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign in to your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.with(Option::is_some)>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
