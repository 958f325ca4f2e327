//! Account registration page. New accounts wait for administrator approval.

use leptos::prelude::*;

use crate::net::types::Registration;
use crate::util::forms;

pub const REGISTER_FAILURE: &str = "Registration failed. Please try again.";
pub const REGISTER_SUCCESS: &str = "Account created. An administrator must approve it before you can sign in.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(Registration::default());
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match form.with_untracked(forms::registration) {
            Ok(registration) => registration,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(registration).await {
                Ok(()) => {
                    form.set(Registration::default());
                    done.set(true);
                }
                Err(err) => {
                    leptos::logging::warn!("registration failed: {err}");
                    error.set(Some(REGISTER_FAILURE.to_owned()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            busy.set(false);
        }
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&Registration) -> &String, set: fn(&mut Registration, String)| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=label
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create an account"</h1>
                <Show
                    when=move || done.get()
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_submit>
                                {field("Username", "text", |f| &f.username, |f, v| f.username = v)}
                                {field("Email", "email", |f| &f.email, |f, v| f.email = v)}
                                {field("First name", "text", |f| &f.first_name, |f, v| f.first_name = v)}
                                {field("Last name", "text", |f| &f.last_name, |f, v| f.last_name = v)}
                                {field("Password", "password", |f| &f.password, |f, v| f.password = v)}
                                {field("Confirm password", "password", |f| &f.confirm_password, |f, v| f.confirm_password = v)}
                                <Show when=move || error.with(Option::is_some)>
                                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                                </Show>
                                <button class="btn auth-form__submit" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Registering..." } else { "Register" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="auth-card__notice">{REGISTER_SUCCESS}</p>
                    <a class="btn" href="/login">
                        "Go to login"
                    </a>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
