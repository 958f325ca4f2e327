//! Top navigation bar.
//!
//! Page links appear only for approved users; the right side shows either the
//! signed-in user with a logout button or login/register links.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::{Session, sign_out};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const APPROVED_LINKS: [NavLink; 2] = [
    NavLink { href: "/dashboard", label: "Dashboard" },
    NavLink { href: "/tasks", label: "Tasks" },
];

pub fn nav_links(session: &Session) -> &'static [NavLink] {
    if session.is_approved() { &APPROVED_LINKS } else { &[] }
}

/// "Welcome, <name>" for a signed-in session.
pub fn welcome_label(session: &Session) -> Option<String> {
    session.current_user().map(|user| format!("Welcome, {}", user.display_name()))
}

#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        sign_out(session);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="nav">
            <a class="nav__brand" href="/">
                "Task Manager"
            </a>
            <div class="nav__links">
                {move || {
                    session
                        .with(nav_links)
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="nav__link"
                                    class:nav__link--active=move || pathname.get() == link.href
                                    href=link.href
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="nav__session">
                <Show
                    when=move || session.with(Session::is_authenticated)
                    fallback=|| {
                        view! {
                            <a class="nav__link" href="/login">
                                "Login"
                            </a>
                            <a class="nav__link nav__link--primary" href="/register">
                                "Register"
                            </a>
                        }
                    }
                >
                    <span class="nav__welcome">{move || session.with(welcome_label).unwrap_or_default()}</span>
                    <button class="btn nav__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
