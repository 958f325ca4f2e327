//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Manage Your Tasks Effectively"</h1>
            <p class="home-page__lead">
                "A modern task management solution for individuals and teams. "
                "Stay organized, meet deadlines, and achieve your goals."
            </p>
            <div class="home-page__actions">
                <a class="btn btn--primary" href="/login">
                    "Get Started"
                </a>
                <a class="btn" href="/dashboard">
                    "View Demo"
                </a>
            </div>
        </div>
    }
}
