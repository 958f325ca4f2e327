//! Route wrapper that only renders its children for permitted sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages opt in by wrapping their content in `<Protected>`. The wrapped view
//! is not mounted until the guard says `Render`, so its polling and fetches
//! never start for a session that is about to be redirected.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::Session;
use crate::util::auth::{GuardDecision, Navigator, evaluate, guard};

/// `Navigator` backed by the Leptos router.
struct RouterNavigator<F> {
    path: String,
    navigate: F,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn redirect(&self, path: &str) {
        (self.navigate)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// Render `children` only once the session is restored, signed in and
/// approved (or already on the pending-approval page); redirect otherwise.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    Effect::new(move || {
        let navigator = RouterNavigator { path: pathname.get(), navigate: navigate.clone() };
        session.with(|current| {
            guard(current, &navigator);
        });
    });

    let allowed = Memo::new(move |_| session.with(|current| evaluate(current, &pathname.get())) == GuardDecision::Render);

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}
