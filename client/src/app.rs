//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, pending_approval::PendingApprovalPage,
    register::RegisterPage, tasks::TasksPage,
};
use crate::state::auth::Session;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `/config.js` is loaded before hydration so the runtime API override is in
/// place before the first request.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src="/config.js"></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, starts the session restore in the browser,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::auth::restore(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/taskdeck.css"/>
        <Title text="Task Manager"/>

        <Router>
            <Navigation/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("pending-approval") view=PendingApprovalPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("tasks") view=TasksPage/>
                </Routes>
            </main>
        </Router>
    }
}
