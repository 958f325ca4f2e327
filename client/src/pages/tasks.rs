//! Task list page with the create form.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::components::task_form::TaskForm;
use crate::components::task_list::TaskList;
use crate::net::types::Task;
use crate::state::auth::Session;
#[cfg(feature = "hydrate")]
use crate::util::poll::replace_on_success;
use crate::util::poll::use_liveness;

/// Put a freshly created task at the top, replacing any stale copy.
pub fn insert_created(tasks: &mut Vec<Task>, created: Task) {
    tasks.retain(|task| task.id != created.id);
    tasks.insert(0, created);
}

#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <Protected>
            <Tasks/>
        </Protected>
    }
}

#[component]
fn Tasks() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let tasks = RwSignal::new(Vec::<Task>::new());
    let liveness = use_liveness();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(replace_on_success(
        "task list",
        crate::net::api::list_tasks(session.with_untracked(|s| s.token.clone())),
        tasks,
        liveness,
    ));
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, liveness);

    let on_created = Callback::new(move |task: Task| tasks.update(|list| insert_created(list, task)));

    view! {
        <div class="tasks-page">
            <h1 class="tasks-page__title">"Tasks"</h1>
            <div class="tasks-page__grid">
                <section class="panel">
                    <h2>"New Task"</h2>
                    <TaskForm on_created/>
                </section>
                <section class="panel">
                    <h2>"All Tasks"</h2>
                    <TaskList tasks/>
                </section>
            </div>
        </div>
    }
}
