//! Create-task form.
//!
//! The form validates locally, posts the task assigned to the signed-in user,
//! and clears itself on success. On failure the entered values stay so the
//! user can retry.

use leptos::prelude::*;

use crate::net::types::Task;
use crate::state::auth::Session;
use crate::util::forms;

#[component]
pub fn TaskForm(on_created: Callback<Task>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(assignee_id) = session.with_untracked(|s| s.current_user().map(|user| user.id)) else {
            error.set(Some("Sign in to create tasks".to_owned()));
            return;
        };
        let body = match forms::new_task(
            &title.get_untracked(),
            &description.get_untracked(),
            &due_date.get_untracked(),
            assignee_id,
        ) {
            Ok(body) => body,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let token = session.with_untracked(|s| s.token.clone());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_task(token, body).await {
                Ok(task) => {
                    title.set(String::new());
                    description.set(String::new());
                    due_date.set(String::new());
                    on_created.run(task);
                }
                Err(err) => {
                    leptos::logging::warn!("task create failed: {err}");
                    error.set(Some(forms::create_failure_message(&err)));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, body, on_created);
            busy.set(false);
        }
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <label class="task-form__label" for="task-title">
                "Title"
            </label>
            <input
                id="task-title"
                class="task-form__input"
                type="text"
                required
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <label class="task-form__label" for="task-description">
                "Description"
            </label>
            <textarea
                id="task-description"
                class="task-form__input"
                rows="3"
                required
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <label class="task-form__label" for="task-due-date">
                "Due Date"
            </label>
            <input
                id="task-due-date"
                class="task-form__input"
                type="date"
                required
                prop:value=move || due_date.get()
                on:input=move |ev| due_date.set(event_target_value(&ev))
            />
            <Show when=move || error.with(Option::is_some)>
                <p class="task-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn task-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Creating..." } else { "Create Task" }}
            </button>
        </form>
    }
}
