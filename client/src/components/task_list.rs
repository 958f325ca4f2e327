//! Task list with an optional row limit.

#[cfg(test)]
#[path = "task_list_test.rs"]
mod task_list_test;

use leptos::prelude::*;

use crate::components::task_item::TaskItem;
use crate::net::types::Task;

/// The first `limit` tasks, or all of them without a limit.
pub fn visible(tasks: &[Task], limit: Option<usize>) -> &[Task] {
    match limit {
        Some(limit) => &tasks[..limit.min(tasks.len())],
        None => tasks,
    }
}

#[component]
pub fn TaskList(#[prop(into)] tasks: Signal<Vec<Task>>, #[prop(optional)] limit: Option<usize>) -> impl IntoView {
    view! {
        {move || {
            let shown = tasks.with(|all| visible(all, limit).to_vec());
            if shown.is_empty() {
                view! { <p class="task-list__empty">"No tasks found"</p> }.into_any()
            } else {
                view! {
                    <ul class="task-list">
                        {shown.into_iter().map(|task| view! { <TaskItem task/> }).collect_view()}
                    </ul>
                }
                    .into_any()
            }
        }}
    }
}
