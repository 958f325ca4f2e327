//! Single row of a task list.

use leptos::prelude::*;

use crate::net::types::{Task, TaskStatus};
use crate::util::format::{due_date_label, risk_label};

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let done = task.status == TaskStatus::Done;
    let overdue = task.is_overdue;
    let due = due_date_label(task.due_date.as_deref());
    let notes = task.intelligence_notes.trim().to_owned();
    let has_notes = !notes.is_empty();

    view! {
        <li class="task-item" class:task-item--done=done class:task-item--overdue=overdue>
            <div class="task-item__main">
                <span class="task-item__title">{task.title}</span>
                <span class="task-item__status">{task.status.label()}</span>
            </div>
            <div class="task-item__meta">
                <span class="task-item__priority">{task.priority.label()}</span>
                <span class="task-item__risk">{format!("Risk: {}", risk_label(task.risk_level))}</span>
                <span class="task-item__due">{due}</span>
                <Show when=move || overdue>
                    <span class="task-item__overdue">"Overdue"</span>
                </Show>
            </div>
            <Show when=move || has_notes>
                <p class="task-item__notes">{notes.clone()}</p>
            </Show>
        </li>
    }
}
