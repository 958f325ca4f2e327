//! Search and filter controls for the insights view.
//!
//! DESIGN
//! ======
//! The panel keeps its own `TaskFilter` and reports the complete record after
//! every edit, so the parent never has to merge partial changes.

use leptos::prelude::*;

use crate::net::types::TaskFilter;
use crate::util::filter::{DateBound, FilterField, date_value, is_selected, set_date, set_search, toggle};
use crate::util::format::status_label;

#[component]
pub fn SearchFilterPanel(on_change: Callback<TaskFilter>) -> impl IntoView {
    let filter = RwSignal::new(TaskFilter::default());

    let edit = move |apply: &dyn Fn(&mut TaskFilter)| {
        filter.update(apply);
        on_change.run(filter.get_untracked());
    };

    let chip_groups = FilterField::ALL
        .into_iter()
        .map(|field| {
            let chips = field
                .options()
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            type="button"
                            class="filter-chip"
                            class:filter-chip--active=move || filter.with(|f| is_selected(f, field, option))
                            on:click=move |_| edit(&|f: &mut TaskFilter| toggle(f, field, option))
                        >
                            {status_label(option)}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <div class="filter-panel__group">
                    <span class="filter-panel__label">{field.label()}</span>
                    <div class="filter-panel__chips">{chips}</div>
                </div>
            }
        })
        .collect_view();

    let date_input = move |bound: DateBound, id: &'static str, label: &'static str| {
        view! {
            <div class="filter-panel__date">
                <label class="filter-panel__label" for=id>
                    {label}
                </label>
                <input
                    id=id
                    class="filter-panel__input"
                    type="date"
                    prop:value=move || filter.with(|f| date_value(f, bound))
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|f: &mut TaskFilter| set_date(f, bound, &value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="filter-panel">
            <label class="filter-panel__label" for="filter-search">
                "Search Tasks"
            </label>
            <input
                id="filter-search"
                class="filter-panel__input"
                type="text"
                placeholder="Search by title or notes..."
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    edit(&|f: &mut TaskFilter| set_search(f, &text));
                }
            />
            {chip_groups}
            <div class="filter-panel__dates">
                {date_input(DateBound::Start, "filter-start", "Start Date")}
                {date_input(DateBound::End, "filter-end", "End Date")}
            </div>
        </div>
    }
}
