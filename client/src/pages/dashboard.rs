//! Analytics dashboard with overview, analytics and insights views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page sits behind `Protected`, so nothing below mounts until the session
//! is signed in and approved. Once mounted it polls the summary every two
//! minutes; the trends chart runs its own slower poll. Switching views only
//! swaps the panel and leaves the summary poll running.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::components::distribution::{DistributionBars, distribution_rows, priority_rows};
use crate::components::protected::Protected;
use crate::components::search_filter_panel::SearchFilterPanel;
use crate::components::task_list::TaskList;
use crate::components::trends_chart::TrendsChart;
use crate::net::api;
use crate::net::types::{DashboardSummary, Task, TaskFilter};
use crate::state::auth::Session;
use crate::state::fetch::FetchState;
use crate::state::ui::DashboardView;
#[cfg(feature = "hydrate")]
use crate::util::filter::apply_filter;
use crate::util::format::{capitalize, completion_rate};
#[cfg(feature = "hydrate")]
use crate::util::poll::replace_on_success;
use crate::util::poll::{SUMMARY_PERIOD, use_liveness, use_polling};

pub const SUMMARY_FAILURE: &str = "Failed to load dashboard data";
pub const RECENT_LIMIT: usize = 5;
pub const INSIGHTS_LIMIT: usize = 10;

type SummaryState = RwSignal<FetchState<DashboardSummary>>;

/// Sidebar completion rate, once a summary has loaded.
pub fn quick_stat(summary: Option<&DashboardSummary>) -> Option<String> {
    let summary = summary?;
    Some(match completion_rate(summary.completed_tasks, summary.total_tasks) {
        Some(rate) => format!("{rate}%"),
        None => "N/A".to_owned(),
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Protected>
            <Dashboard/>
        </Protected>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let selected = RwSignal::new(DashboardView::default());
    let summary: SummaryState = RwSignal::new(FetchState::default());
    let recent = RwSignal::new(Vec::<Task>::new());
    let filtered = RwSignal::new(Vec::<Task>::new());
    let liveness = use_liveness();
    let token = move || session.with_untracked(|s| s.token.clone());

    use_polling(
        "dashboard summary",
        SUMMARY_FAILURE,
        SUMMARY_PERIOD,
        move || api::fetch_dashboard_summary(token()),
        summary,
    );

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(replace_on_success("recent tasks", api::list_tasks(token()), recent, liveness.clone()));

    let on_filter_change = Callback::new(move |filter: TaskFilter| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(apply_filter(
            move |f| api::search_tasks(token(), f),
            filter,
            filtered,
            liveness.clone(),
        ));
        #[cfg(not(feature = "hydrate"))]
        let _ = (filter, &liveness);
    });

    let content = move || match selected.get() {
        DashboardView::Overview => view! { <Overview summary recent/> }.into_any(),
        DashboardView::Analytics => view! { <Analytics summary/> }.into_any(),
        DashboardView::Insights => view! { <Insights on_filter_change filtered/> }.into_any(),
    };

    view! {
        <div class="dashboard-page">
            <aside class="dashboard-page__sidebar">
                <h2 class="dashboard-page__sidebar-title">"Dashboard Views"</h2>
                <nav class="dashboard-page__views">
                    {DashboardView::ALL
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <button
                                    class="dashboard-page__view"
                                    class:dashboard-page__view--active=move || selected.get() == mode
                                    on:click=move |_| selected.set(mode)
                                >
                                    {capitalize(mode.key())}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                {move || {
                    summary
                        .with(|s| quick_stat(s.data.as_ref()))
                        .map(|rate| {
                            view! {
                                <div class="dashboard-page__quick-stats">
                                    <h3>"QUICK STATS"</h3>
                                    <span class="dashboard-page__quick-label">"Completion Rate"</span>
                                    <span class="dashboard-page__quick-value">{rate}</span>
                                </div>
                            }
                        })
                }}
            </aside>
            <div class="dashboard-page__main">
                <header class="dashboard-page__header">
                    <h1>"TASK INTELLIGENCE DASHBOARD"</h1>
                    <p>"Real-time analytics and insights for your task management"</p>
                </header>
                <Show when=move || summary.with(|s| s.loading && s.data.is_none())>
                    <p class="dashboard-page__loading">"Loading dashboard data..."</p>
                </Show>
                <Show when=move || summary.with(|s| s.error.is_some())>
                    <p class="dashboard-page__error">{move || summary.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                {content}
            </div>
        </div>
    }
}

#[component]
fn StatCard(title: &'static str, caption: &'static str, value: Signal<u64>, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{tone}")>
            <h3 class="stat-card__title">{title}</h3>
            <div class="stat-card__value">{move || value.get()}</div>
            <div class="stat-card__caption">{caption}</div>
        </div>
    }
}

#[component]
fn Overview(summary: SummaryState, recent: RwSignal<Vec<Task>>) -> impl IntoView {
    let count = move |pick: fn(&DashboardSummary) -> u64| {
        Signal::derive(move || summary.with(|s| s.data.as_ref().map_or(0, pick)))
    };

    view! {
        <div class="dashboard-page__cards">
            <StatCard title="Total Tasks" caption="Active projects" tone="total" value=count(|d| d.total_tasks)/>
            <StatCard title="Completed" caption="Tasks finished" tone="done" value=count(|d| d.completed_tasks)/>
            <StatCard title="Overdue" caption="Require attention" tone="overdue" value=count(|d| d.overdue_tasks)/>
        </div>
        <TrendsChart/>
        <div class="dashboard-page__grid">
            <section class="panel">
                <div class="panel__header">
                    <h2>"Recent Tasks"</h2>
                    <a class="panel__link" href="/tasks">
                        "View All →"
                    </a>
                </div>
                <TaskList tasks=recent limit=RECENT_LIMIT/>
            </section>
            <section class="panel">
                <h2>"Task Priority Distribution"</h2>
                {move || {
                    let rows = summary.with(|s| s.data.as_ref().map(priority_rows).unwrap_or_default());
                    view! { <DistributionBars rows count_suffix=" tasks"/> }
                }}
            </section>
        </div>
    }
}

#[component]
fn Analytics(summary: SummaryState) -> impl IntoView {
    let rows = move |pick: fn(&DashboardSummary) -> &BTreeMap<String, u64>| {
        summary.with(|s| s.data.as_ref().map(|d| distribution_rows(pick(d), d.total_tasks)).unwrap_or_default())
    };

    view! {
        <div class="dashboard-page__grid">
            <section class="panel">
                <h2>"Risk Level Distribution"</h2>
                {move || view! { <DistributionBars rows=rows(|d| &d.risk_distribution)/> }}
            </section>
            <section class="panel">
                <h2>"Status Distribution"</h2>
                {move || view! { <DistributionBars rows=rows(|d| &d.status_distribution)/> }}
            </section>
        </div>
        <TrendsChart/>
    }
}

#[component]
fn Insights(on_filter_change: Callback<TaskFilter>, filtered: RwSignal<Vec<Task>>) -> impl IntoView {
    view! {
        <SearchFilterPanel on_change=on_filter_change/>
        <section class="panel">
            <h2>"Filtered Results"</h2>
            <TaskList tasks=filtered limit=INSIGHTS_LIMIT/>
        </section>
    }
}
