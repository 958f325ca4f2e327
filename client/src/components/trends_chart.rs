//! Task activity trends: created vs completed per day, plus delay metrics.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chart polls `GET /dashboard/trends/` on its own five-minute timer,
//! independent of the dashboard summary. It draws two SVG polylines on a
//! shared vertical scale.

#[cfg(test)]
#[path = "trends_chart_test.rs"]
mod trends_chart_test;

use leptos::prelude::*;

use crate::net::types::TaskTrends;
use crate::state::auth::Session;
use crate::state::fetch::FetchState;
use crate::util::format::{average_delay_days, date_part, polyline_points, series_max};
use crate::util::poll::{TRENDS_PERIOD, use_polling};

pub const TRENDS_FAILURE: &str = "Failed to load trend data";

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;

/// Geometry for one render of the chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartLines {
    pub labels: Vec<String>,
    pub created: String,
    pub completed: String,
    pub max: u64,
}

pub fn chart_lines(trends: &TaskTrends) -> ChartLines {
    let created: Vec<u64> = trends.daily_creation.iter().map(|d| d.created).collect();
    let completed: Vec<u64> = trends.daily_completion.iter().map(|d| d.completed).collect();
    let max = series_max([created.as_slice(), completed.as_slice()]);
    ChartLines {
        labels: trends.daily_creation.iter().map(|d| date_part(&d.day).to_owned()).collect(),
        created: polyline_points(&created, CHART_WIDTH, CHART_HEIGHT, max),
        completed: polyline_points(&completed, CHART_WIDTH, CHART_HEIGHT, max),
        max,
    }
}

#[component]
pub fn TrendsChart() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let state = RwSignal::new(FetchState::<TaskTrends>::default());
    use_polling(
        "trends",
        TRENDS_FAILURE,
        TRENDS_PERIOD,
        move || crate::net::api::fetch_dashboard_trends(session.with_untracked(|s| s.token.clone())),
        state,
    );

    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    view! {
        <section class="trends-chart">
            <h2 class="trends-chart__title">"Task Activity Trends"</h2>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="trends-chart__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            {move || {
                let current = state.get();
                match current.data {
                    None if current.loading => view! { <p class="trends-chart__loading">"Loading trends data..."</p> }.into_any(),
                    None => ().into_any(),
                    Some(trends) => {
                        let lines = chart_lines(&trends);
                        let first = lines.labels.first().cloned().unwrap_or_default();
                        let last = lines.labels.last().cloned().unwrap_or_default();
                        view! {
                            <svg class="trends-chart__plot" viewBox=view_box.clone() preserveAspectRatio="none">
                                <polyline class="trends-chart__line trends-chart__line--created" points=lines.created></polyline>
                                <polyline class="trends-chart__line trends-chart__line--completed" points=lines.completed></polyline>
                            </svg>
                            <div class="trends-chart__axis">
                                <span>{first}</span>
                                <span>{format!("max {}", lines.max)}</span>
                                <span>{last}</span>
                            </div>
                            <div class="trends-chart__legend">
                                <span class="trends-chart__key trends-chart__key--created">"Tasks Created"</span>
                                <span class="trends-chart__key trends-chart__key--completed">"Tasks Completed"</span>
                            </div>
                            <div class="trends-chart__metrics">
                                <span>{format!("Average Delay: {}", average_delay_days(trends.delay_metrics.average_delay))}</span>
                                <span>{format!("Delayed Tasks: {}", trends.delay_metrics.total_delayed_tasks)}</span>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </section>
    }
}
