//! Horizontal bar rows for the priority, risk and status breakdowns.

#[cfg(test)]
#[path = "distribution_test.rs"]
mod distribution_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::net::types::DashboardSummary;
use crate::util::format::{capitalize, share_percent, status_label};

#[derive(Clone, Debug, PartialEq)]
pub struct DistributionRow {
    pub key: String,
    pub label: String,
    pub count: u64,
    /// Bar width relative to all tasks.
    pub percent: f64,
}

/// High / medium / low rows in that order.
pub fn priority_rows(summary: &DashboardSummary) -> Vec<DistributionRow> {
    summary
        .tasks_by_priority
        .entries()
        .into_iter()
        .map(|(key, count)| DistributionRow {
            key: key.to_owned(),
            label: format!("{} Priority", capitalize(key)),
            count,
            percent: share_percent(count, summary.total_tasks),
        })
        .collect()
}

/// One row per bucket of a server-provided distribution, in key order.
pub fn distribution_rows(buckets: &BTreeMap<String, u64>, total: u64) -> Vec<DistributionRow> {
    buckets
        .iter()
        .map(|(key, &count)| DistributionRow {
            key: key.to_lowercase(),
            label: status_label(key),
            count,
            percent: share_percent(count, total),
        })
        .collect()
}

#[component]
pub fn DistributionBars(rows: Vec<DistributionRow>, #[prop(optional)] count_suffix: &'static str) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="distribution__empty">"No data"</p> }.into_any();
    }
    view! {
        <div class="distribution">
            {rows
                .into_iter()
                .map(|row| {
                    let modifier = format!("distribution__bar--{}", row.key);
                    view! {
                        <div class="distribution__row">
                            <span class="distribution__label">{row.label}</span>
                            <div class="distribution__track">
                                <div
                                    class=format!("distribution__bar {modifier}")
                                    style=format!("width: {:.1}%", row.percent)
                                ></div>
                            </div>
                            <span class="distribution__count">{format!("{}{count_suffix}", row.count)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
        .into_any()
}
