//! Task search filter editing and the one-shot search it triggers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The filter panel owns a `TaskFilter` and emits the whole updated record on
//! every edit. The dashboard answers each emission with one search request
//! whose result replaces the filtered list; failures are logged and leave the
//! list as it was.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::types::{DateRange, Task, TaskFilter};
use crate::util::poll::{Liveness, Store, replace_on_success};

pub const PRIORITY_OPTIONS: [&str; 3] = ["HIGH", "MEDIUM", "LOW"];
pub const RISK_LEVEL_OPTIONS: [&str; 3] = ["HIGH", "MEDIUM", "LOW"];
pub const STATUS_OPTIONS: [&str; 3] = ["TODO", "IN_PROGRESS", "DONE"];

/// Multi-select groups of the filter panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Priority,
    RiskLevel,
    Status,
}

impl FilterField {
    pub const ALL: [Self; 3] = [Self::Priority, Self::RiskLevel, Self::Status];

    pub fn label(self) -> &'static str {
        match self {
            Self::Priority => "Priority",
            Self::RiskLevel => "Risk Level",
            Self::Status => "Status",
        }
    }

    pub fn options(self) -> [&'static str; 3] {
        match self {
            Self::Priority => PRIORITY_OPTIONS,
            Self::RiskLevel => RISK_LEVEL_OPTIONS,
            Self::Status => STATUS_OPTIONS,
        }
    }

    pub fn values(self, filter: &TaskFilter) -> &[String] {
        match self {
            Self::Priority => &filter.priority,
            Self::RiskLevel => &filter.risk_level,
            Self::Status => &filter.status,
        }
    }

    fn values_mut(self, filter: &mut TaskFilter) -> &mut Vec<String> {
        match self {
            Self::Priority => &mut filter.priority,
            Self::RiskLevel => &mut filter.risk_level,
            Self::Status => &mut filter.status,
        }
    }
}

/// End of the due-date window being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

pub fn is_selected(filter: &TaskFilter, field: FilterField, value: &str) -> bool {
    field.values(filter).iter().any(|v| v == value)
}

/// Add `value` to the group, or remove it if already selected. Selection
/// order is kept so the emitted filter matches what the user clicked.
pub fn toggle(filter: &mut TaskFilter, field: FilterField, value: &str) {
    let values = field.values_mut(filter);
    if let Some(index) = values.iter().position(|v| v == value) {
        values.remove(index);
    } else {
        values.push(value.to_owned());
    }
}

pub fn set_search(filter: &mut TaskFilter, text: &str) {
    text.clone_into(&mut filter.search);
}

/// Set one end of the due-date window; an empty value clears it, and the
/// window itself is dropped once both ends are clear.
pub fn set_date(filter: &mut TaskFilter, bound: DateBound, value: &str) {
    let value = Some(value.trim()).filter(|v| !v.is_empty()).map(str::to_owned);
    let mut range: DateRange = filter.due_date.take().unwrap_or_default();
    match bound {
        DateBound::Start => range.start = value,
        DateBound::End => range.end = value,
    }
    filter.due_date = (!range.is_empty()).then_some(range);
}

/// Current value of one end of the window, for binding date inputs.
pub fn date_value(filter: &TaskFilter, bound: DateBound) -> String {
    let range = filter.due_date.as_ref();
    let value = match bound {
        DateBound::Start => range.and_then(|r| r.start.clone()),
        DateBound::End => range.and_then(|r| r.end.clone()),
    };
    value.unwrap_or_default()
}

/// Run `search` once with `filter` and replace `results` on success.
pub async fn apply_filter<S, Fut, St>(search: S, filter: TaskFilter, results: St, liveness: Liveness)
where
    S: FnOnce(TaskFilter) -> Fut,
    Fut: Future<Output = Result<Vec<Task>, ApiError>>,
    St: Store<Vec<Task>>,
{
    replace_on_success("task search", search(filter), results, liveness).await;
}
