//! Wire DTOs for the task API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the task API returns. Count fields accept any
//! integer-compatible number and collection fields default to empty so a
//! partially populated payload still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque API credential relayed in the `Authorization` header.
///
/// The value is never inspected. `Debug` is redacted so the token cannot leak
/// into diagnostic logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw token text, for header construction and persistence only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// The signed-in user as returned by `GET /users/me/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Whether an administrator has approved the account.
    #[serde(default)]
    pub is_approved: bool,
}

impl UserProfile {
    /// Name shown in the navigation bar: first name when set, else username.
    pub fn display_name(&self) -> &str {
        if self.first_name.trim().is_empty() { &self.username } else { &self.first_name }
    }
}

/// Body for `POST /api-token-auth/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response of `POST /api-token-auth/`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: AuthToken,
}

/// Body for `POST /register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Workflow state of a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
    /// Any value this client does not know about.
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::Unknown => "Unknown",
        }
    }
}

/// Task priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Unknown => "Unknown",
        }
    }
}

/// A task record as listed by `GET /tasks/` and `GET /tasks/search/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    /// Risk score from 1 (very low) to 5 (very high).
    #[serde(default)]
    pub risk_level: Option<u8>,
    /// ISO 8601 timestamp, if the task has a deadline.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub is_overdue: bool,
    #[serde(default)]
    pub intelligence_notes: String,
}

/// Body for `POST /tasks/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub assignee_id: i64,
}

/// Task counts split by priority bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub high: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub medium: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub low: u64,
}

impl PriorityBreakdown {
    /// Buckets in display order with their lowercase keys.
    pub fn entries(&self) -> [(&'static str, u64); 3] {
        [("high", self.high), ("medium", self.medium), ("low", self.low)]
    }
}

/// Aggregate analytics from `GET /dashboard/summary/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_tasks: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub completed_tasks: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub overdue_tasks: u64,
    #[serde(default)]
    pub tasks_by_priority: PriorityBreakdown,
    #[serde(default)]
    pub risk_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub status_distribution: BTreeMap<String, u64>,
}

/// Tasks created on one day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCreation {
    pub day: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub created: u64,
}

/// Tasks completed on one day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCompletion {
    pub day: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub completed: u64,
}

/// Lateness of completed tasks relative to their due dates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayMetrics {
    /// Mean delay in seconds; absent when nothing was late.
    #[serde(default)]
    pub average_delay: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_delayed_tasks: u64,
}

/// Whether completion predictions are available.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionAccuracy {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub message: String,
}

/// Activity series from `GET /dashboard/trends/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTrends {
    #[serde(default)]
    pub daily_creation: Vec<DailyCreation>,
    #[serde(default)]
    pub daily_completion: Vec<DailyCompletion>,
    #[serde(default)]
    pub delay_metrics: DelayMetrics,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub priority_changes: u64,
    #[serde(default)]
    pub prediction_accuracy: Option<PredictionAccuracy>,
}

/// Optional due-date window for task searches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Criteria for `GET /tasks/search/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    #[serde(default)]
    pub priority: Vec<String>,
    #[serde(default)]
    pub risk_level: Vec<String>,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateRange>,
    #[serde(default)]
    pub search: String,
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u64::try_from(value).map_err(|_| D::Error::custom(format!("count {value} is negative")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
