//! REST API helpers for the task backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Transport, status and decode
//! failures stay distinguishable for logging; pages decide what the user sees.
//!
//! Requests carry `Authorization: Token <token>` when the caller passes a
//! token and omit the header otherwise. Tokens are taken by value so the
//! returned futures are `'static` and can be spawned from timers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AuthToken, Credentials, DashboardSummary, NewTask, Registration, Task, TaskFilter, TaskTrends, UserProfile,
};

const LOGIN_PATH: &str = "/api-token-auth/";
const REGISTER_PATH: &str = "/register/";
const CURRENT_USER_PATH: &str = "/users/me/";
const SUMMARY_PATH: &str = "/dashboard/summary/";
const TRENDS_PATH: &str = "/dashboard/trends/";
const TASKS_PATH: &str = "/tasks/";
const SEARCH_PATH: &str = "/tasks/search/";

/// Exchange username/password for an API token via `POST /api-token-auth/`.
///
/// # Errors
///
/// Returns `ApiError::Status` when the credentials are rejected.
pub async fn login(credentials: Credentials) -> Result<AuthToken, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp: super::types::TokenResponse = http::post_json(LOGIN_PATH, &credentials, None).await?;
        Ok(resp.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credentials, LOGIN_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /register/`. New accounts start unapproved.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the form.
pub async fn register(registration: Registration) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: serde_json::Value = http::post_json(REGISTER_PATH, &registration, None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (registration, REGISTER_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the profile behind `token` from `GET /users/me/`.
///
/// # Errors
///
/// Returns an unauthorized status when the token is no longer valid.
pub async fn fetch_current_user(token: AuthToken) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(CURRENT_USER_PATH, Some(&token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, CURRENT_USER_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Fetch aggregate analytics from `GET /dashboard/summary/`.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status or bad payload.
pub async fn fetch_dashboard_summary(token: Option<AuthToken>) -> Result<DashboardSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(SUMMARY_PATH, token.as_ref()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, SUMMARY_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Fetch activity series from `GET /dashboard/trends/`.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status or bad payload.
pub async fn fetch_dashboard_trends(token: Option<AuthToken>) -> Result<TaskTrends, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(TRENDS_PATH, token.as_ref()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, TRENDS_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Run a filtered search via `GET /tasks/search/`.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status or bad payload.
pub async fn search_tasks(token: Option<AuthToken>, filter: TaskFilter) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(&search_path(&filter), token.as_ref()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, filter, SEARCH_PATH);
        Err(ApiError::Unavailable)
    }
}

/// List the tasks visible to the caller via `GET /tasks/`.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status or bad payload.
pub async fn list_tasks(token: Option<AuthToken>) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(TASKS_PATH, token.as_ref()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, TASKS_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Create a task via `POST /tasks/` and return the stored record.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status or bad payload.
pub async fn create_task(token: Option<AuthToken>, task: NewTask) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json(TASKS_PATH, &task, token.as_ref()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task);
        Err(ApiError::Unavailable)
    }
}

/// Join the configured base URL and an API path.
#[cfg(any(test, feature = "hydrate"))]
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() { path.to_owned() } else { format!("{base}/{}", path.trim_start_matches('/')) }
}

#[cfg(any(test, feature = "hydrate"))]
fn authorization_value(token: &AuthToken) -> String {
    format!("Token {}", token.expose())
}

/// Encode a filter as query pairs: repeated keys for the multi-selects,
/// `search` when non-blank, `dueDate[start]` / `dueDate[end]` when set.
#[cfg(any(test, feature = "hydrate"))]
fn search_query(filter: &TaskFilter) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for value in &filter.priority {
        query.append_pair("priority", value);
    }
    for value in &filter.risk_level {
        query.append_pair("riskLevel", value);
    }
    for value in &filter.status {
        query.append_pair("status", value);
    }
    let search = filter.search.trim();
    if !search.is_empty() {
        query.append_pair("search", search);
    }
    if let Some(range) = &filter.due_date {
        if let Some(start) = range.start.as_deref().filter(|s| !s.is_empty()) {
            query.append_pair("dueDate[start]", start);
        }
        if let Some(end) = range.end.as_deref().filter(|s| !s.is_empty()) {
            query.append_pair("dueDate[end]", end);
        }
    }
    query.finish()
}

#[cfg(any(test, feature = "hydrate"))]
fn search_path(filter: &TaskFilter) -> String {
    let query = search_query(filter);
    if query.is_empty() { SEARCH_PATH.to_owned() } else { format!("{SEARCH_PATH}?{query}") }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, AuthToken, authorization_value, build_url_with_base};
    use crate::util::config::AppConfig;

    fn build_url(path: &str) -> String {
        build_url_with_base(&AppConfig::load().api_base_url, path)
    }

    fn with_auth(builder: RequestBuilder, token: Option<&AuthToken>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &authorization_value(token)),
            None => builder,
        }
    }

    pub(super) async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&AuthToken>) -> Result<T, ApiError> {
        let url = build_url(path);
        let resp = with_auth(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }

    pub(super) async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
        token: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        let url = build_url(path);
        let resp = with_auth(Request::post(&url), token)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}
