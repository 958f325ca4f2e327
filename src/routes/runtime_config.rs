//! `/config.js`: runtime settings for the browser bundle.
//!
//! The script assigns `window.TASKDECK_CONFIG` before hydration so one build
//! can point at different task APIs per deployment.

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;
use taskdeck_client::util::config::RUNTIME_CONFIG_GLOBAL;

/// JavaScript assigning the runtime config global.
pub fn render(api_base_url: &str) -> String {
    let payload = serde_json::json!({ "api_base_url": api_base_url });
    format!("window.{RUNTIME_CONFIG_GLOBAL} = {payload};\n")
}

pub async fn serve(script: String) -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/javascript; charset=utf-8"), (CACHE_CONTROL, "no-store")], script)
}
