//! Client configuration: the task API base URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! The base URL is baked in at build time from `TASKDECK_API_URL` and can be
//! replaced at runtime by `window.TASKDECK_CONFIG`, which the host publishes
//! at `/config.js`. Values here are public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback API location used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Name of the global the host assigns in `/config.js`.
pub const RUNTIME_CONFIG_GLOBAL: &str = "TASKDECK_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Build-time defaults with runtime overrides applied.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("TASKDECK_API_URL").unwrap_or(DEFAULT_API_BASE_URL).to_owned(),
        };
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<RuntimeConfig> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL)).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let api_base_url = js_sys::Reflect::get(&config, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()
        .and_then(|raw| normalize_runtime_value(&raw));
    Some(RuntimeConfig { api_base_url })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
