//! Browser localStorage helpers for the persisted API token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token survives reloads under a single key so session restore can pick
//! it up at start-up. SSR paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::AuthToken;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the persisted token, ignoring blank values.
pub fn load_token() -> Option<AuthToken> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
        let raw = raw.trim();
        if raw.is_empty() { None } else { Some(AuthToken::new(raw)) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` for the next page load.
pub fn save_token(token: &AuthToken) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token.expose());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the persisted token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
