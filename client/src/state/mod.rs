//! Reactive client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the session every page reads, `fetch` the per-view remote data
//! wrapper, and `ui` local presentation choices.

pub mod auth;
pub mod fetch;
pub mod ui;
