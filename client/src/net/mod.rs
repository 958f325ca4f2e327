//! Networking modules for the task API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `error` classifies their failures, and
//! `types` defines the wire schema shared by pages and state.

pub mod api;
pub mod error;
pub mod types;
