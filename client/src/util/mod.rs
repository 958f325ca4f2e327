//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser/environment concerns and pure decision logic
//! out of page and component code so it can be tested without a DOM.

pub mod auth;
pub mod config;
pub mod filter;
pub mod format;
pub mod forms;
pub mod poll;
pub mod storage;
