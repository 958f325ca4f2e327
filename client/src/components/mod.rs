//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome, task lists and dashboard widgets
//! while reading the session from the Leptos context provided by `app`.

pub mod distribution;
pub mod navigation;
pub mod protected;
pub mod search_filter_panel;
pub mod task_form;
pub mod task_item;
pub mod task_list;
pub mod trends_chart;
