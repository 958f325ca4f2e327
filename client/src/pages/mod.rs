//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `dashboard` and `tasks` wrap their content in
//! `Protected`; `pending_approval` applies its own redirects.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod pending_approval;
pub mod register;
pub mod tasks;
