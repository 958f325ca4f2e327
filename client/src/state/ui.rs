//! Local UI chrome state for the dashboard.
//!
//! DESIGN
//! ======
//! Keeps which dashboard view is showing out of the fetched analytics so the
//! polling state survives switching views.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Dashboard panel selected in the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardView {
    /// Headline counts, trends and recent tasks.
    #[default]
    Overview,
    /// Risk and status distributions.
    Analytics,
    /// Filter panel with search results.
    Insights,
}

impl DashboardView {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Analytics, Self::Insights];

    pub fn key(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Analytics => "analytics",
            Self::Insights => "insights",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.key() == key)
    }
}
