//! Per-view remote data state.
//!
//! DESIGN
//! ======
//! One `FetchState` exists per polling view. A failure keeps whatever payload
//! was already loaded and only replaces the error message, so the page can
//! keep showing stale numbers while the next tick retries.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: true, error: None }
    }
}

impl<T> FetchState<T> {
    /// Store a fresh payload and clear any earlier error.
    pub fn resolve(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
        self.loading = false;
    }

    /// Record a failed fetch without discarding loaded data.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }
}
