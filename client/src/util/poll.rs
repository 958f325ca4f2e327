//! Timer-driven refresh of view data.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard views fetch once on mount and then again on every tick. Each tick
//! spawns an independent fetch; nothing de-duplicates or aborts earlier ones,
//! so a slow response can land after a faster later one and overwrite it
//! (last-resolved wins). Teardown flips a shared liveness flag and aborts the
//! tick loop, dropping its timer at once; pending responses are dropped before
//! they touch state.
//!
//! The loop is written against a tick `Stream` and a spawn function so it runs
//! the same under `gloo-timers` in the browser and `futures` executors in tests.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::cell::RefCell;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures::future::{AbortHandle, AbortRegistration, Abortable, LocalBoxFuture};
use futures::{FutureExt as _, Stream, StreamExt as _};
use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::fetch::FetchState;

/// Refresh period of the dashboard summary.
pub const SUMMARY_PERIOD: Duration = Duration::from_secs(2 * 60);
/// Refresh period of the trends chart.
pub const TRENDS_PERIOD: Duration = Duration::from_secs(5 * 60);

/// Cancellation flag shared between a view and the work it started.
///
/// `cancel` also aborts the tick loop registered with it, if any.
#[derive(Clone, Debug)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
    abort: AbortHandle,
}

impl Default for Liveness {
    fn default() -> Self {
        Self::paired().0
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh flag plus the registration its `cancel` aborts.
    fn paired() -> (Self, AbortRegistration) {
        let (abort, registration) = AbortHandle::new_pair();
        (Self { alive: Arc::new(AtomicBool::new(true)), abort }, registration)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
        self.abort.abort();
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Somewhere a fetch outcome can be written.
pub trait Store<S> {
    fn update(&self, apply: impl FnOnce(&mut S));
}

impl<S: Send + Sync + 'static> Store<S> for RwSignal<S> {
    fn update(&self, apply: impl FnOnce(&mut S)) {
        // A disposed signal means the owning view is gone; nothing to write.
        let _ = self.try_update(apply);
    }
}

impl<S> Store<S> for Rc<RefCell<S>> {
    fn update(&self, apply: impl FnOnce(&mut S)) {
        apply(&mut self.borrow_mut());
    }
}

/// Repeating fetcher bound to one `FetchState`.
pub struct Poller<F, St> {
    label: &'static str,
    failure_message: &'static str,
    source: F,
    store: St,
    liveness: Liveness,
    registration: Option<AbortRegistration>,
}

impl<T, F, Fut, St> Poller<F, St>
where
    T: 'static,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    St: Store<FetchState<T>> + Clone + 'static,
{
    /// `label` names the resource in diagnostic logs; `failure_message` is
    /// what the user sees when a fetch fails.
    pub fn new(label: &'static str, failure_message: &'static str, source: F, store: St) -> Self {
        let (liveness, registration) = Liveness::paired();
        Self { label, failure_message, source, store, liveness, registration: Some(registration) }
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    /// Issue one fetch now; the returned future applies its outcome unless the
    /// view was torn down in the meantime.
    pub fn fetch(&self) -> impl Future<Output = ()> + 'static {
        let request = (self.source)();
        let store = self.store.clone();
        let liveness = self.liveness.clone();
        let label = self.label;
        let failure_message = self.failure_message;
        async move {
            let outcome = request.await;
            if !liveness.is_alive() {
                return;
            }
            match outcome {
                Ok(data) => store.update(|state| state.resolve(data)),
                Err(err) => {
                    leptos::logging::warn!("{label} fetch failed: {err}");
                    store.update(|state| state.fail(failure_message));
                }
            }
        }
    }

    /// Fetch immediately, then once per tick until cancelled or the tick
    /// stream ends. Fetches are handed to `spawn` so a hung request never
    /// delays the next tick.
    ///
    /// Cancelling the liveness ends this future without waiting for another
    /// tick; the tick stream (and its timer) is dropped with it.
    pub async fn run<Ticks, Sp>(mut self, ticks: Ticks, spawn: Sp)
    where
        Ticks: Stream<Item = ()>,
        Sp: Fn(LocalBoxFuture<'static, ()>),
    {
        let Some(registration) = self.registration.take() else {
            return;
        };
        let this = &self;
        let ticking = async move {
            let mut ticks = pin!(ticks);
            spawn(this.fetch().boxed_local());
            while ticks.next().await.is_some() {
                if !this.liveness.is_alive() {
                    break;
                }
                spawn(this.fetch().boxed_local());
            }
        };
        // Err(Aborted) just means the view went away.
        let _ = Abortable::new(ticking, registration).await;
    }
}

/// Poll `source` into `state` every `period` for as long as the calling
/// component is mounted.
pub fn use_polling<T, F, Fut>(
    label: &'static str,
    failure_message: &'static str,
    period: Duration,
    source: F,
    state: RwSignal<FetchState<T>>,
) where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let poller = Poller::new(label, failure_message, source, state);
    let liveness = poller.liveness();
    #[cfg(feature = "hydrate")]
    {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let ticks = gloo_timers::future::IntervalStream::new(millis);
        leptos::task::spawn_local(poller.run(ticks, |fetch| leptos::task::spawn_local(fetch)));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (poller, period);
    }
    on_cleanup(move || liveness.cancel());
}

/// Liveness flag cancelled when the calling component is cleaned up.
pub fn use_liveness() -> Liveness {
    let liveness = Liveness::new();
    let on_teardown = liveness.clone();
    on_cleanup(move || on_teardown.cancel());
    liveness
}

/// Await a one-shot request and replace `target` with its result.
///
/// Failures are logged only; `target` keeps its previous contents.
pub async fn replace_on_success<T, Fut, St>(label: &'static str, request: Fut, target: St, liveness: Liveness)
where
    Fut: Future<Output = Result<T, ApiError>>,
    St: Store<T>,
{
    match request.await {
        Ok(value) if liveness.is_alive() => target.update(|current| *current = value),
        Ok(_) => {}
        Err(err) => leptos::logging::warn!("{label} failed: {err}"),
    }
}
