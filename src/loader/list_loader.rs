use parking_lot::Mutex;
use tokio::sync::watch;

use crate::loader::fetcher::{FetchError, ItemFetcher};
use crate::loader::phase::LoadPhase;

/// Drives the fetch-and-display lifecycle for one list view.
///
/// All methods take `&self`; state lives behind a mutex so overlapping
/// `load()` futures may interleave on the same runtime. Each call to
/// [`load`](Self::load) bumps an internal generation counter, and a fetch
/// result is applied only if its generation is still current — a
/// superseded request runs to completion and is silently dropped.
///
/// There is no transport-level cancellation and no automatic retry; both
/// are host decisions.
pub struct ListLoader<F: ItemFetcher> {
    fetcher: F,
    inner: Mutex<LoaderInner<F::Param, F::Item>>,
    tx: watch::Sender<LoadPhase<F::Item>>,
}

struct LoaderInner<P, T> {
    param: P,
    generation: u64,
    phase: LoadPhase<T>,
}

impl<F: ItemFetcher> ListLoader<F> {
    /// Create a loader bound to `initial_param`, in the `Idle` phase.
    ///
    /// No request is issued until the first [`load`](Self::load) call.
    pub fn new(fetcher: F, initial_param: F::Param) -> Self {
        let (tx, _rx) = watch::channel(LoadPhase::Idle);
        Self {
            fetcher,
            inner: Mutex::new(LoaderInner {
                param: initial_param,
                generation: 0,
                phase: LoadPhase::Idle,
            }),
            tx,
        }
    }

    /// Issue a fetch for `param`, superseding any request still in flight.
    ///
    /// Transitions to `Loading` immediately (clearing previously displayed
    /// items or error), then awaits the fetcher and applies the outcome if
    /// no later `load` has been issued in the meantime.
    pub async fn load(&self, param: F::Param) {
        let generation = self.begin(param.clone());
        let result = self.fetcher.fetch_items(&param).await;
        self.complete(generation, result);
    }

    /// Re-issue the fetch for the currently held param.
    ///
    /// Always starts a new request, from any phase, and transiently shows
    /// `Loading` even when the previous load succeeded.
    pub async fn refresh(&self) {
        let param = self.inner.lock().param.clone();
        self.load(param).await;
    }

    /// Host-triggered retry after a failure.
    ///
    /// Identical to [`refresh`](Self::refresh); the phase precondition is
    /// not enforced, calling it outside `Error` simply reloads.
    pub async fn retry(&self) {
        self.refresh().await;
    }

    /// Snapshot of the current phase.
    pub fn phase(&self) -> LoadPhase<F::Item> {
        self.inner.lock().phase.clone()
    }

    /// The param the most recent request was issued for.
    pub fn param(&self) -> F::Param {
        self.inner.lock().param.clone()
    }

    /// Subscribe to phase changes.
    ///
    /// Every transition is published, including the transient `Loading`
    /// between two `Success` snapshots on refresh.
    pub fn subscribe(&self) -> watch::Receiver<LoadPhase<F::Item>> {
        self.tx.subscribe()
    }

    fn begin(&self, param: F::Param) -> u64 {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.param = param;
        inner.phase = LoadPhase::Loading;
        self.tx.send_replace(LoadPhase::Loading);
        tracing::info!(generation = inner.generation, "load started");
        inner.generation
    }

    fn complete(&self, generation: u64, result: Result<Vec<F::Item>, FetchError>) {
        let mut inner = self.inner.lock();
        if generation != inner.generation {
            tracing::debug!(
                generation,
                current = inner.generation,
                "discarding stale fetch result"
            );
            return;
        }

        let phase = match result {
            Ok(items) => {
                tracing::info!(generation, count = items.len(), "load succeeded");
                LoadPhase::Success(items)
            }
            Err(error) => {
                tracing::warn!(generation, %error, "load failed");
                LoadPhase::Error(error.to_string())
            }
        };
        inner.phase = phase.clone();
        self.tx.send_replace(phase);
    }
}
