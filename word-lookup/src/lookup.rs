use std::future::Future;

use parking_lot::Mutex;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Default)]
pub struct LookupTracker {
    inner: Mutex<TrackerState>,
}

#[derive(Default)]
struct TrackerState {
    last_issued: u64,
    in_flight: Option<(RequestId, AbortHandle)>,
}

impl LookupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts whatever lookup is still running and spawns `future` as the newest.
    pub fn start<F>(&self, future: F) -> (RequestId, JoinHandle<F::Output>)
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let mut state = self.inner.lock();
        if let Some((previous, abort)) = state.in_flight.take() {
            debug!(%previous, "cancelling superseded lookup");
            abort.abort();
        }
        state.last_issued += 1;
        let id = RequestId(state.last_issued);
        let handle = tokio::spawn(future);
        state.in_flight = Some((id, handle.abort_handle()));
        (id, handle)
    }

    /// Runs `apply` if `id` is still the newest lookup.
    ///
    /// Holds the same lock as [`start`](Self::start), so a newer submission
    /// cannot slip in between the check and the update.
    pub fn finish<R>(&self, id: RequestId, apply: impl FnOnce() -> R) -> Option<R> {
        let mut state = self.inner.lock();
        if state.last_issued != id.0 {
            debug!(%id, "dropping result of superseded lookup");
            return None;
        }
        if matches!(state.in_flight, Some((current, _)) if current == id) {
            state.in_flight = None;
        }
        Some(apply())
    }

    /// Aborts the running lookup and retires every issued id, so no result
    /// from before this call is applied.
    pub fn cancel(&self) {
        let mut state = self.inner.lock();
        if let Some((previous, abort)) = state.in_flight.take() {
            debug!(%previous, "cancelling lookup");
            abort.abort();
        }
        state.last_issued += 1;
    }

    #[cfg(test)]
    fn is_current(&self, id: RequestId) -> bool {
        self.inner.lock().last_issued == id.0
    }

    #[cfg(test)]
    fn in_flight(&self) -> Option<RequestId> {
        self.inner.lock().in_flight.as_ref().map(|(id, _)| *id)
    }
}
