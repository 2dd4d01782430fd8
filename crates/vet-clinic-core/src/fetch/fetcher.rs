//! Async fetch controller shared by the screens.

use std::fmt::Display;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::{FetchState, Resource};

/// Runs one request at a time for a screen and writes outcomes into its
/// [`Resource`].
///
/// Starting a request cancels the one in flight. A response that arrives for
/// an older generation is dropped even if cancellation lost the race.
pub struct Fetcher<T> {
    /// Screen name, for logs
    name: &'static str,
    resource: Arc<Mutex<Resource<T>>>,
    in_flight: Option<CancellationToken>,
}

impl<T: Send + 'static> Fetcher<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            resource: Arc::new(Mutex::new(Resource::new())),
            in_flight: None,
        }
    }

    /// Start a request on the Tokio runtime.
    ///
    /// The state is `Loading` when this returns. Must be called from within a
    /// Tokio runtime.
    pub fn start<F, E>(&mut self, request: F) -> JoinHandle<()>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        self.cancel_in_flight();

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let ticket = lock(&self.resource).begin();
        let resource = Arc::clone(&self.resource);
        let name = self.name;
        tracing::debug!(screen = name, generation = ticket.generation(), "fetch started");

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(screen = name, generation = ticket.generation(), "fetch cancelled");
                }
                result = request => {
                    if let Err(e) = &result {
                        tracing::error!(screen = name, generation = ticket.generation(), error = %e, "fetch failed");
                    }
                    if lock(&resource).resolve(ticket, result) {
                        tracing::debug!(screen = name, generation = ticket.generation(), "fetch applied");
                    } else {
                        tracing::debug!(screen = name, generation = ticket.generation(), "stale response discarded");
                    }
                }
            }
        })
    }

    /// Cancel any request in flight and return to `Idle`.
    pub fn cancel(&mut self) {
        self.cancel_in_flight();
        lock(&self.resource).reset();
    }

    /// Current generation; bumps on every start and cancel.
    pub fn generation(&self) -> u64 {
        lock(&self.resource).generation()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.resource).state().is_loading()
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

impl<T: Clone> Fetcher<T> {
    /// Copy of the current state.
    pub fn snapshot(&self) -> FetchState<T> {
        lock(&self.resource).state().clone()
    }
}

impl<T> Drop for Fetcher<T> {
    fn drop(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

/// State writes are single assignments, so a poisoned lock still holds a
/// consistent value.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
