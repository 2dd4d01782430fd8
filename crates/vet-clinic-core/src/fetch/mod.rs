//! Fetch state shared by every fetch-driven screen.
//!
//! ```text
//!   Idle ──start──▶ Loading ──ok──▶ Loaded(T)
//!                      │
//!                      └──err──▶ Failed(reason)
//!
//!   start() again from any state: back to Loading, new generation
//!   cancel(): back to Idle, outstanding generations invalidated
//! ```

mod fetcher;
mod resource;

pub use fetcher::*;
pub use resource::*;

/// Tagged result of a screen's fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet (or the screen was closed)
    Idle,
    /// A request is in flight; any previous value has been discarded
    Loading,
    /// The latest request succeeded
    Loaded(T),
    /// The latest request failed, with the failure reason
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    /// The loaded value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure reason, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> FetchState<&T> {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Loaded(value) => FetchState::Loaded(value),
            FetchState::Failed(reason) => FetchState::Failed(reason.clone()),
        }
    }

    pub fn map<U, F>(self, f: F) -> FetchState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Loaded(value) => FetchState::Loaded(f(value)),
            FetchState::Failed(reason) => FetchState::Failed(reason),
        }
    }

    /// Short state name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Loaded(_) => "loaded",
            FetchState::Failed(_) => "failed",
        }
    }
}
