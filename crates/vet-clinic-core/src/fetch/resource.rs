//! Generation-tagged state slot.

use std::fmt::Display;

use super::FetchState;

/// Proof that a request was started at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A screen's state slot.
///
/// Every request bumps the generation; only the ticket of the latest
/// generation may write a result back.
#[derive(Debug)]
pub struct Resource<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new request: discard the current value and enter `Loading`.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.state = FetchState::Loading;
        RequestTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a request's outcome. Returns `false` (and changes nothing) when
    /// the ticket is stale.
    pub fn resolve<E: Display>(&mut self, ticket: RequestTicket, result: Result<T, E>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.state = match result {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => FetchState::Failed(e.to_string()),
        };
        true
    }

    /// Return to `Idle` and invalidate every outstanding ticket.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = FetchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_discards_previous_value() {
        let mut resource = Resource::new();
        let ticket = resource.begin();
        assert!(resource.resolve(ticket, Ok::<_, String>("first")));
        assert_eq!(resource.state(), &FetchState::Loaded("first"));

        resource.begin();
        assert_eq!(resource.state(), &FetchState::Loading);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut resource = Resource::new();
        let old = resource.begin();
        let new = resource.begin();

        assert!(resource.resolve(new, Ok::<_, String>(2)));
        assert!(!resource.resolve(old, Ok::<_, String>(1)));
        assert_eq!(resource.state(), &FetchState::Loaded(2));
    }

    #[test]
    fn test_stale_failure_does_not_clobber_loading() {
        let mut resource: Resource<u32> = Resource::new();
        let old = resource.begin();
        resource.begin();

        assert!(!resource.resolve(old, Err("HTTP error! status: 500")));
        assert!(resource.state().is_loading());
    }

    #[test]
    fn test_failure_keeps_reason() {
        let mut resource: Resource<u32> = Resource::new();
        let ticket = resource.begin();
        resource.resolve(ticket, Err("HTTP error! status: 404"));
        assert_eq!(resource.state().error(), Some("HTTP error! status: 404"));
    }

    #[test]
    fn test_reset_invalidates_outstanding() {
        let mut resource = Resource::new();
        let ticket = resource.begin();
        resource.reset();

        assert!(!resource.resolve(ticket, Ok::<_, String>(1)));
        assert!(resource.state().is_idle());
        assert_eq!(resource.generation(), 2);
    }
}
