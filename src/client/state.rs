//! Request lifecycle types
//!
//! The upstream UI encoded "loading" in a shared button label; here the
//! lifecycle is an explicit state value and an explicit in-flight permit.

use std::sync::atomic::{AtomicBool, Ordering};

/// State of a shorten request as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestState {
    /// Transition into the in-flight state
    pub fn begin(self) -> Self {
        RequestState::Loading
    }

    /// Transition out of the in-flight state
    pub fn finish(self, ok: bool) -> Self {
        if ok {
            RequestState::Succeeded
        } else {
            RequestState::Failed
        }
    }

    pub fn is_loading(self) -> bool {
        self == RequestState::Loading
    }

    /// Status line label for the CLI
    pub fn label(self) -> &'static str {
        match self {
            RequestState::Idle => "Ready",
            RequestState::Loading => "Loading...",
            RequestState::Succeeded => "Shortened",
            RequestState::Failed => "Failed",
        }
    }
}

/// Permit-style guard allowing at most one outstanding request.
///
/// A second `try_acquire` while a permit is live returns `None`; dropping
/// the permit releases the slot. This closes the submit/submit race the
/// upstream design left open.
#[derive(Debug, Default)]
pub struct InFlightGuard {
    busy: AtomicBool,
}

impl InFlightGuard {
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Try to acquire the single in-flight slot
    pub fn try_acquire(&self) -> Option<InFlightPermit<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .ok()
            .map(|_| InFlightPermit { guard: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// RAII permit for one outstanding request
#[derive(Debug)]
pub struct InFlightPermit<'a> {
    guard: &'a InFlightGuard,
}

impl Drop for InFlightPermit<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let state = RequestState::Idle;
        let state = state.begin();
        assert!(state.is_loading());
        assert_eq!(state.finish(true), RequestState::Succeeded);
        assert_eq!(state.finish(false), RequestState::Failed);
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(RequestState::Loading.label(), "Loading...");
        assert_eq!(RequestState::Idle.label(), "Ready");
    }

    #[test]
    fn test_guard_single_permit() {
        let guard = InFlightGuard::new();
        let permit = guard.try_acquire();
        assert!(permit.is_some());
        assert!(guard.is_busy());
        assert!(guard.try_acquire().is_none());

        drop(permit);
        assert!(!guard.is_busy());
        assert!(guard.try_acquire().is_some());
    }
}
