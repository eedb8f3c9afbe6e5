// ABOUTME: View lifetime tracking that discards responses arriving after disposal or re-fetch
// ABOUTME: ViewScope hands out generation-stamped FetchTickets checked when a call settles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Proof that a fetch was started, stamped with the scope generation at the time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Default)]
struct ScopeState {
    generation: AtomicU64,
    disposed: AtomicBool,
}

/// Lifetime of one view instance
///
/// Clones share state, so whoever tears the view down (navigation, a test) can
/// dispose it while a fetch started by the view is still in flight. Only the
/// ticket from the most recent [`begin`](Self::begin) is accepted, and nothing
/// is accepted after [`dispose`](Self::dispose).
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    state: Arc<ScopeState>,
}

impl ViewScope {
    /// Fresh, live scope
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch, invalidating any earlier ticket
    #[must_use]
    pub fn begin(&self) -> FetchTicket {
        let generation = self.state.generation.fetch_add(1, Ordering::AcqRel) + 1;
        FetchTicket { generation }
    }

    /// Whether a result carrying `ticket` may still be applied
    #[must_use]
    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        !self.is_disposed() && self.state.generation.load(Ordering::Acquire) == ticket.generation
    }

    /// Tear the view down; every outstanding ticket becomes stale
    pub fn dispose(&self) {
        self.state.disposed.store(true, Ordering::Release);
    }

    /// Whether [`dispose`](Self::dispose) has been called
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.state.disposed.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let scope = ViewScope::new();
        let first = scope.begin();
        let second = scope.begin();
        assert!(!scope.accepts(first));
        assert!(scope.accepts(second));
    }

    #[test]
    fn test_dispose_rejects_everything() {
        let scope = ViewScope::new();
        let ticket = scope.begin();
        scope.clone().dispose();
        assert!(scope.is_disposed());
        assert!(!scope.accepts(ticket));
        assert!(!scope.accepts(scope.begin()));
    }
}
