//! Stale-response guard for re-issued list fetches.
//!
//! When a filter changes while an earlier fetch is still in flight, the older
//! response may arrive last. Each fetch takes a [`Ticket`]; only the response
//! holding the most recently issued ticket is accepted.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every ticket issued before it.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// `Some(value)` if `ticket` is still the latest, otherwise the value is dropped.
    pub fn settle<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest.load(Ordering::SeqCst),
                "discarding stale response"
            );
            None
        }
    }

    /// Run `fetch` under a fresh ticket and settle its output.
    pub async fn guarded<T>(&self, fetch: impl Future<Output = T>) -> Option<T> {
        let ticket = self.begin();
        let value = fetch.await;
        self.settle(ticket, value)
    }
}
