//! Request Sequencing
//!
//! Overlapping fetches for the same view state are tagged with a ticket;
//! only the most recently issued ticket may write its response.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: Arc<AtomicU64>,
}

/// Issue-order tag for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every ticket issued before
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Supersede outstanding tickets without starting a request
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_accepted() {
        let seq = RequestSeq::new();
        let first = seq.issue();
        let second = seq.issue();
        // first response arrives late
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn test_invalidate_drops_outstanding() {
        let seq = RequestSeq::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!seq.is_latest(ticket));
        let next = seq.issue();
        assert!(seq.is_latest(next));
    }

    #[test]
    fn test_clones_share_counter() {
        let seq = RequestSeq::new();
        let other = seq.clone();
        let ticket = seq.issue();
        other.issue();
        assert!(!seq.is_latest(ticket));
    }
}
