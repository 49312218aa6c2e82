//! Generation counters used to discard superseded responses.
//!
//! Each gateway-backed update is issued under a [`RequestKey`]. Issuing a
//! new request for a key invalidates every earlier [`Ticket`] for that key,
//! so the result applied is the one issued last, whatever order the
//! responses arrive in.

use std::collections::HashMap;

use filehub_core::types::FolderId;

/// What a request is going to overwrite when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKey {
    /// The top-level folder listing.
    TopLevel,
    /// The children of one folder in the tree.
    Children(FolderId),
    /// The single contents slot, whichever folder it is loading.
    Contents,
    /// The single breadcrumb path.
    Breadcrumb,
}

/// Proof of issue handed to an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    key: RequestKey,
    generation: u64,
}

impl Ticket {
    /// The key this ticket was issued for.
    pub fn key(&self) -> RequestKey {
        self.key
    }

    /// The generation number of this ticket.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Latest issued generation per key.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generations: HashMap<RequestKey, u64>,
}

impl RequestTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket for `key`, superseding all earlier ones.
    pub fn issue(&mut self, key: RequestKey) -> Ticket {
        let generation = self.generations.entry(key).or_insert(0);
        *generation += 1;
        Ticket {
            key,
            generation: *generation,
        }
    }

    /// Whether `ticket` is still the latest issued for its key.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.generations.get(&ticket.key) == Some(&ticket.generation)
    }

    /// The latest generation issued for `key` (0 if none).
    pub fn latest(&self, key: RequestKey) -> u64 {
        self.generations.get(&key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue(RequestKey::Contents);
        let second = tracker.issue(RequestKey::Contents);

        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
        assert_eq!(tracker.latest(RequestKey::Contents), 2);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut tracker = RequestTracker::new();
        let a = tracker.issue(RequestKey::Children(FolderId(1)));
        let b = tracker.issue(RequestKey::Children(FolderId(2)));

        assert!(tracker.is_current(&a));
        assert!(tracker.is_current(&b));
        assert_eq!(tracker.latest(RequestKey::Breadcrumb), 0);
    }
}
