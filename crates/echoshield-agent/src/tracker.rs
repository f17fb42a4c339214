//! Processed-claim tracking
//!
//! Remembers which claim ids have been verified so no claim is verified
//! twice during the life of the process. The set only grows.

use echoshield_domain::ClaimId;
use std::collections::HashSet;

/// Set of claim ids that have already been verified
#[derive(Debug, Clone, Default)]
pub struct DedupTracker {
    processed: HashSet<ClaimId>,
}

impl DedupTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the claim has already been verified
    pub fn has_processed(&self, id: ClaimId) -> bool {
        self.processed.contains(&id)
    }

    /// Record a verified claim
    ///
    /// Idempotent. Returns `true` when the id was not tracked before.
    pub fn mark_processed(&mut self, id: ClaimId) -> bool {
        self.processed.insert(id)
    }

    /// Number of distinct claims verified so far
    pub fn len(&self) -> usize {
        self.processed.len()
    }

    /// Whether nothing has been verified yet
    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}
