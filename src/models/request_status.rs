//! Per-session record of donors that have had help requested.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Donor id to requested flag. An id present is always `true`; entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestStatus(BTreeMap<u64, bool>);

impl RequestStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether help has been requested for the donor.
    pub fn is_requested(&self, donor_id: u64) -> bool {
        self.0.get(&donor_id).copied().unwrap_or(false)
    }

    /// A copy of this status with `donor_id` marked as requested.
    pub fn with_requested(&self, donor_id: u64) -> Self {
        let mut entries = self.0.clone();
        entries.insert(donor_id, true);
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
