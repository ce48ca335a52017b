//! Guarded, copy-on-write update of the request status.

use crate::models::{Donor, RequestStatus};

/// Mark help as requested for `donor_id`.
///
/// Unknown ids and unavailable donors leave the status unchanged; neither is
/// reported as an error. The input status is never mutated.
pub fn request_help(donors: &[Donor], status: &RequestStatus, donor_id: u64) -> RequestStatus {
    match donors.iter().find(|donor| donor.id == donor_id) {
        Some(donor) if donor.availability => status.with_requested(donor_id),
        _ => status.clone(),
    }
}
