//! Donor model matching the frontend Donor interface.

use serde::{Deserialize, Serialize};

use super::BloodGroup;

/// A user enriched with synthesized blood group and availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: u64,
    pub name: String,
    pub city: String,
    pub blood_group: BloodGroup,
    pub availability: bool,
}
