//! Session, view and request-body models exposed by the API.

use serde::{Deserialize, Serialize};

use super::{Donor, GroupFilter, RequestStatus};

/// Whether the one-shot user fetch has resolved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Loading,
    Ready,
}

/// What the rendering layer should show for the current filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// The user fetch has not resolved yet.
    Loading,
    /// Loaded, but no donor passes the current filter.
    Empty,
    /// At least one donor passes the current filter.
    Ready,
}

/// Session metadata for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: String,
    pub phase: SessionPhase,
    pub revision_id: i64,
    pub started_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,
    pub donor_count: usize,
}

/// The filtered donor grid with its derived values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorView {
    pub state: ViewState,
    pub selected_group: GroupFilter,
    pub city_search: String,
    pub donors: Vec<Donor>,
    pub available_count: usize,
    pub requests: RequestStatus,
}

/// Request body for changing the blood group selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectGroupRequest {
    pub group: String,
}

/// Request body for changing the city search text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCityRequest {
    #[serde(default)]
    pub city: String,
}
