//! Session API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::{GroupFilter, SessionInfo};
use crate::AppState;

/// GET /api/session - Get session metadata.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<SessionInfo> {
    let info = state.session.info().await;
    let revision_id = info.revision_id;
    success(info, revision_id)
}

/// GET /api/blood-groups - List the selectable blood group filters.
pub async fn list_blood_groups(State(state): State<AppState>) -> ApiResult<Vec<GroupFilter>> {
    let revision_id = state.session.revision_id().await;
    success(GroupFilter::options(), revision_id)
}
