//! Help request API endpoints.

use axum::extract::{rejection::PathRejection, Path, State};

use super::{rejected, success, ApiResult};
use crate::models::RequestStatus;
use crate::AppState;

/// GET /api/requests - Get the current request status.
pub async fn list_requests(State(state): State<AppState>) -> ApiResult<RequestStatus> {
    let (requests, revision_id) = state.session.requests().await;
    success(requests, revision_id)
}

/// POST /api/donors/:id/request - Request help from a donor.
///
/// Unknown and unavailable donors are not errors; the unchanged status is returned.
pub async fn request_donor_help(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<RequestStatus> {
    let id = match path {
        Ok(Path(id)) => id,
        Err(e) => return rejected(&state, e).await,
    };

    let (requests, revision_id) = state.session.request_help(id).await;
    success(requests, revision_id)
}
