//! Donor view API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::{rejected, success, ApiResult};
use crate::errors::AppError;
use crate::models::{DonorView, GroupFilter, SearchCityRequest, SelectGroupRequest};
use crate::AppState;

/// GET /api/view - Get the filtered donor view.
pub async fn get_view(State(state): State<AppState>) -> ApiResult<DonorView> {
    let (view, revision_id) = state.session.view().await;
    success(view, revision_id)
}

/// PUT /api/view/group - Select a blood group (or "All").
pub async fn select_group(
    State(state): State<AppState>,
    body: Result<Json<SelectGroupRequest>, JsonRejection>,
) -> ApiResult<DonorView> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(e) => return rejected(&state, e).await,
    };

    let group = match request.group.parse::<GroupFilter>() {
        Ok(group) => group,
        Err(message) => return rejected(&state, AppError::BadRequest(message)).await,
    };

    state.session.select_group(group).await;
    let (view, revision_id) = state.session.view().await;
    success(view, revision_id)
}

/// PUT /api/view/city - Set the city search text.
pub async fn search_city(
    State(state): State<AppState>,
    body: Result<Json<SearchCityRequest>, JsonRejection>,
) -> ApiResult<DonorView> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(e) => return rejected(&state, e).await,
    };

    state.session.search_city(request.city).await;
    let (view, revision_id) = state.session.view().await;
    success(view, revision_id)
}
