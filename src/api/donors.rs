//! Donor API endpoints.

use axum::extract::{rejection::PathRejection, Path, State};

use super::{error, rejected, success, ApiResult};
use crate::errors::AppError;
use crate::models::Donor;
use crate::AppState;

/// GET /api/donors - List all donors.
pub async fn list_donors(State(state): State<AppState>) -> ApiResult<Vec<Donor>> {
    let (donors, revision_id) = state.session.donors().await;
    success(donors, revision_id)
}

/// GET /api/donors/:id - Get a single donor.
pub async fn get_donor(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Donor> {
    let id = match path {
        Ok(Path(id)) => id,
        Err(e) => return rejected(&state, e).await,
    };

    match state.session.donor(id).await {
        (Some(donor), revision_id) => success(donor, revision_id),
        (None, revision_id) => error(
            AppError::NotFound(format!("Donor {} not found", id)),
            revision_id,
        ),
    }
}
