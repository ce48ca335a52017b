//! In-memory session state.
//!
//! The session owns the loaded donors, the filter selection and the request
//! status for the lifetime of the process. Every effective change bumps the
//! revision id; no-op updates leave it untouched.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::donors::{available_count, filter_donors, map_users, request_help};
use crate::models::{
    Donor, DonorView, GroupFilter, RequestStatus, SessionInfo, SessionPhase, User, ViewState,
};

#[derive(Debug)]
struct SessionState {
    phase: SessionPhase,
    loaded_at: Option<DateTime<Utc>>,
    donors: Vec<Donor>,
    selected_group: GroupFilter,
    city_search: String,
    requests: RequestStatus,
    revision_id: i64,
}

/// Session store shared across handlers.
#[derive(Debug)]
pub struct Session {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    state: RwLock<SessionState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            state: RwLock::new(SessionState {
                phase: SessionPhase::Loading,
                loaded_at: None,
                donors: Vec::new(),
                selected_group: GroupFilter::All,
                city_search: String::new(),
                requests: RequestStatus::new(),
                revision_id: 0,
            }),
        }
    }

    /// Install the fetched users as donors. Only the first call has any effect.
    pub async fn complete_load(&self, users: &[User]) -> i64 {
        let mut state = self.state.write().await;

        if state.phase == SessionPhase::Ready {
            tracing::warn!("Ignoring repeated load for session {}", self.session_id);
            return state.revision_id;
        }

        state.donors = map_users(users);
        state.phase = SessionPhase::Ready;
        state.loaded_at = Some(Utc::now());
        state.revision_id += 1;

        tracing::info!(
            "Session {} ready with {} donors",
            self.session_id,
            state.donors.len()
        );
        state.revision_id
    }

    /// Get the current revision ID.
    pub async fn revision_id(&self) -> i64 {
        self.state.read().await.revision_id
    }

    /// Get session metadata.
    pub async fn info(&self) -> SessionInfo {
        let state = self.state.read().await;
        SessionInfo {
            session_id: self.session_id.to_string(),
            phase: state.phase,
            revision_id: state.revision_id,
            started_at: self.started_at.to_rfc3339(),
            loaded_at: state.loaded_at.map(|at| at.to_rfc3339()),
            donor_count: state.donors.len(),
        }
    }

    /// All donors in upstream order, empty while loading.
    pub async fn donors(&self) -> (Vec<Donor>, i64) {
        let state = self.state.read().await;
        (state.donors.clone(), state.revision_id)
    }

    /// Get a donor by ID.
    pub async fn donor(&self, id: u64) -> (Option<Donor>, i64) {
        let state = self.state.read().await;
        let donor = state.donors.iter().find(|d| d.id == id).cloned();
        (donor, state.revision_id)
    }

    pub async fn requests(&self) -> (RequestStatus, i64) {
        let state = self.state.read().await;
        (state.requests.clone(), state.revision_id)
    }

    /// Change the blood group selection.
    pub async fn select_group(&self, group: GroupFilter) -> i64 {
        let mut state = self.state.write().await;
        if state.selected_group != group {
            state.selected_group = group;
            state.revision_id += 1;
        }
        state.revision_id
    }

    /// Change the city search text. Stored as typed; trimming happens when filtering.
    pub async fn search_city(&self, city: String) -> i64 {
        let mut state = self.state.write().await;
        if state.city_search != city {
            state.city_search = city;
            state.revision_id += 1;
        }
        state.revision_id
    }

    /// Register a help request. Unknown or unavailable donors leave the status as is.
    pub async fn request_help(&self, donor_id: u64) -> (RequestStatus, i64) {
        let mut state = self.state.write().await;

        let next = request_help(&state.donors, &state.requests, donor_id);
        if next != state.requests {
            state.requests = next;
            state.revision_id += 1;
            tracing::info!(
                "Help requested from donor {} ({} requests this session)",
                donor_id,
                state.requests.len()
            );
        } else {
            tracing::debug!("Help request for donor {} left status unchanged", donor_id);
        }

        (state.requests.clone(), state.revision_id)
    }

    /// Recompute the filtered view from the current donors and selection.
    pub async fn view(&self) -> (DonorView, i64) {
        let state = self.state.read().await;

        let donors = filter_donors(&state.donors, state.selected_group, &state.city_search);
        let available = available_count(&donors);
        let view_state = match state.phase {
            SessionPhase::Loading => ViewState::Loading,
            SessionPhase::Ready if donors.is_empty() => ViewState::Empty,
            SessionPhase::Ready => ViewState::Ready,
        };

        let view = DonorView {
            state: view_state,
            selected_group: state.selected_group,
            city_search: state.city_search.clone(),
            donors,
            available_count: available,
            requests: state.requests.clone(),
        };
        (view, state.revision_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, BloodGroup};

    fn users() -> Vec<User> {
        [
            (1, "Leanne Graham", "Gwenborough"),
            (2, "Ervin Howell", "Wisokyburgh"),
            (3, "Clementine Bauch", "McKenziehaven"),
            (9, "Glenna Reichert", "Bartholomebury"),
            (10, "Clementina DuBuque", "Lebsackbury"),
        ]
        .into_iter()
        .map(|(id, name, city)| User {
            id,
            name: name.to_string(),
            address: Address {
                city: city.to_string(),
            },
        })
        .collect()
    }

    #[tokio::test]
    async fn test_loading_is_distinct_from_empty() {
        let session = Session::new();

        let (view, revision) = session.view().await;
        assert_eq!(view.state, ViewState::Loading);
        assert!(view.donors.is_empty());
        assert_eq!(revision, 0);

        session.complete_load(&[]).await;
        let (view, _) = session.view().await;
        assert_eq!(view.state, ViewState::Empty);
        assert_eq!(view.available_count, 0);
    }

    #[tokio::test]
    async fn test_complete_load_once() {
        let session = Session::new();
        assert_eq!(session.complete_load(&users()).await, 1);
        assert_eq!(session.complete_load(&[]).await, 1);

        let info = session.info().await;
        assert_eq!(info.phase, SessionPhase::Ready);
        assert_eq!(info.donor_count, 5);
        assert!(info.loaded_at.is_some());
    }

    #[tokio::test]
    async fn test_view_filters_and_counts() {
        let session = Session::new();
        session.complete_load(&users()).await;

        let (view, _) = session.view().await;
        assert_eq!(view.state, ViewState::Ready);
        assert_eq!(view.donors.len(), 5);
        assert_eq!(view.available_count, 3);

        session.search_city("  BURY ".to_string()).await;
        let (view, _) = session.view().await;
        let ids: Vec<u64> = view.donors.iter().map(|d| d.id).collect();
        assert_eq!(ids, [9, 10]);
        assert_eq!(view.available_count, 1);
        assert_eq!(view.city_search, "  BURY ");

        session
            .select_group(GroupFilter::Only(BloodGroup::BPositive))
            .await;
        let (view, _) = session.view().await;
        let ids: Vec<u64> = view.donors.iter().map(|d| d.id).collect();
        assert_eq!(ids, [10]);

        session.search_city("xyz".to_string()).await;
        let (view, _) = session.view().await;
        assert_eq!(view.state, ViewState::Empty);
    }

    #[tokio::test]
    async fn test_selection_revision_only_on_change() {
        let session = Session::new();
        session.complete_load(&users()).await;

        let before = session.revision_id().await;
        assert_eq!(session.select_group(GroupFilter::All).await, before);
        assert_eq!(session.search_city(String::new()).await, before);

        let after = session.select_group(GroupFilter::Only(BloodGroup::ONegative)).await;
        assert_eq!(after, before + 1);
    }

    #[tokio::test]
    async fn test_request_help_revisions() {
        let session = Session::new();
        session.complete_load(&users()).await;
        let start = session.revision_id().await;

        let (status, revision) = session.request_help(2).await;
        assert!(status.is_requested(2));
        assert_eq!(revision, start + 1);

        let (status, revision) = session.request_help(2).await;
        assert_eq!(status.len(), 1);
        assert_eq!(revision, start + 1);

        let (status, revision) = session.request_help(3).await;
        assert!(!status.is_requested(3));
        assert_eq!(revision, start + 1);

        let (status, revision) = session.request_help(404).await;
        assert_eq!(status.len(), 1);
        assert_eq!(revision, start + 1);

        let (view, _) = session.view().await;
        assert!(view.requests.is_requested(2));
    }

    #[tokio::test]
    async fn test_request_help_while_loading() {
        let session = Session::new();
        let (status, revision) = session.request_help(1).await;
        assert!(status.is_empty());
        assert_eq!(revision, 0);
    }

    #[tokio::test]
    async fn test_donor_lookup() {
        let session = Session::new();
        session.complete_load(&users()).await;

        let (donor, _) = session.donor(9).await;
        let donor = donor.unwrap();
        assert_eq!(donor.blood_group, BloodGroup::ANegative);
        assert!(!donor.availability);

        assert!(session.donor(11).await.0.is_none());
    }
}
