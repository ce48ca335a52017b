//! User directory client.
//!
//! One GET per session. Any failure (network, non-2xx status, a body that is
//! not a JSON array) collapses to an empty user list in [`load_users`].
//! Individual malformed entries are dropped so they never reach the mapper.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::User;

/// Build the HTTP client used for the directory fetch.
pub fn build_client(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(AppError::from)
}

/// Fetch and decode the user list.
pub async fn fetch_users(client: &Client, url: &str) -> Result<Vec<User>, AppError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Upstream(format!(
            "User directory responded with {}",
            status
        )));
    }

    let body = response.bytes().await?;
    let entries: Vec<Value> = serde_json::from_slice(&body)?;
    debug!("User directory returned {} entries", entries.len());

    Ok(decode_users(entries))
}

/// Fetch the user list, treating every failure as an empty directory.
pub async fn load_users(client: &Client, url: &str) -> Vec<User> {
    match fetch_users(client, url).await {
        Ok(users) => {
            info!("Loaded {} users from {}", users.len(), url);
            users
        }
        Err(e) => {
            warn!("Failed to load users from {}: {}", url, e);
            Vec::new()
        }
    }
}

fn decode_users(entries: Vec<Value>) -> Vec<User> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<User>(entry) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Skipping malformed user at index {}: {}", index, e);
                None
            }
        })
        .collect()
}
