//! Donor Finder Backend
//!
//! Serves a donor directory derived from a public user list, with blood group
//! and city filtering and an in-memory help request tracker.

mod api;
mod auth;
mod config;
mod donors;
mod errors;
mod models;
mod session;
mod upstream;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use reqwest::Client;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use session::Session;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Session>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Donor Finder Backend");
    tracing::info!("User directory: {}", config.users_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (DONORS_API_PSK). Authentication is disabled!");
    }

    let client = upstream::build_client(config.fetch_timeout)?;

    // Create application state
    let state = AppState {
        session: Arc::new(Session::new()),
        config: Arc::new(config.clone()),
    };

    // The server answers "loading" until the directory fetch resolves.
    spawn_initial_load(state.session.clone(), client, config.users_url.clone());

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Fetch the user directory once in the background and install it in the session.
pub fn spawn_initial_load(
    session: Arc<Session>,
    client: Client,
    users_url: String,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let users = upstream::load_users(&client, &users_url).await;
        session.complete_load(&users).await;
    })
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let psk = state.config.api_psk.clone();

    // API routes
    let api_routes = Router::new()
        // Session
        .route("/session", get(api::get_session))
        .route("/blood-groups", get(api::list_blood_groups))
        // Donors
        .route("/donors", get(api::list_donors))
        .route("/donors/{id}", get(api::get_donor))
        .route("/donors/{id}/request", post(api::request_donor_help))
        // Requests
        .route("/requests", get(api::list_requests))
        // View
        .route("/view", get(api::get_view))
        .route("/view/group", put(api::select_group))
        .route("/view/city", put(api::search_city))
        .layer(middleware::from_fn(move |req, next| {
            auth::require_api_key(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
