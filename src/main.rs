//! YILDIRIM Team Site Backend
//!
//! A production-grade REST backend with SQLite persistence serving the team's
//! public website and content-management admin panel.

mod api;
mod assist;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod roster;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use assist::AssistClient;
use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub assist: Arc<AssistClient>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting YILDIRIM Team Site Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (YILDIRIM_API_PSK). Admin authentication is disabled!");
    }
    if config.genai_api_key.is_none() {
        tracing::warn!("No generative API key configured. The writing assistant will be unavailable.");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Generative-text upstream client for the admin writing assistant
    let assist = Arc::new(AssistClient::new(
        config.genai_base_url.clone(),
        config.genai_api_key.clone(),
    ));

    // Create application state
    let state = AppState {
        repo,
        assist,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // Public site routes: landing page sections, news detail, contact form
    let public_routes = Router::new()
        .route("/revision", get(api::get_revision))
        .route("/roster", get(api::get_roster))
        .route("/roster/marquee", get(api::get_marquee))
        .route("/news", get(api::list_news))
        .route("/news/{id}", get(api::get_news))
        .route("/races", get(api::list_races))
        .route("/activities", get(api::list_activities))
        .route("/sponsors", get(api::list_sponsors))
        .route("/vehicles", get(api::list_vehicles))
        .route("/settings/{key}", get(api::get_setting))
        .route("/messages", post(api::submit_message));

    // Admin routes: content management, dashboard, writing assistant
    let admin_routes = Router::new()
        // Members
        .route("/members", get(api::list_members))
        .route("/members", post(api::create_member))
        .route("/members/{id}", get(api::get_member))
        .route("/members/{id}", put(api::update_member))
        .route("/members/{id}", delete(api::delete_member))
        // News
        .route("/news", post(api::create_news))
        .route("/news/{id}", put(api::update_news))
        .route("/news/{id}", delete(api::delete_news))
        // Races
        .route("/races", post(api::create_race))
        .route("/races/{id}", put(api::update_race))
        .route("/races/{id}", delete(api::delete_race))
        // Activities
        .route("/activities", post(api::create_activity))
        .route("/activities/{id}", put(api::update_activity))
        .route("/activities/{id}", delete(api::delete_activity))
        // Sponsors
        .route("/sponsors", post(api::create_sponsor))
        .route("/sponsors/{id}", put(api::update_sponsor))
        .route("/sponsors/{id}", delete(api::delete_sponsor))
        // Vehicles
        .route("/vehicles", post(api::create_vehicle))
        .route("/vehicles/{id}", put(api::update_vehicle))
        .route("/vehicles/{id}", delete(api::delete_vehicle))
        // Contact messages
        .route("/messages", get(api::list_messages))
        .route("/messages/{id}/read", put(api::mark_message_read))
        .route("/messages/{id}", delete(api::delete_message))
        // Site settings
        .route("/settings", get(api::list_settings))
        .route("/settings/{key}", put(api::put_setting))
        // Dashboard
        .route("/dashboard", get(api::get_dashboard))
        // Writing assistant
        .route("/assist", post(api::generate_text))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", public_routes.merge(admin_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
