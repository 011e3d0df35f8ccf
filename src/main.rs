//! Aria Backend
//!
//! State service for the Aria executive assistant demo: a mock dataset held in
//! memory, persisted as a single JSON snapshot in a local SQLite key-value table.

mod api;
mod config;
mod db;
mod errors;
mod gate;
mod models;
mod seed;
mod store;
mod views;

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use seed::Seed;
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
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

    tracing::info!("Starting Aria backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Seed anchor: {}", config.seed_anchor.to_rfc3339());
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Repository::new(pool);

    // Rehydrate the store over the seed
    let store = Arc::new(Store::open(repo, &Seed::new(config.seed_anchor)).await?);
    spawn_change_logger(&store);

    let state = AppState { store };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Log every published snapshot until the store goes away.
fn spawn_change_logger(store: &Store) {
    let mut changes = store.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let snapshot = changes.borrow_and_update().clone();
            tracing::debug!(
                tasks = snapshot.tasks.len(),
                notifications = snapshot.notifications.len(),
                onboarding_completed = snapshot.is_onboarding_complete(),
                "Snapshot published"
            );
        }
    });
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Whole state
        .route("/state", get(api::get_state))
        .route("/state/revision", get(api::get_revision))
        .route("/export", get(api::export_state))
        .route("/reset", post(api::reset_state))
        .route("/gate", get(api::resolve_gate))
        // Onboarding
        .route("/onboarding", get(api::get_onboarding))
        .route("/onboarding/step", put(api::set_onboarding_step))
        .route("/onboarding/complete", post(api::complete_onboarding))
        .route("/onboarding/avatar", put(api::select_avatar))
        .route("/onboarding/sources", post(api::add_connected_source))
        .route("/onboarding/first-project", put(api::set_first_project))
        .route(
            "/onboarding/priority-contacts",
            post(api::add_priority_contact),
        )
        .route(
            "/onboarding/priority-contacts/{id}",
            delete(api::remove_priority_contact),
        )
        // Workspace
        .route("/dashboard", get(api::get_dashboard))
        .route("/context", get(api::get_context).put(api::set_current_project))
        .route("/messages/{id}/read", post(api::mark_message_as_read))
        .route("/tasks", post(api::create_task))
        .route("/tasks/{id}/status", put(api::update_task_status))
        .route("/projects", post(api::create_project))
        .route("/projects/{id}", get(api::get_project_overview))
        // Knowledge
        .route("/knowledge", get(api::get_knowledge))
        .route("/folders", post(api::create_folder))
        .route("/documents", post(api::create_document))
        // Calendar
        .route("/calendar", get(api::list_calendar))
        .route("/calendar/{id}", patch(api::update_calendar_event))
        .route("/calendar/{id}/resolve", post(api::resolve_conflict))
        // Notifications and suggestions
        .route(
            "/notifications",
            get(api::get_notifications).post(api::create_notification),
        )
        .route(
            "/notifications/{id}/read",
            post(api::mark_notification_as_read),
        )
        .route("/suggestions", get(api::list_suggestions))
        .route("/suggestions/{id}/accept", post(api::accept_suggestion))
        .route("/suggestions/{id}/reject", post(api::reject_suggestion))
        // Meetings
        .route("/meetings", get(api::get_meetings))
        .route("/meetings/{id}/status", put(api::update_meeting_status))
        .route("/meetings/{id}/minutes/confirm", post(api::confirm_minutes))
        // Settings
        .route("/settings", get(api::get_settings))
        .route(
            "/settings/notifications",
            patch(api::update_notification_preferences),
        )
        .route("/settings/avatar", put(api::update_avatar))
        // Assistant
        .route(
            "/assistant/messages",
            get(api::list_assistant_messages)
                .post(api::add_assistant_message)
                .delete(api::clear_assistant_messages),
        )
        .route("/assistant/mode", put(api::set_assistant_mode));

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
