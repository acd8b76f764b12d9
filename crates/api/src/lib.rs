//! # Rotaplan API
//!
//! The API crate provides the web server for the rotaplan duty-rota service.
//! It exposes endpoints for managing the roster, unavailability constraints,
//! holidays, and the generated schedule.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! ## Session model
//!
//! Handlers work against a single in-memory [`RosterState`] session guarded
//! by an `RwLock`. Mutations apply to the session first and are then replayed
//! against the store best-effort: a store failure leaves the session ahead of
//! the store (`synced: false` in the response) until `/api/state/reload`
//! re-fetches everything.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use rotaplan_core::engine::GeneratorConfig;
use rotaplan_core::state::RosterState;
use rotaplan_db::RosterStore;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// The persistence collaborator
    pub store: Arc<dyn RosterStore>,
    /// The in-memory session every handler reads and mutates
    pub session: RwLock<RosterState>,
    /// Generator knobs: duty weekday and fairness policy
    pub generator: GeneratorConfig,
}

/// Builds the application router over the given state.
///
/// Split out of [`start_server`] so tests can drive the router directly.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Session snapshot and reload endpoints
        .merge(routes::state::routes())
        // Roster management endpoints
        .merge(routes::roster::routes())
        // Unavailability constraint endpoints
        .merge(routes::constraints::routes())
        // Holiday endpoints
        .merge(routes::holidays::routes())
        // Schedule generation and reporting endpoints
        .merge(routes::schedule::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and store.
///
/// This function initializes logging, loads the session from the store,
/// configures routes, and starts the HTTP server.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn RosterStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load the session from the store
    let snapshot = store.fetch_all().await?;
    let session = RosterState::from_snapshot(&snapshot);
    info!(
        "Session loaded: {} people, {} constraints, {} schedule entries, {} holidays",
        session.people.len(),
        session.constraints.len(),
        session.schedule.len(),
        session.holidays.len()
    );

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        store,
        session: RwLock::new(session),
        generator: config.generator(),
    });

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect::<Vec<_>>();
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
