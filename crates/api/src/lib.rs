//! # Rollcall API
//!
//! The HTTP surface of the Rollcall attendance service. It exposes REST
//! endpoints for the roster, the class schedule, attendance marking, student
//! and staff login, and the LLM-backed suggestion flows.
//!
//! ## Architecture
//!
//! - **Routes**: endpoint and URL structure, one module per resource
//! - **Handlers**: request processing on top of the engine crate's services
//! - **Middleware**: error mapping and password hashing
//! - **Config**: environment-driven settings
//!
//! The server owns no domain state of its own: every handler goes through
//! [`rollcall_engine::roster::RosterService`] or
//! [`rollcall_engine::lifecycle::LifecycleEngine`], so HTTP consumers and
//! in-process subscribers always observe the same view.

/// Configuration for server, database, engine and suggestion settings
pub mod config;
/// Request handlers implementing the endpoint logic
pub mod handlers;
/// Error mapping and credential hashing
pub mod middleware;
/// Route definitions
pub mod routes;
/// The suggestion (LLM) collaborator client
pub mod suggest;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use tokio::net::TcpListener;
use tracing::info;

use rollcall_engine::lifecycle::LifecycleEngine;
use rollcall_engine::roster::RosterService;

use crate::suggest::SuggestionClient;

/// Shared application state handed to every request handler.
pub struct ApiState {
    pub roster: Arc<RosterService>,
    pub engine: Arc<LifecycleEngine>,
    /// Absent when no suggestion endpoint is configured; the suggestion
    /// routes then reject with a clear message instead of failing late.
    pub suggestions: Option<Arc<dyn SuggestionClient>>,
    /// Shared staff password for the role-based login; absent disables
    /// staff logins entirely.
    pub staff_password: Option<String>,
}

/// Starts the HTTP server with the provided configuration and state.
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Login endpoint
        .merge(routes::auth::routes())
        // Roster management endpoints
        .merge(routes::students::routes())
        // Schedule management endpoints
        .merge(routes::classes::routes())
        // Attendance marking endpoints
        .merge(routes::attendance::routes())
        // Suggestion and routine generation endpoints
        .merge(routes::suggestions::routes())
        // Attach shared state to all routes
        .with_state(state)
        // Request logging and per-request timeout
        .layer(
            tower::ServiceBuilder::new()
                .layer(tower_http::trace::TraceLayer::new_for_http())
                .layer(tower_http::timeout::TimeoutLayer::new(
                    std::time::Duration::from_secs(config.request_timeout),
                )),
        );

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
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
