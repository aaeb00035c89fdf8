use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;
use rollcall_api::config::ApiConfig;
use rollcall_api::suggest::{HttpSuggestionClient, SuggestionClient};
use rollcall_api::ApiState;
use rollcall_db::repositories::{PgRosterStore, PgScheduleStore};
use rollcall_db::schema::initialize_database;
use rollcall_db::store::{RosterStore, ScheduleStore};
use rollcall_engine::lifecycle::LifecycleEngine;
use rollcall_engine::roster::RosterService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = ApiConfig::from_env()?;
    info!(host = %config.host, port = config.port, "starting rollcall server");

    // Create database connection pool
    let db_pool = rollcall_db::create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Wire the roster and schedule services on top of the Postgres stores
    let roster_store: Arc<dyn RosterStore> = Arc::new(PgRosterStore::new(db_pool.clone()));
    let schedule_store: Arc<dyn ScheduleStore> = Arc::new(PgScheduleStore::new(db_pool.clone()));

    let roster = Arc::new(RosterService::new(roster_store).await?);
    let engine = Arc::new(LifecycleEngine::new(schedule_store, roster.clone()));

    // Evaluate once before serving so the first request sees fresh statuses,
    // then keep the schedule in step with the wall clock in the background.
    engine.refresh().await?;
    let _ticker = engine.spawn_periodic(Duration::from_secs(config.tick_interval));

    let suggestions: Option<Arc<dyn SuggestionClient>> = match &config.suggestion {
        Some(settings) => Some(Arc::new(HttpSuggestionClient::new(
            settings.endpoint.clone(),
            settings.api_key.clone(),
            settings.model.clone(),
        )?)),
        None => None,
    };

    let state = Arc::new(ApiState {
        roster,
        engine,
        suggestions,
        staff_password: config.staff_password.clone(),
    });

    // Start API server
    rollcall_api::start_server(config, state).await?;

    Ok(())
}
