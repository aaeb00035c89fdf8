//! Postgres persistence for the attendance service: pool construction,
//! schema bootstrap, the store traits the engine consumes, and their
//! repository implementations (plus mockall doubles for tests).

pub mod mock;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

use std::time::Duration;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// The whole workload is a handful of short point queries; a small pool
/// with a bounded acquire wait keeps a wedged database from piling up
/// request tasks.
const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared connection pool. Connects eagerly, so a bad
/// `DATABASE_URL` fails at startup instead of on the first request.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;

    Ok(pool)
}
