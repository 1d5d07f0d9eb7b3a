//! Application state for survey-server

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// Holds no per-request data; each report request checks out its own
/// connection from `pool`.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// JWT secret for staff authentication
    pub jwt_secret: String,
}

impl AppState {
    /// Create a new AppState, connecting to the datastore
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .idle_timeout(std::time::Duration::from_secs(600))
            .max_lifetime(std::time::Duration::from_secs(1800))
            .connect(&config.database_url)
            .await?;

        tracing::info!("Connected to PostgreSQL");

        if config.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Migrations applied");
        }

        Ok(Self::with_pool(pool, config.jwt_secret.clone()))
    }

    /// Build state around an existing pool
    pub fn with_pool(pool: PgPool, jwt_secret: String) -> Self {
        Self { pool, jwt_secret }
    }
}
