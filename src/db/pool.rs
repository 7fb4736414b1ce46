//! Async connection pool over diesel-async and bb8.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use std::time::Duration;
use tracing::info;

/// Shared connection pool type used throughout the application.
///
/// bb8::Pool is internally reference counted, so structures holding an
/// `AsyncDbPool` can derive Clone without extra Arc wrapping.
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Builds the connection pool from database settings.
///
/// `min_connections` are opened eagerly, so a bad URL fails here rather
/// than on the first request.
pub async fn establish_async_connection_pool(
    config: &DatabaseConfig,
) -> Result<AsyncDbPool, AppError> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.url);

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)
        .await
        .map_err(|e| AppError::Configuration {
            key: "database.url".to_string(),
            source: anyhow::Error::new(e),
        })?;

    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool established"
    );

    Ok(pool)
}
