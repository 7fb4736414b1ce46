//! Database access: connection pooling and embedded migrations.

pub mod pool;

pub use pool::{AsyncDbPool, establish_async_connection_pool};

use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled into the binary from `migrations/`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Applies pending migrations over a dedicated synchronous connection.
///
/// Runs on the blocking pool; the migration harness is synchronous.
pub async fn run_migrations(database_url: &str) -> anyhow::Result<()> {
    let url = database_url.to_string();

    tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let mut conn = diesel::PgConnection::establish(&url)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!("failed to run migrations: {e}"))?;

        if applied.is_empty() {
            info!("No pending migrations");
        }
        for version in applied {
            info!(migration = %version, "Applied migration");
        }

        Ok(())
    })
    .await?
}
