//! Startup migration runner.
//!
//! Embeds the SQL migrations in the binary and applies any that are
//! pending before the server accepts traffic. Diesel migrations run on a
//! synchronous connection, so the work is moved onto a blocking thread.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled in from `backend/migrations/`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors raised while applying migrations at startup.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database connection could not be established.
    #[error("failed to connect for migrations: {0}")]
    Connection(#[from] diesel::ConnectionError),
    /// A migration failed to apply.
    #[error("failed to apply migrations: {0}")]
    Apply(String),
    /// The blocking migration task was cancelled or panicked.
    #[error("migration task failed: {0}")]
    Task(String),
}

/// Apply any pending migrations, returning how many ran.
pub async fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let database_url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&database_url)?;
        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply(err.to_string()))?;
        Ok::<_, MigrationError>(versions.len())
    })
    .await
    .map_err(|err| MigrationError::Task(err.to_string()))??;

    info!(applied, "database migrations up to date");
    Ok(applied)
}
