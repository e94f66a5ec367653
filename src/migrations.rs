//! Embedded database migrations.

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

static SQLITE_MIGRATOR: Migrator = sqlx::migrate!("migrations/sqlite");

/// Apply all pending SQLite migrations.
pub async fn run_sqlite(pool: &SqlitePool) -> anyhow::Result<()> {
    SQLITE_MIGRATOR.run(pool).await?;
    Ok(())
}
