pub mod matches;
pub mod models;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Platform data directory for the app, created on first use.
pub fn data_dir() -> Result<PathBuf> {
    let mut path = dirs::data_dir()
        .context("Unable to determine data directory for your platform")?;

    path.push("cricket-scorer");

    std::fs::create_dir_all(&path)
        .context("Failed to create cricket-scorer data directory")?;

    Ok(path)
}

/// Get the path to the database file using platform-specific data directory
pub fn get_db_path() -> Result<PathBuf> {
    let mut path = data_dir()?;
    path.push("matches.db");
    Ok(path)
}

/// Create a connection pool to the default database
pub async fn create_pool() -> Result<SqlitePool> {
    let db_path = get_db_path()?;
    connect(&db_path).await
}

/// Open (creating if needed) the database at `db_path` and run migrations.
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to database at {}", db_path.display()))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(path = %db_path.display(), "database ready");
    Ok(pool)
}
