use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};

use super::models::{MatchSummary, deserialize_match, format_timestamp, serialize_match};
use crate::scoring::{Match, TeamKey};

/// Insert or replace the snapshot stored under the match id
pub async fn save_match(pool: &SqlitePool, m: &Match) -> Result<()> {
    let snapshot = serialize_match(m)?;
    let result = m.result().map(|r| r.to_string());

    sqlx::query(
        r#"
        INSERT INTO matches (id, created_at, updated_at, team_a, team_b, result, snapshot)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            updated_at = excluded.updated_at,
            team_a = excluded.team_a,
            team_b = excluded.team_b,
            result = excluded.result,
            snapshot = excluded.snapshot
        "#,
    )
    .bind(m.id())
    .bind(format_timestamp(m.created_at()))
    .bind(format_timestamp(m.updated_at()))
    .bind(m.team(TeamKey::A).name.as_str())
    .bind(m.team(TeamKey::B).name.as_str())
    .bind(result)
    .bind(snapshot)
    .execute(pool)
    .await
    .context("Failed to save match")?;

    tracing::debug!(id = m.id(), "match saved");
    Ok(())
}

/// Get all saved matches, most recently updated first
pub async fn list_matches(pool: &SqlitePool) -> Result<Vec<MatchSummary>> {
    let rows = sqlx::query(
        r#"
        SELECT id, created_at, updated_at, team_a, team_b, result
        FROM matches
        ORDER BY updated_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .context("Failed to list matches")?;

    rows.iter().map(MatchSummary::from_row).collect()
}

/// Load a match snapshot by id
pub async fn load_match(pool: &SqlitePool, id: &str) -> Result<Option<Match>> {
    let row = sqlx::query(
        r#"
        SELECT snapshot FROM matches
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to load match")?;

    match row {
        Some(row) => {
            let snapshot: String = row.try_get("snapshot")?;
            Ok(Some(deserialize_match(&snapshot)?))
        }
        None => Ok(None),
    }
}

/// Delete every saved match, returning how many were removed
pub async fn delete_all_matches(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM matches")
        .execute(pool)
        .await
        .context("Failed to delete matches")?;

    tracing::info!(deleted = result.rows_affected(), "all matches deleted");
    Ok(result.rows_affected())
}
