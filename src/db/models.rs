use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{Row, sqlite::SqliteRow};

use crate::scoring::Match;

/// Represents a saved match in the library listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub team_a: String,
    pub team_b: String,
    pub result: Option<String>,
}

impl MatchSummary {
    pub fn from_row(row: &SqliteRow) -> Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
            updated_at: parse_timestamp(&row.try_get::<String, _>("updated_at")?)?,
            team_a: row.try_get("team_a")?,
            team_b: row.try_get("team_b")?,
            result: row.try_get("result")?,
        })
    }

    /// `"<date> • A vs B"` label used when picking a match to load.
    pub fn label(&self) -> String {
        format!(
            "{} • {} vs {}",
            self.created_at.format("%Y-%m-%d"),
            self.team_a,
            self.team_b
        )
    }
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let ts = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("Invalid timestamp in database: {}", s))?;
    Ok(ts.with_timezone(&Utc))
}

/// Serialize a whole match, undo history included, for storage
pub fn serialize_match(m: &Match) -> Result<String> {
    serde_json::to_string(m).context("Failed to serialize match")
}

/// Deserialize a stored match snapshot
pub fn deserialize_match(json: &str) -> Result<Match> {
    serde_json::from_str(json).context("Failed to deserialize match snapshot")
}
