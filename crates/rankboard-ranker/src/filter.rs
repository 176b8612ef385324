//! Team / period / name-search filtering applied ahead of ranking.

use rankboard_common::{Period, Row};
use serde::Serialize;

/// Selector value meaning "no restriction".
pub const ALL: &str = "ALL";

/// Trim and lower-case a search query.
pub fn normalise_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// True when `name` contains an already normalised query. Empty matches all.
pub fn name_matches(name: &str, normalised_query: &str) -> bool {
    normalised_query.is_empty() || name.to_lowercase().contains(normalised_query)
}

/// Parse a team selector; `ALL` (any case) or blank means every team.
pub fn parse_team(selector: &str) -> Option<String> {
    let trimmed = selector.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Teams in first-seen order.
pub fn distinct_teams(rows: &[Row]) -> Vec<String> {
    let mut teams: Vec<String> = Vec::new();
    for row in rows {
        if !teams.contains(&row.team) {
            teams.push(row.team.clone());
        }
    }
    teams
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct RowFilter {
    /// `None` = all teams
    pub team: Option<String>,
    pub period: Period,
    /// Stored normalised
    query: String,
}

impl RowFilter {
    pub fn new(team: Option<String>, period: Period, query: &str) -> Self {
        Self { team, period, query: normalise_query(query) }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.team.as_deref().map_or(true, |t| row.team == t)
            && row.period == self.period
            && name_matches(&row.name, &self.query)
    }

    pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
