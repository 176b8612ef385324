//! Core record types shared by the ranker, providers and CLI.
//!
//! All records are read-only after load. Metric fields on [`Row`] are plain
//! `f64` so that missing or malformed readings can be carried as non-finite
//! values and dropped at ranking time instead of failing the load.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RankboardError;

// ── Interviewer rows ─────────────────────────────────────────────────────────

/// Time-period bucket a row's figures were collected over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    pub fn key(&self) -> &'static str {
        match self {
            Period::Day => "DAY",
            Period::Week => "WEEK",
            Period::Month => "MONTH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Day => "Today",
            Period::Week => "This week",
            Period::Month => "This month",
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Period {
    type Err = RankboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DAY" => Ok(Period::Day),
            "WEEK" => Ok(Period::Week),
            "MONTH" => Ok(Period::Month),
            _ => Err(RankboardError::UnknownPeriod(s.to_string())),
        }
    }
}

/// One interviewer's figures for a single period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub interviewer_id: u32,
    pub name: String,
    pub team: String,
    /// Completed interviews
    #[serde(default = "missing_metric", deserialize_with = "metric_or_nan")]
    pub completed: f64,
    /// Response rate, percent
    #[serde(default = "missing_metric", deserialize_with = "metric_or_nan")]
    pub conversion_rate: f64,
    /// Average interview length in minutes (lower is better)
    #[serde(default = "missing_metric", deserialize_with = "metric_or_nan")]
    pub avg_duration: f64,
    /// Quality-assurance score
    #[serde(default = "missing_metric", deserialize_with = "metric_or_nan")]
    pub qa_score: f64,
    pub period: Period,
}

fn missing_metric() -> f64 {
    f64::NAN
}

/// Accepts a number or `null`; `null` becomes NaN so ranking drops the row.
fn metric_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

// ── Performance cohort ───────────────────────────────────────────────────────

/// A named entity's average duration, the input to the percentile ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEntry {
    pub name: String,
    pub avg_duration: f64,
}

impl PerformanceEntry {
    pub fn new(name: impl Into<String>, avg_duration: f64) -> Self {
        Self { name: name.into(), avg_duration }
    }
}

// ── Projects ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Success,
    #[serde(rename = "In Progress")]
    InProgress,
    Delayed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] =
        [ProjectStatus::Success, ProjectStatus::InProgress, ProjectStatus::Delayed];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Success => "Success",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Delayed => "Delayed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = RankboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalised.as_str() {
            "success" => Ok(ProjectStatus::Success),
            "inprogress" => Ok(ProjectStatus::InProgress),
            "delayed" => Ok(ProjectStatus::Delayed),
            _ => Err(RankboardError::UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub created: NaiveDate,
    /// Member names, looked up against the performance cohort
    pub members: Vec<String>,
    /// Completion, 0–100
    pub progress: u8,
    pub status: ProjectStatus,
}
