//! Metric selector for the interviewer leaderboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Row;
use crate::error::RankboardError;

/// Which numeric field of a [`Row`] drives ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Completed,
    ConversionRate,
    QaScore,
    AvgDuration,
}

impl Metric {
    /// Selector order as presented to users.
    pub const ALL: [Metric; 4] = [
        Metric::Completed,
        Metric::ConversionRate,
        Metric::QaScore,
        Metric::AvgDuration,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::Completed => "completed",
            Metric::ConversionRate => "conversion_rate",
            Metric::QaScore => "qa_score",
            Metric::AvgDuration => "avg_duration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Completed => "Completed interviews",
            Metric::ConversionRate => "Response rate %",
            Metric::QaScore => "QA score",
            Metric::AvgDuration => "Avg duration (min), lower is better",
        }
    }

    /// True when a smaller reading ranks higher.
    pub fn inverted(&self) -> bool {
        matches!(self, Metric::AvgDuration)
    }

    pub fn value_of(&self, row: &Row) -> f64 {
        match self {
            Metric::Completed => row.completed,
            Metric::ConversionRate => row.conversion_rate,
            Metric::QaScore => row.qa_score,
            Metric::AvgDuration => row.avg_duration,
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Completed
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = RankboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Metric::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| RankboardError::UnknownMetric(s.to_string()))
    }
}
