//! rankboard-common — Shared types and errors used across all Rankboard crates.

pub mod error;
pub mod entities;
pub mod metric;

// Re-export commonly used types
pub use entities::{PerformanceEntry, Period, Project, ProjectStatus, Row};
pub use error::{RankboardError, Result};
pub use metric::Metric;
