//! Trait for dashboard data access.
//!
//! Provides an abstraction over where interviewer rows, the performance
//! cohort and the project list come from, so ranking and percentile code
//! never depends on the data's origin.

use std::path::{Path, PathBuf};

use rankboard_common::{PerformanceEntry, Project, RankboardError, Result, Row};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::demo;

/// Read-only source of the three record sets.
///
/// Implementations can use:
/// - Built-in demo data
/// - A JSON / YAML dataset file
/// - Mock data (testing)
pub trait DataProvider: Send + Sync {
    /// Short human-readable source name for logs.
    fn name(&self) -> &str;

    /// Current interviewer rows, all periods.
    fn fetch_rows(&self) -> Vec<Row>;

    /// The performance cohort, in its defined order.
    fn fetch_performance(&self) -> Vec<PerformanceEntry>;

    fn fetch_projects(&self) -> Vec<Project>;
}

// ── Demo ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

impl DataProvider for DemoProvider {
    fn name(&self) -> &str {
        "demo"
    }

    fn fetch_rows(&self) -> Vec<Row> {
        demo::interviewers()
    }

    fn fetch_performance(&self) -> Vec<PerformanceEntry> {
        demo::performance()
    }

    fn fetch_projects(&self) -> Vec<Project> {
        demo::projects()
    }
}

// ── File-backed dataset ──────────────────────────────────────────────────────

/// On-disk dataset document. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub interviewers: Vec<Row>,
    #[serde(default)]
    pub performance: Vec<PerformanceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Dataset loaded once from a `.json`, `.yaml` or `.yml` file.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
    label: String,
    dataset: Dataset,
}

impl FileProvider {
    pub fn open(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let content = std::fs::read_to_string(path)?;
        let dataset: Dataset = match extension.as_str() {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => return Err(RankboardError::UnsupportedFormat(path.display().to_string())),
        };

        info!(
            path = %path.display(),
            interviewers = dataset.interviewers.len(),
            performance = dataset.performance.len(),
            projects = dataset.projects.len(),
            "Dataset loaded"
        );

        Ok(Self {
            path: path.to_path_buf(),
            label: format!("file:{}", path.display()),
            dataset,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataProvider for FileProvider {
    fn name(&self) -> &str {
        &self.label
    }

    fn fetch_rows(&self) -> Vec<Row> {
        self.dataset.interviewers.clone()
    }

    fn fetch_performance(&self) -> Vec<PerformanceEntry> {
        self.dataset.performance.clone()
    }

    fn fetch_projects(&self) -> Vec<Project> {
        self.dataset.projects.clone()
    }
}

// ── Mock Implementation for Testing ─────────────────────────────────────────

/// Mock provider assembled record by record.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    dataset: Dataset,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.dataset.interviewers.push(row);
        self
    }

    pub fn with_performance(mut self, name: &str, avg_duration: f64) -> Self {
        self.dataset.performance.push(PerformanceEntry::new(name, avg_duration));
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.dataset.projects.push(project);
        self
    }
}

impl DataProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch_rows(&self) -> Vec<Row> {
        self.dataset.interviewers.clone()
    }

    fn fetch_performance(&self) -> Vec<PerformanceEntry> {
        self.dataset.performance.clone()
    }

    fn fetch_projects(&self) -> Vec<Project> {
        self.dataset.projects.clone()
    }
}
