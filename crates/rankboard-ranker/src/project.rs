//! Project listing, status summary and per-member performance detail.

use rankboard_common::{Project, ProjectStatus, RankboardError, Result};
use serde::Serialize;

use crate::filter::{name_matches, normalise_query, ALL};
use crate::percentile::RankMap;

/// Rendered in place of a value a member has no cohort entry for.
pub const PLACEHOLDER: &str = "—";

/// Rank cutoff counted by [`ProjectDetail::top_ten_count`].
pub const TOP_TEN: usize = 10;

/// Parse a status selector; `ALL` (any case) or blank means every status.
pub fn parse_status_filter(selector: &str) -> Result<Option<ProjectStatus>> {
    let trimmed = selector.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    trimmed.parse::<ProjectStatus>().map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    query: String,
}

impl ProjectFilter {
    pub fn new(status: Option<ProjectStatus>, query: &str) -> Self {
        Self { status, query: normalise_query(query) }
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.status.map_or(true, |s| project.status == s) && name_matches(&project.name, &self.query)
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Counts shown under the project table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProjectSummary {
    pub total: usize,
    pub success: usize,
    pub in_progress: usize,
    pub delayed: usize,
}

impl ProjectSummary {
    pub fn from_projects(projects: &[&Project]) -> Self {
        projects.iter().fold(Self { total: projects.len(), ..Self::default() }, |mut acc, p| {
            match p.status {
                ProjectStatus::Success => acc.success += 1,
                ProjectStatus::InProgress => acc.in_progress += 1,
                ProjectStatus::Delayed => acc.delayed += 1,
            }
            acc
        })
    }
}

/// One project member joined against the cohort. All three figures are
/// absent together when the member has no performance entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberPerformance {
    pub name: String,
    pub avg_duration: Option<f64>,
    pub rank: Option<usize>,
    pub percentile: Option<f64>,
}

impl MemberPerformance {
    pub fn lookup(name: &str, ranks: &RankMap) -> Self {
        let hit = ranks.get(name);
        Self {
            name: name.to_string(),
            avg_duration: hit.map(|r| r.avg_duration),
            rank: hit.map(|r| r.rank),
            percentile: hit.map(|r| r.percentile),
        }
    }

    pub fn display_duration(&self) -> String {
        self.avg_duration.map_or_else(|| PLACEHOLDER.to_string(), |d| format!("{:.1}", d))
    }

    pub fn display_rank(&self) -> String {
        self.rank.map_or_else(|| PLACEHOLDER.to_string(), |r| r.to_string())
    }

    pub fn display_percentile(&self) -> String {
        self.percentile.map_or_else(|| PLACEHOLDER.to_string(), |p| format!("{:.1}%", p))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    /// In member-list order
    pub members: Vec<MemberPerformance>,
    pub member_count: usize,
    /// Members ranked within the cohort's top ten
    pub top_ten_count: usize,
    /// Mean duration over all members, members without data counted as 0
    pub average_duration: f64,
}

impl ProjectDetail {
    pub fn build(project: &Project, ranks: &RankMap) -> Self {
        let members: Vec<MemberPerformance> = project
            .members
            .iter()
            .map(|m| MemberPerformance::lookup(m, ranks))
            .collect();

        let member_count = members.len();
        let top_ten_count = members
            .iter()
            .filter(|m| m.rank.map_or(false, |r| r <= TOP_TEN))
            .count();
        let average_duration = if member_count == 0 {
            0.0
        } else {
            members.iter().map(|m| m.avg_duration.unwrap_or(0.0)).sum::<f64>() / member_count as f64
        };

        Self {
            project: project.clone(),
            members,
            member_count,
            top_ten_count,
            average_duration,
        }
    }
}

pub fn find_project(projects: &[Project], id: u32) -> Result<&Project> {
    projects
        .iter()
        .find(|p| p.id == id)
        .ok_or(RankboardError::ProjectNotFound(id))
}
