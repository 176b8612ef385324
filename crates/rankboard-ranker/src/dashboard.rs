//! One dashboard session: data fetched once from a provider, the cohort
//! ranked once, leaderboards memoized per query.

use std::sync::Arc;

use rankboard_common::{Project, RankboardError, Result, Row};
use tracing::info;

use crate::filter::{distinct_teams, parse_team};
use crate::memo::{RankQuery, RankingCache};
use crate::percentile::{compute_ranks, RankMap};
use crate::project::{find_project, ProjectDetail, ProjectFilter, ProjectSummary};
use crate::provider::DataProvider;
use crate::ranking::Ranked;

pub struct Dashboard {
    rows: Vec<Row>,
    projects: Vec<Project>,
    ranks: RankMap,
    cache: RankingCache,
}

impl Dashboard {
    pub fn load(provider: &dyn DataProvider) -> Self {
        let rows = provider.fetch_rows();
        let projects = provider.fetch_projects();
        let ranks = compute_ranks(&provider.fetch_performance());

        info!(
            source = provider.name(),
            rows = rows.len(),
            cohort = ranks.len(),
            projects = projects.len(),
            "Dashboard data loaded"
        );

        Self { rows, projects, ranks, cache: RankingCache::new() }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Team selector options, first-seen order.
    pub fn teams(&self) -> Vec<String> {
        distinct_teams(&self.rows)
    }

    /// Resolve a team selector; a named team must occur in the loaded rows.
    pub fn resolve_team(&self, selector: &str) -> Result<Option<String>> {
        match parse_team(selector) {
            Some(team) if !self.rows.iter().any(|r| r.team == team) => {
                Err(RankboardError::UnknownTeam(team))
            }
            team => Ok(team),
        }
    }

    pub fn leaderboard(&mut self, query: &RankQuery) -> Arc<Ranked> {
        self.cache.get_or_compute(query, &self.rows)
    }

    pub fn ranks(&self) -> &RankMap {
        &self.ranks
    }

    pub fn projects(&self, filter: &ProjectFilter) -> Vec<&Project> {
        filter.apply(&self.projects)
    }

    pub fn project_summary(&self, filter: &ProjectFilter) -> ProjectSummary {
        ProjectSummary::from_projects(&self.projects(filter))
    }

    pub fn project_detail(&self, id: u32) -> Result<ProjectDetail> {
        let project = find_project(&self.projects, id)?;
        Ok(ProjectDetail::build(project, &self.ranks))
    }

    pub fn cache_stats(&self) -> (u64, u64) {
        self.cache.stats()
    }
}
