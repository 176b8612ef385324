//! Memoized leaderboard results keyed by the full input tuple.

use std::collections::HashMap;
use std::sync::Arc;

use rankboard_common::{Metric, Row};
use tracing::debug;

use crate::filter::RowFilter;
use crate::ranking::{rank_by, Ranked};

/// Everything a leaderboard result depends on, apart from the row set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankQuery {
    pub metric: Metric,
    pub filter: RowFilter,
    pub take: usize,
}

impl RankQuery {
    pub fn new(metric: Metric, filter: RowFilter, take: usize) -> Self {
        Self { metric, filter, take }
    }
}

/// Cache of ranking results over one fixed row set.
///
/// Entries are only valid for the rows they were computed from; callers
/// that swap the row set must [`clear`](Self::clear) first.
#[derive(Debug, Default)]
pub struct RankingCache {
    entries: HashMap<RankQuery, Arc<Ranked>>,
    hits: u64,
    misses: u64,
}

impl RankingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, query: &RankQuery, rows: &[Row]) -> Arc<Ranked> {
        if let Some(hit) = self.entries.get(query) {
            self.hits += 1;
            debug!(metric = %query.metric, "Ranking cache hit");
            return Arc::clone(hit);
        }

        self.misses += 1;
        let filtered = query.filter.apply(rows);
        let ranked = Arc::new(rank_by(&filtered, query.metric, query.take));
        debug!(
            metric = %query.metric,
            period = %query.filter.period,
            candidates = filtered.len(),
            "Ranking computed"
        );
        self.entries.insert(query.clone(), Arc::clone(&ranked));
        ranked
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
