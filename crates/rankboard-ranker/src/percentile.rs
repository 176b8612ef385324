//! Cohort rank and percentile for a lower-is-better duration metric.
//!
//! Percentile here is the rank fraction `rank / N × 100`, so the best entity
//! has the smallest percentile and the worst has exactly 100. It is not a
//! percentile-of-distribution.

use std::cmp::Ordering;
use std::collections::HashMap;

use rankboard_common::PerformanceEntry;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    pub name: String,
    /// 1 = lowest duration
    pub rank: usize,
    pub percentile: f64,
    pub avg_duration: f64,
}

/// Precomputed ranks for a fixed cohort, looked up by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankMap {
    /// Results in rank order
    ranked: Vec<RankResult>,
    index: HashMap<String, usize>,
}

/// Serialises as the rank-ordered list.
impl Serialize for RankMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.ranked)
    }
}

impl RankMap {
    /// Look up an entity. `None` means the name is not in the cohort.
    pub fn get(&self, name: &str) -> Option<&RankResult> {
        self.index.get(name).map(|&i| &self.ranked[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Cohort size N.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Iterate in rank order, best first.
    pub fn iter(&self) -> impl Iterator<Item = &RankResult> {
        self.ranked.iter()
    }
}

/// Rank every entity in `entries` by ascending duration.
///
/// Names are unique keys: a repeated name replaces the earlier value but
/// keeps the earlier position. Entries with a non-finite duration are left
/// out of the cohort. Ties keep input order.
pub fn compute_ranks(entries: &[PerformanceEntry]) -> RankMap {
    let mut cohort: Vec<(&str, f64)> = Vec::with_capacity(entries.len());
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(entries.len());

    for entry in entries {
        match seen.get(entry.name.as_str()) {
            Some(&pos) => cohort[pos].1 = entry.avg_duration,
            None => {
                seen.insert(entry.name.as_str(), cohort.len());
                cohort.push((entry.name.as_str(), entry.avg_duration));
            }
        }
    }

    let before = cohort.len();
    cohort.retain(|(_, avg)| avg.is_finite());
    if cohort.len() < before {
        warn!(dropped = before - cohort.len(), "Non-finite durations excluded from cohort");
    }

    cohort.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let n = cohort.len();
    let ranked: Vec<RankResult> = cohort
        .into_iter()
        .enumerate()
        .map(|(i, (name, avg))| {
            let rank = i + 1;
            RankResult {
                name: name.to_string(),
                rank,
                percentile: rank as f64 / n as f64 * 100.0,
                avg_duration: avg,
            }
        })
        .collect();

    let index = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| (r.name.clone(), i))
        .collect();

    debug!(cohort = n, "Percentile ranks computed");
    RankMap { ranked, index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankboard_test_utils::fixtures::cohort;
    use rankboard_test_utils::pretty_assertions::assert_eq;

    fn round1(x: f64) -> f64 {
        (x * 10.0).round() / 10.0
    }

    #[test]
    fn test_three_entity_cohort() {
        let map = compute_ranks(&cohort(&[("E2", 18.3), ("E1", 15.2), ("E3", 28.1)]));
        let e1 = map.get("E1").unwrap();
        let e2 = map.get("E2").unwrap();
        let e3 = map.get("E3").unwrap();
        assert_eq!((e1.rank, round1(e1.percentile)), (1, 33.3));
        assert_eq!((e2.rank, round1(e2.percentile)), (2, 66.7));
        assert_eq!((e3.rank, round1(e3.percentile)), (3, 100.0));
        assert_eq!(e3.avg_duration, 28.1);
    }

    #[test]
    fn test_ranks_form_permutation() {
        let entries = cohort(&[("a", 5.0), ("b", 1.0), ("c", 3.0), ("d", 4.0), ("e", 2.0)]);
        let map = compute_ranks(&entries);
        let mut ranks: Vec<usize> = map.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert_eq!(map.iter().next().unwrap().percentile, 100.0 / 5.0);
        assert_eq!(map.iter().last().unwrap().percentile, 100.0);
    }

    #[test]
    fn test_missing_name_is_none() {
        let map = compute_ranks(&cohort(&[("a", 1.0)]));
        assert!(map.get("nobody").is_none());
        assert!(!map.contains("nobody"));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let map = compute_ranks(&cohort(&[("x", 2.0), ("y", 1.0), ("z", 2.0)]));
        assert_eq!(map.get("y").unwrap().rank, 1);
        assert_eq!(map.get("x").unwrap().rank, 2);
        assert_eq!(map.get("z").unwrap().rank, 3);
    }

    #[test]
    fn test_duplicate_name_replaces_value() {
        let map = compute_ranks(&cohort(&[("a", 9.0), ("b", 5.0), ("a", 1.0)]));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a").unwrap().rank, 1);
        assert_eq!(map.get("a").unwrap().avg_duration, 1.0);
    }

    #[test]
    fn test_non_finite_durations_leave_cohort() {
        let map = compute_ranks(&cohort(&[("a", f64::NAN), ("b", 5.0), ("c", 7.0)]));
        assert_eq!(map.len(), 2);
        assert!(map.get("a").is_none());
        assert_eq!(map.get("c").unwrap().percentile, 100.0);
    }

    #[test]
    fn test_serialises_as_ranked_list() {
        let map = compute_ranks(&cohort(&[("b", 2.0), ("a", 1.0)]));
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json[0]["name"], "a");
        assert_eq!(json[1]["rank"], 2);
    }

    #[test]
    fn test_empty_cohort() {
        let map = compute_ranks(&[]);
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }
}
