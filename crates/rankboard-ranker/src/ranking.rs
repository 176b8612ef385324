//! Top-N / bottom-N leaderboard ranking.

use std::cmp::Ordering;

use rankboard_common::{Metric, Row};
use serde::{Deserialize, Serialize};

/// Default slice length for both leaderboards.
pub const DEFAULT_TAKE: usize = 10;

/// A row paired with the reading of the metric it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    #[serde(flatten)]
    pub row: Row,
    pub value: f64,
}

/// Both ends of one ranking pass.
///
/// `top` starts with the best row, `bottom` starts with the worst. When the
/// cohort holds at most `2 × take` rows the two lists overlap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ranked {
    pub top: Vec<RankedRow>,
    pub bottom: Vec<RankedRow>,
}

/// Rank `rows` by `metric`.
///
/// Rows whose reading is not finite are dropped. Rows are ordered
/// descending by value, or ascending when `invert` is set; the sort is
/// stable so equal values keep their input order. `bottom` is taken from
/// the reverse of that same order.
pub fn rank(rows: &[Row], metric: Metric, invert: bool, take: usize) -> Ranked {
    let mut ranked: Vec<RankedRow> = rows
        .iter()
        .filter_map(|row| {
            let value = metric.value_of(row);
            value.is_finite().then(|| RankedRow { row: row.clone(), value })
        })
        .collect();

    // Values are finite here, so partial_cmp never falls through.
    if invert {
        ranked.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
    } else {
        ranked.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    }

    let top = ranked.iter().take(take).cloned().collect();
    let bottom = ranked.iter().rev().take(take).cloned().collect();

    Ranked { top, bottom }
}

/// Rank using the metric's own direction policy.
pub fn rank_by(rows: &[Row], metric: Metric, take: usize) -> Ranked {
    rank(rows, metric, metric.inverted(), take)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankboard_test_utils::fixtures::{row_with_value, rows_with_values};
    use rankboard_test_utils::pretty_assertions::assert_eq;

    fn values(rows: &[RankedRow]) -> Vec<f64> {
        rows.iter().map(|r| r.value).collect()
    }

    #[test]
    fn test_drops_non_finite_and_slices_both_ends() {
        let rows = rows_with_values(Metric::Completed, &[10.0, 20.0, 30.0, 40.0, f64::NAN]);
        let ranked = rank(&rows, Metric::Completed, false, 3);
        assert_eq!(values(&ranked.top), vec![40.0, 30.0, 20.0]);
        assert_eq!(values(&ranked.bottom), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_invert_ranks_low_values_first() {
        let rows = rows_with_values(Metric::AvgDuration, &[18.3, 15.2, 28.1, f64::INFINITY]);
        let ranked = rank(&rows, Metric::AvgDuration, true, 10);
        assert_eq!(values(&ranked.top), vec![15.2, 18.3, 28.1]);
        assert_eq!(values(&ranked.bottom), vec![28.1, 18.3, 15.2]);
    }

    #[test]
    fn test_small_cohort_returns_everything_in_both_lists() {
        let rows = rows_with_values(Metric::QaScore, &[70.0, 90.0]);
        let ranked = rank(&rows, Metric::QaScore, false, DEFAULT_TAKE);
        assert_eq!(ranked.top.len(), 2);
        assert_eq!(ranked.bottom.len(), 2);
        assert_eq!(ranked.top[0].row.interviewer_id, ranked.bottom[1].row.interviewer_id);
    }

    #[test]
    fn test_equal_values_keep_input_order() {
        let rows = vec![
            row_with_value(Metric::Completed, 1, 50.0),
            row_with_value(Metric::Completed, 2, 80.0),
            row_with_value(Metric::Completed, 3, 50.0),
            row_with_value(Metric::Completed, 4, 50.0),
        ];
        let ranked = rank(&rows, Metric::Completed, false, 10);
        let ids: Vec<u32> = ranked.top.iter().map(|r| r.row.interviewer_id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_rank_by_uses_metric_direction() {
        let rows = rows_with_values(Metric::AvgDuration, &[20.0, 10.0, 30.0]);
        assert_eq!(rank_by(&rows, Metric::AvgDuration, 10), rank(&rows, Metric::AvgDuration, true, 10));
        let rows = rows_with_values(Metric::Completed, &[20.0, 10.0, 30.0]);
        assert_eq!(rank_by(&rows, Metric::Completed, 10), rank(&rows, Metric::Completed, false, 10));
    }

    #[test]
    fn test_take_zero_yields_empty_lists() {
        let rows = rows_with_values(Metric::Completed, &[1.0, 2.0]);
        assert_eq!(rank(&rows, Metric::Completed, false, 0), Ranked::default());
    }

    #[test]
    fn test_ranked_row_serialises_flat() {
        let ranked = RankedRow { row: row_with_value(Metric::QaScore, 7, 91.0), value: 91.0 };
        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["interviewer_id"], 7);
        assert_eq!(json["value"], 91.0);
    }
}
