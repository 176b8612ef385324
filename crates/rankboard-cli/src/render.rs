//! Plain-text rendering of dashboard views.

use std::io::{self, Write};

use rankboard_common::{Metric, Project};
use rankboard_ranker::project::{ProjectDetail, ProjectSummary};
use rankboard_ranker::{RankMap, RankedRow};

pub fn ranked_list<W: Write>(out: &mut W, title: &str, rows: &[RankedRow]) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    if rows.is_empty() {
        writeln!(out, "  (no interviewers match)")?;
        return Ok(());
    }
    for (i, r) in rows.iter().enumerate() {
        writeln!(
            out,
            "  {:>3}  {:<12} Team {:<4} {:>8}",
            i + 1,
            r.row.name,
            r.row.team,
            r.value
        )?;
    }
    Ok(())
}

pub fn leaderboard<W: Write>(
    out: &mut W,
    metric: Metric,
    take: usize,
    top: &[RankedRow],
    bottom: &[RankedRow],
) -> io::Result<()> {
    ranked_list(out, &format!("Top {} · {}", take, metric.label()), top)?;
    writeln!(out)?;
    ranked_list(out, &format!("Bottom {} · {}", take, metric.label()), bottom)?;
    if metric.inverted() {
        writeln!(out)?;
        writeln!(out, "* {} is ranked ascending: lower is better.", metric.key())?;
    }
    Ok(())
}

pub fn percentiles<W: Write>(out: &mut W, ranks: &RankMap) -> io::Result<()> {
    writeln!(out, "  {:>4}  {:<12} {:>10} {:>12}", "Rank", "Interviewer", "Avg (min)", "Percentile")?;
    for r in ranks.iter() {
        writeln!(
            out,
            "  {:>4}  {:<12} {:>10.1} {:>11.1}%",
            r.rank, r.name, r.avg_duration, r.percentile
        )?;
    }
    Ok(())
}

pub fn projects<W: Write>(out: &mut W, projects: &[&Project], summary: &ProjectSummary) -> io::Result<()> {
    if projects.is_empty() {
        writeln!(out, "  (no projects match)")?;
    }
    for p in projects {
        writeln!(
            out,
            "  #{:<3} {}  [{}]  {:>3}%  created {}  members: {}",
            p.id,
            p.name,
            p.status,
            p.progress,
            p.created,
            p.members.join(", ")
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Total {} · Completed {} · In Progress {} · Delayed {}",
        summary.total, summary.success, summary.in_progress, summary.delayed
    )
}

pub fn project_detail<W: Write>(out: &mut W, detail: &ProjectDetail) -> io::Result<()> {
    writeln!(out, "{} (#{})", detail.project.name, detail.project.id)?;
    writeln!(out)?;
    writeln!(out, "  {:<12} {:>10} {:>6} {:>12}", "Member", "Avg (min)", "Rank", "Percentile")?;
    for m in &detail.members {
        writeln!(
            out,
            "  {:<12} {:>10} {:>6} {:>12}",
            m.name,
            m.display_duration(),
            m.display_rank(),
            m.display_percentile()
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Members {} · In top 10 {} · Avg duration {:.1} min",
        detail.member_count, detail.top_ten_count, detail.average_duration
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankboard_common::ProjectStatus;
    use rankboard_ranker::compute_ranks;
    use rankboard_test_utils::fixtures::{cohort, project, rows_with_values};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_inverted_leaderboard_has_footnote() {
        let rows = rows_with_values(Metric::AvgDuration, &[12.0, 9.5]);
        let ranked = rankboard_ranker::rank_by(&rows, Metric::AvgDuration, 10);
        let text = render(|out| leaderboard(out, Metric::AvgDuration, 10, &ranked.top, &ranked.bottom));
        assert!(text.starts_with("Top 10 · "));
        assert!(text.contains("row-2"));
        assert!(text.contains("lower is better"));
    }

    #[test]
    fn test_empty_list_message() {
        let text = render(|out| ranked_list(out, "Top 10", &[]));
        assert!(text.contains("no interviewers match"));
    }

    #[test]
    fn test_detail_shows_placeholder() {
        let ranks = compute_ranks(&cohort(&[("a", 10.0)]));
        let detail = ProjectDetail::build(&project(1, "P", &["a", "b"], ProjectStatus::Delayed), &ranks);
        let text = render(|out| project_detail(out, &detail));
        assert!(text.contains('—'));
        assert!(text.contains("In top 10 1"));
        assert!(text.contains("Avg duration 5.0 min"));
    }
}
