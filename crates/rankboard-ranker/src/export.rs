//! CSV export for leaderboards, project lists, member detail and the
//! selector catalogue.

use std::io::Write;

use rankboard_common::{Metric, Period, Project, Result};

use crate::filter::ALL;
use crate::percentile::RankMap;
use crate::project::MemberPerformance;
use crate::ranking::RankedRow;

/// `rank` is the 1-based position within `rows`.
pub fn ranked_rows_csv<W: Write>(writer: W, rows: &[RankedRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["rank", "interviewer_id", "name", "team", "value"])?;
    for (i, r) in rows.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            r.row.interviewer_id.to_string(),
            r.row.name.clone(),
            r.row.team.clone(),
            r.value.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Members are joined with `;`.
pub fn projects_csv<W: Write>(writer: W, projects: &[&Project]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["id", "name", "created", "members", "progress", "status"])?;
    for p in projects {
        wtr.write_record([
            p.id.to_string(),
            p.name.clone(),
            p.created.format("%Y-%m-%d").to_string(),
            p.members.join(";"),
            p.progress.to_string(),
            p.status.label().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn members_csv<W: Write>(writer: W, members: &[MemberPerformance]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["name", "avg_duration", "rank", "percentile"])?;
    for m in members {
        wtr.write_record([
            m.name.clone(),
            m.display_duration(),
            m.display_rank(),
            m.display_percentile(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn percentiles_csv<W: Write>(writer: W, ranks: &RankMap) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["rank", "name", "avg_duration", "percentile"])?;
    for r in ranks.iter() {
        wtr.write_record([
            r.rank.to_string(),
            r.name.clone(),
            format!("{:.1}", r.avg_duration),
            format!("{:.1}", r.percentile),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Selector options as `kind,key,label`: teams (with `ALL` first), then
/// metrics, then periods.
pub fn catalogue_csv<W: Write>(writer: W, teams: &[String]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["kind", "key", "label"])?;
    wtr.write_record(["team", ALL, ALL])?;
    for t in teams {
        wtr.write_record(["team", t.as_str(), t.as_str()])?;
    }
    for m in Metric::ALL {
        wtr.write_record(["metric", m.key(), m.label()])?;
    }
    for p in Period::ALL {
        wtr.write_record(["period", p.key(), p.label()])?;
    }
    wtr.flush()?;
    Ok(())
}
