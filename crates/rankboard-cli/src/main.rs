//! Rankboard — interviewer leaderboard and project performance views.
//! Entry point for the `rankboard` binary.

mod cli;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use rankboard_common::{Metric, Period};
use rankboard_config::Config;
use rankboard_ranker::export;
use rankboard_ranker::filter::RowFilter;
use rankboard_ranker::memo::RankQuery;
use rankboard_ranker::project::{parse_status_filter, ProjectFilter};
use rankboard_ranker::provider::{DataProvider, DemoProvider, FileProvider};
use rankboard_ranker::Dashboard;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, OutputFormat};

#[derive(Serialize)]
struct LeaderboardView<'a> {
    metric: Metric,
    label: &'a str,
    inverted: bool,
    team: Option<&'a str>,
    period: Period,
    query: &'a str,
    take: usize,
    top: &'a [rankboard_ranker::RankedRow],
    bottom: &'a [rankboard_ranker::RankedRow],
}

#[derive(Serialize)]
struct ProjectsView<'a> {
    projects: &'a [&'a rankboard_common::Project],
    summary: rankboard_ranker::project::ProjectSummary,
}

#[derive(Serialize)]
struct TeamsView<'a> {
    teams: &'a [String],
    metrics: Vec<&'static str>,
    periods: Vec<&'static str>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rankboard=info,warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    let format = match cli.format {
        Some(f) => f,
        None => OutputFormat::from_str(&config.output.format, true)
            .map_err(|e| anyhow!("invalid output.format {:?}: {}", config.output.format, e))?,
    };

    let data_path: Option<PathBuf> = cli.data.clone().or_else(|| config.data.path.clone());
    let provider: Box<dyn DataProvider> = match data_path {
        Some(path) => Box::new(
            FileProvider::open(&path).with_context(|| format!("loading dataset {}", path.display()))?,
        ),
        None => Box::new(DemoProvider),
    };
    let mut dashboard = Dashboard::load(provider.as_ref());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut dashboard, &config, format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run<W: Write>(
    command: Command,
    dashboard: &mut Dashboard,
    config: &Config,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Rank { metric, team, period, query, take } => {
            let metric = metric.unwrap_or(config.ranking.default_metric);
            let period = period.unwrap_or(config.ranking.default_period);
            let take = match take {
                Some(t) => usize::try_from(t)?,
                None => config.ranking.take,
            };
            let team = dashboard.resolve_team(&team)?;

            let rank_query = RankQuery::new(metric, RowFilter::new(team.clone(), period, &query), take);
            let ranked = dashboard.leaderboard(&rank_query);
            info!(
                metric = %metric,
                period = %period,
                top = ranked.top.len(),
                "Leaderboard ready"
            );

            match format {
                OutputFormat::Text => render::leaderboard(out, metric, take, &ranked.top, &ranked.bottom)?,
                OutputFormat::Json => {
                    let view = LeaderboardView {
                        metric,
                        label: metric.label(),
                        inverted: metric.inverted(),
                        team: team.as_deref(),
                        period,
                        query: rank_query.filter.query(),
                        take,
                        top: &ranked.top,
                        bottom: &ranked.bottom,
                    };
                    write_json(out, &view)?;
                }
                // A single CSV table: the top list. Bottom is the same rows reversed.
                OutputFormat::Csv => export::ranked_rows_csv(out, &ranked.top)?,
            }
        }

        Command::Percentiles => {
            let ranks = dashboard.ranks();
            match format {
                OutputFormat::Text => render::percentiles(out, ranks)?,
                OutputFormat::Json => write_json(out, ranks)?,
                OutputFormat::Csv => export::percentiles_csv(out, ranks)?,
            }
        }

        Command::Projects { status, query } => {
            let filter = ProjectFilter::new(parse_status_filter(&status)?, &query);
            let projects = dashboard.projects(&filter);
            let summary = dashboard.project_summary(&filter);
            match format {
                OutputFormat::Text => render::projects(out, &projects, &summary)?,
                OutputFormat::Json => write_json(out, &ProjectsView { projects: &projects, summary })?,
                OutputFormat::Csv => export::projects_csv(out, &projects)?,
            }
        }

        Command::Project { id } => {
            let detail = dashboard.project_detail(id)?;
            match format {
                OutputFormat::Text => render::project_detail(out, &detail)?,
                OutputFormat::Json => write_json(out, &detail)?,
                OutputFormat::Csv => export::members_csv(out, &detail.members)?,
            }
        }

        Command::Teams => {
            let teams = dashboard.teams();
            match format {
                OutputFormat::Json => write_json(
                    out,
                    &TeamsView {
                        teams: &teams,
                        metrics: Metric::ALL.iter().map(|m| m.key()).collect(),
                        periods: Period::ALL.iter().map(|p| p.key()).collect(),
                    },
                )?,
                OutputFormat::Csv => export::catalogue_csv(out, &teams)?,
                OutputFormat::Text => {
                    writeln!(out, "Teams:   ALL, {}", teams.join(", "))?;
                    for m in Metric::ALL {
                        writeln!(out, "Metric:  {:<16} {}", m.key(), m.label())?;
                    }
                    for p in Period::ALL {
                        writeln!(out, "Period:  {:<16} {}", p.key(), p.label())?;
                    }
                }
            }
        }
    }

    let (hits, misses) = dashboard.cache_stats();
    debug!(hits, misses, "Ranking cache");
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankboard_common::ProjectStatus;
    use rankboard_ranker::provider::MockProvider;
    use rankboard_test_utils::fixtures::{project, row_with_value};

    fn run_to_string(command: Command, format: OutputFormat) -> anyhow::Result<String> {
        let provider = MockProvider::new()
            .with_row(row_with_value(Metric::Completed, 1, 40.0))
            .with_row(row_with_value(Metric::Completed, 2, 90.0))
            .with_performance("row-1", 12.0)
            .with_project(project(7, "Survey", &["row-1", "nobody"], ProjectStatus::Success));
        let mut dashboard = Dashboard::load(&provider);
        let mut buf = Vec::new();
        run(command, &mut dashboard, &Config::default(), format, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    fn rank_command() -> Command {
        Command::Rank {
            metric: None,
            team: "ALL".to_string(),
            period: None,
            query: String::new(),
            take: None,
        }
    }

    #[test]
    fn test_rank_json_uses_config_defaults() {
        let json = run_to_string(rank_command(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metric"], "completed");
        assert_eq!(value["period"], "MONTH");
        assert_eq!(value["take"], 10);
        assert_eq!(value["top"][0]["interviewer_id"], 2);
        assert_eq!(value["bottom"][0]["interviewer_id"], 1);
    }

    #[test]
    fn test_rank_csv() {
        let csv = run_to_string(rank_command(), OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("rank,interviewer_id,name,team,value\n1,2,row-2,A,90\n"));
    }

    #[test]
    fn test_project_detail_csv_has_placeholder() {
        let csv = run_to_string(Command::Project { id: 7 }, OutputFormat::Csv).unwrap();
        assert!(csv.contains("row-1,12.0,1,100.0%"));
        assert!(csv.contains("nobody,—,—,—"));
    }

    #[test]
    fn test_unknown_project_is_an_error() {
        let err = run_to_string(Command::Project { id: 1 }, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("Project not found"));
    }

    #[test]
    fn test_bad_status_filter_is_an_error() {
        let command = Command::Projects { status: "Paused".to_string(), query: String::new() };
        assert!(run_to_string(command, OutputFormat::Text).is_err());
    }

    #[test]
    fn test_unknown_team_is_an_error() {
        let command = Command::Rank {
            metric: None,
            team: "Z".to_string(),
            period: None,
            query: String::new(),
            take: None,
        };
        let err = run_to_string(command, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("Unknown team: Z"));
    }

    #[test]
    fn test_teams_csv_is_a_table() {
        let csv = run_to_string(Command::Teams, OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("kind,key,label\nteam,ALL,ALL\nteam,A,A\n"));
        assert!(csv.contains("metric,avg_duration,"));
        assert!(!csv.contains("Teams:"));
    }

    #[test]
    fn test_teams_text_lists_all_selector() {
        let text = run_to_string(Command::Teams, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Teams:   ALL, A\n"));
        assert!(text.contains("avg_duration"));
    }
}
