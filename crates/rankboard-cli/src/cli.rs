//! CLI argument parsing for Rankboard

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rankboard_common::{Metric, Period};

/// Output format for every view
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    Text,
    /// JSON for machine parsing
    Json,
    /// CSV for spreadsheets
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "rankboard")]
#[command(version)]
#[command(about = "Interviewer leaderboard and project performance views", long_about = None)]
pub struct Cli {
    /// Config file (defaults to $RANKBOARD_CONFIG, then ./rankboard.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dataset file (.json / .yaml); overrides data.path from the config
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Output format; overrides output.format from the config
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Top / bottom leaderboard for one metric
    Rank {
        /// completed, conversion_rate, qa_score or avg_duration
        #[arg(short, long)]
        metric: Option<Metric>,

        /// Team name or ALL
        #[arg(short, long, default_value = "ALL")]
        team: String,

        /// DAY, WEEK or MONTH
        #[arg(short, long)]
        period: Option<Period>,

        /// Case-insensitive interviewer name search
        #[arg(short, long, default_value = "")]
        query: String,

        /// Rows per list, at least 1
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        take: Option<u64>,
    },

    /// Duration rank and percentile for the whole cohort
    Percentiles,

    /// Project list with status counts
    Projects {
        /// Success, "In Progress", Delayed or ALL
        #[arg(short, long, default_value = "ALL")]
        status: String,

        /// Case-insensitive project name search
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Member performance for one project
    Project {
        /// Project id
        id: u32,
    },

    /// List teams and metrics available for filtering
    Teams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_arguments_parse() {
        let cli = Cli::try_parse_from([
            "rankboard", "rank", "--metric", "avg_duration", "--team", "B", "--period", "week",
            "--take", "5", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Command::Rank { metric, team, period, take, query } => {
                assert_eq!(metric, Some(Metric::AvgDuration));
                assert_eq!(team, "B");
                assert_eq!(period, Some(Period::Week));
                assert_eq!(take, Some(5));
                assert_eq!(query, "");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        assert!(Cli::try_parse_from(["rankboard", "rank", "--metric", "speed"]).is_err());
    }

    #[test]
    fn test_take_must_be_positive() {
        assert!(Cli::try_parse_from(["rankboard", "rank", "--take", "0"]).is_err());
        let cli = Cli::try_parse_from(["rankboard", "rank", "--take", "1"]).unwrap();
        assert!(matches!(cli.command, Command::Rank { take: Some(1), .. }));
    }

    #[test]
    fn test_project_requires_id() {
        assert!(Cli::try_parse_from(["rankboard", "project"]).is_err());
        let cli = Cli::try_parse_from(["rankboard", "project", "4"]).unwrap();
        assert!(matches!(cli.command, Command::Project { id: 4 }));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
