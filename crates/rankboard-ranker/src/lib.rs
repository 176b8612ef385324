//! rankboard-ranker — Leaderboard ranking and cohort percentile engine.
//!
//! The two pure cores are [`ranking::rank`] and [`percentile::compute_ranks`].
//! Everything else here (filters, project views, providers, the memo cache
//! and CSV export) feeds or consumes them.

pub mod ranking;
pub mod percentile;
pub mod filter;
pub mod project;
pub mod provider;
pub mod demo;
pub mod memo;
pub mod dashboard;
pub mod export;

pub use dashboard::Dashboard;
pub use percentile::{compute_ranks, RankMap, RankResult};
pub use ranking::{rank, rank_by, Ranked, RankedRow, DEFAULT_TAKE};
