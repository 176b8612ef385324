//! Shared fixtures for Rankboard tests.

pub mod fixtures;

pub use pretty_assertions;
