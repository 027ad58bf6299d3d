//! CLI subcommand implementations.

pub mod browse;
pub mod serve;
