//! The `snoo` binary: one subcommand per analysis plus the cleaning job

pub mod analyses;
pub mod cli;
pub mod report;
