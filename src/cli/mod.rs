//! Command-line front end: one subcommand per tool plus `serve`

pub mod commands;

pub use commands::{Cli, Commands, run};
