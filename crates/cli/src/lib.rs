//! Clocktower CLI - summaries of roster and script documents

pub mod commands;
pub mod config;

pub use commands::{run_roster, run_script, ScriptOptions};
pub use config::CliConfig;
