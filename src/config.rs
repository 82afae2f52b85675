//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

use crate::types::{TimeLimit, REVEAL_DELAY_MS};

/// Crates in this workspace that emit `tracing` events.
const LOG_TARGETS: [&str; 4] = [
    "memory_match",
    "memory_match_core",
    "memory_match_input",
    "memory_match_term",
];

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "memory-match")]
#[command(about = "Flip cards, find the pairs, beat the clock")]
#[command(version)]
pub struct Config {
    /// Preset selected on the title screen: easy|medium|hard or 90|60|30
    #[arg(
        short,
        long,
        env = "MEMORY_MATCH_TIME",
        default_value = "easy",
        value_parser = parse_time_limit
    )]
    pub time: TimeLimit,

    /// Seed for the deck shuffle (random when omitted)
    #[arg(long, env = "MEMORY_MATCH_SEED")]
    pub seed: Option<u64>,

    /// Milliseconds two face-up cards stay visible before they are compared
    #[arg(long, env = "MEMORY_MATCH_REVEAL_MS", default_value_t = REVEAL_DELAY_MS)]
    pub reveal_ms: u32,

    /// Write logs to this file (the terminal is used by the game)
    #[arg(long, env = "MEMORY_MATCH_LOG")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> String {
        let lvl = self.log_level();
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={lvl}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn parse_time_limit(s: &str) -> Result<TimeLimit, String> {
    TimeLimit::from_str(s).ok_or_else(|| {
        format!("unknown time preset `{s}` (expected easy, medium, hard, 90, 60 or 30)")
    })
}
