use std::env;

use anyhow::Result;

use crate::history::DEFAULT_CAPACITY;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored, human-readable report (default)
    Terminal,
    /// Pretty-printed JSON, for piping into other tools
    Json,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many recent analyses the history keeps (TRUST_SCOUT_HISTORY_SIZE)
    pub history_size: usize,
    /// Default output format (TRUST_SCOUT_OUTPUT); `--json` overrides it
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Both settings have defaults; only malformed values are errors.
    pub fn load() -> Result<Self> {
        let history_size =
            parse_history_size(env::var("TRUST_SCOUT_HISTORY_SIZE").ok().as_deref())?;
        let output = parse_output_format(env::var("TRUST_SCOUT_OUTPUT").ok().as_deref())?;
        Ok(Self {
            history_size,
            output,
        })
    }
}

fn parse_history_size(raw: Option<&str>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_CAPACITY);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => anyhow::bail!(
            "TRUST_SCOUT_HISTORY_SIZE must be a positive integer (got {raw:?}).\n\
             Unset it to keep the last {DEFAULT_CAPACITY} analyses."
        ),
    }
}

fn parse_output_format(raw: Option<&str>) -> Result<OutputFormat> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("terminal") => Ok(OutputFormat::Terminal),
        Some("json") => Ok(OutputFormat::Json),
        Some(other) => anyhow::bail!(
            "TRUST_SCOUT_OUTPUT must be \"terminal\" or \"json\" (got {other:?})"
        ),
    }
}
