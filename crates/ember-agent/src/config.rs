//! Configuration for the agent binary.
//!
//! Everything is read from environment variables. The planner's own
//! settings live in a YAML file whose path is given by `EMBER_CONFIG`.

use std::path::PathBuf;

use ember_core::PlannerConfig;

use crate::error::AgentError;

/// Complete agent configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Planner settings, from `EMBER_CONFIG` or the defaults.
    pub planner: PlannerConfig,
    /// Where `planner` was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Base seed for movement retries.
    pub seed: u64,
    /// Emit logs as JSON lines instead of text.
    pub json_logs: bool,
}

impl AgentConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `EMBER_CONFIG` -- path to a planner YAML file (defaults built in)
    /// - `EMBER_SEED` -- base RNG seed (default `0`)
    /// - `EMBER_LOG_JSON` -- log as JSON (default `false`)
    pub fn from_env() -> Result<Self, AgentError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AgentError> {
        let config_path = lookup("EMBER_CONFIG")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let planner = match &config_path {
            Some(path) => PlannerConfig::from_file(path)?,
            None => PlannerConfig::default(),
        };

        let seed: u64 = lookup("EMBER_SEED")
            .unwrap_or_else(|| "0".to_owned())
            .parse()
            .map_err(|e| AgentError::Config(format!("invalid EMBER_SEED: {e}")))?;

        let json_logs: bool = lookup("EMBER_LOG_JSON")
            .unwrap_or_else(|| "false".to_owned())
            .parse()
            .map_err(|e| AgentError::Config(format!("invalid EMBER_LOG_JSON: {e}")))?;

        Ok(Self {
            planner,
            config_path,
            seed,
            json_logs,
        })
    }
}
