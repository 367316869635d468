//! Error types for the agent binary.
//!
//! Uses `thiserror` for typed errors covering the whole adapter: stdin and
//! stdout, observation decoding, configuration, world validation, and
//! planning.

use ember_core::{ConfigError, PlanError};
use ember_world::WorldError;

/// Errors that can occur while running the agent.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An observation line was not valid JSON for the snapshot format.
    #[error("invalid observation: {0}")]
    Json(#[from] serde_json::Error),

    /// An environment variable held an unusable value.
    #[error("config error: {0}")]
    Config(String),

    /// The planner config file could not be loaded.
    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    /// The observation described an impossible world.
    #[error("invalid world: {0}")]
    World(#[from] WorldError),

    /// Planning failed.
    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),
}
