//! Command-line adapter for the Ember turn planner.
//!
//! Reads one JSON observation per line on stdin, plans the turn, and writes
//! the commands followed by `D_FINISH` on stdout. Logs go to stderr so they
//! never mix with the command stream.
//!
//! # Architecture
//!
//! ```text
//! stdin (observation) --> GameState --> plan_turn --> stdout (commands)
//! ```

mod config;
mod error;
mod protocol;

use std::io::{self, BufWriter};

use ember_core::Agent;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AgentConfig;

/// Application entry point.
///
/// Loads configuration from environment variables, initializes logging,
/// then answers observations until stdin closes.
///
/// # Errors
///
/// Returns an error if configuration is invalid or stdin/stdout fail.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AgentConfig::from_env()?;

    // Initialize structured logging on stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(io::stderr);
    if config.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!(
        config_path = ?config.config_path,
        seed = config.seed,
        block_opponent_cells = config.planner.movement.block_opponent_cells,
        workers_per_cart = config.planner.production.workers_per_cart,
        "ember-agent starting"
    );

    let agent = Agent::new(config.planner, config.seed);
    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    let turns = protocol::serve(&agent, stdin, &mut stdout)?;

    info!(turns, "input closed, shutting down");
    Ok(())
}
