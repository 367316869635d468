//! Error types for the planner.

use ember_world::Team;

/// Errors that can occur while planning a turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The world has no player for the controlled team.
    #[error("no player for controlled team {0}")]
    UnknownPlayer(Team),
}
