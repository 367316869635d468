//! Error types for the `ember-world` crate.
//!
//! World errors only arise while building a [`GameState`] from a snapshot.
//! Queries against a built world never fail; missing things are `None`.
//!
//! [`GameState`]: crate::state::GameState

use ember_types::Position;

use crate::player::Team;

/// Errors that can occur while constructing the world for a turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The grid must be at least 1x1.
    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// A resource, city tile, or unit lies outside the grid.
    #[error("position {0} is outside the map")]
    OutOfBounds(Position),

    /// A cell would hold both a resource and a city tile.
    #[error("cell {0} cannot hold both a resource and a city tile")]
    CellConflict(Position),

    /// Two city tiles were placed on the same cell.
    #[error("cell {0} already holds a city tile")]
    DuplicateCityTile(Position),

    /// The controlled team has no entry in the snapshot.
    #[error("no player with team {0}")]
    UnknownTeam(Team),
}
