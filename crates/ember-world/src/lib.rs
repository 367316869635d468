//! World facade for the Ember turn planner.
//!
//! The planner never mutates the world. This crate gives it a typed,
//! read-only view of one turn: the grid of cells, each player's research,
//! cities and units, and the game rules the planner has to respect when
//! choosing actions (research unlocks, build eligibility, cooldowns).
//!
//! # Modules
//!
//! - [`constants`] -- Game rule constants (research thresholds, build cost).
//! - [`error`] -- Error types for world construction.
//! - [`map`] -- [`GameMap`] and [`Cell`]: the fixed-size grid.
//! - [`player`] -- Players, cities, city tiles, and units.
//! - [`observation`] -- The serde snapshot a harness sends each turn.
//! - [`state`] -- [`GameState`]: the validated world for one turn.

pub mod constants;
pub mod error;
pub mod map;
pub mod observation;
pub mod player;
pub mod state;

// Re-export primary types at crate root.
pub use error::WorldError;
pub use map::{Cell, CityTileRef, GameMap, Resource};
pub use observation::Observation;
pub use player::{Cargo, City, CityTile, Player, Team, Unit};
pub use state::GameState;
