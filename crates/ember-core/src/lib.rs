//! Action planning engine for the Ember turn planner.
//!
//! Given one turn's [`GameState`](ember_world::GameState), produces a
//! complete set of city tile and unit actions in which no two units move
//! onto the same cell.
//!
//! # Modules
//!
//! - [`config`] -- YAML-backed planner configuration.
//! - [`resources`] -- Resource cell scan.
//! - [`proximity`] -- Nearest resource, city tile, and build site.
//! - [`fuel`] -- Per-city burn rates and burn-out risk.
//! - [`production`] -- City tile production and research.
//! - [`units`] -- Per-unit intents and actions.
//! - [`movement`] -- Occupancy bookkeeping and collision-free moves.
//! - [`engine`] -- [`plan_turn`] and [`Agent`].
//! - [`error`] -- Error types.

pub mod config;
pub mod engine;
pub mod error;
pub mod fuel;
pub mod movement;
pub mod production;
pub mod proximity;
pub mod resources;
pub mod units;

// Re-export primary types at crate root.
pub use config::{ConfigError, PlannerConfig};
pub use engine::{Agent, TurnPlan, plan_turn};
pub use error::PlanError;
pub use fuel::TileFuelStatus;
pub use movement::{MAX_MOVE_ATTEMPTS, MovementState, OccupancyGrid};
pub use units::{Intent, UnitPlanner};
