//! Shared type definitions for the Ember turn planner.
//!
//! This crate holds the small value types that flow between the world
//! facade (`ember-world`), the planning engine (`ember-core`) and the
//! harness adapter (`ember-agent`).
//!
//! # Modules
//!
//! - [`ids`] -- Typed wrappers around the game's string identifiers
//! - [`enums`] -- Resource tiers, unit kinds, and movement directions
//! - [`position`] -- Grid coordinates, Manhattan distance, `direction_to`
//! - [`actions`] -- Actions, actors, and debug annotations with their
//!   command-string encodings

pub mod actions;
pub mod enums;
pub mod ids;
pub mod position;

// Re-export all public types at crate root for convenience.
pub use actions::{Action, Actor, Annotation, AnnotationKind};
pub use enums::{Direction, ResourceType, UnitKind};
pub use ids::{CityId, UnitId};
pub use position::Position;
