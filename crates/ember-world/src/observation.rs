//! Per-turn snapshot format.
//!
//! A harness that already tracks the game state hands the planner one
//! [`Observation`] per turn as JSON. Only the fields the planner reads are
//! modelled; optional fields default so that sparse snapshots still parse.
//! [`GameState::from_observation`] turns it into a validated world.
//!
//! [`GameState::from_observation`]: crate::state::GameState::from_observation

use ember_types::{CityId, ResourceType, UnitId, UnitKind};
use serde::{Deserialize, Serialize};

use crate::player::{Cargo, Team};

/// Everything observable at the start of a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Turn number, starting at 0.
    #[serde(default)]
    pub turn: u32,
    /// The team this agent controls.
    pub player: Team,
    /// Grid width.
    pub width: i32,
    /// Grid height.
    pub height: i32,
    /// Resource deposits on the map.
    #[serde(default)]
    pub resources: Vec<ResourceObservation>,
    /// Both players, in any order.
    #[serde(default)]
    pub players: Vec<PlayerObservation>,
}

/// A resource deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceObservation {
    /// Resource tier.
    pub kind: ResourceType,
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Units left.
    pub amount: u32,
}

/// One player's research, cities, and units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerObservation {
    /// Team index.
    pub team: Team,
    /// Accumulated research points.
    #[serde(default)]
    pub research_points: u32,
    /// Cities in report order.
    #[serde(default)]
    pub cities: Vec<CityObservation>,
    /// Units in report order.
    #[serde(default)]
    pub units: Vec<UnitObservation>,
}

/// A city and its tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityObservation {
    /// City identifier.
    pub id: CityId,
    /// Shared fuel.
    #[serde(default)]
    pub fuel: f64,
    /// Tiles in report order.
    #[serde(default)]
    pub tiles: Vec<CityTileObservation>,
}

/// A single city tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityTileObservation {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Action cooldown.
    #[serde(default)]
    pub cooldown: f64,
}

/// A worker or cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitObservation {
    /// Unit identifier.
    pub id: UnitId,
    /// Worker or cart.
    pub kind: UnitKind,
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Action cooldown.
    #[serde(default)]
    pub cooldown: f64,
    /// Carried resources.
    #[serde(default)]
    pub cargo: Cargo,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_sparse_snapshot() {
        let json = r#"{
            "player": 0,
            "width": 12,
            "height": 12,
            "resources": [{"kind": "wood", "x": 3, "y": 4, "amount": 500}],
            "players": [
                {
                    "team": 0,
                    "cities": [{"id": "c_1", "fuel": 40.0, "tiles": [{"x": 1, "y": 1}]}],
                    "units": [{"id": "u_1", "kind": "worker", "x": 2, "y": 1,
                               "cargo": {"wood": 20}}]
                },
                {"team": 1}
            ]
        }"#;
        let obs: Observation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.turn, 0);
        assert_eq!(obs.resources.len(), 1);
        assert_eq!(obs.players.len(), 2);

        let me = obs.players.first().unwrap();
        assert_eq!(me.research_points, 0);
        let unit = me.units.first().unwrap();
        assert_eq!(unit.cargo.wood, 20);
        assert_eq!(unit.cargo.coal, 0);
        assert!(obs.players.get(1).is_some_and(|p| p.units.is_empty()));
    }
}
