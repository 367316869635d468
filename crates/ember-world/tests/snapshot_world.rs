//! Building worlds from JSON snapshots.

#![allow(clippy::unwrap_used)]

use ember_types::{CityId, Position, ResourceType};
use ember_world::{GameState, Observation, WorldError};

fn parse(json: &str) -> Result<GameState, WorldError> {
    let obs: Observation = serde_json::from_str(json).unwrap();
    GameState::from_observation(&obs)
}

#[test]
fn cities_and_resources_land_on_the_map() {
    let state = parse(
        r#"{
            "turn": 12,
            "player": 1,
            "width": 6,
            "height": 4,
            "resources": [
                {"kind": "wood", "x": 0, "y": 0, "amount": 300},
                {"kind": "uranium", "x": 5, "y": 3, "amount": 0}
            ],
            "players": [
                {"team": 0, "cities": [{"id": "c_1", "fuel": 10.0, "tiles": [{"x": 2, "y": 2}]}]},
                {"team": 1, "research_points": 60,
                 "cities": [{"id": "c_2", "fuel": 200.0, "tiles": [{"x": 4, "y": 1}, {"x": 5, "y": 1}]}],
                 "units": [{"id": "u_3", "kind": "worker", "x": 4, "y": 2, "cargo": {"coal": 40}}]}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(state.turn, 12);
    let me = state.player().unwrap();
    assert_eq!(me.team, 1);
    assert!(me.researched(ResourceType::Coal));
    assert!(!me.researched(ResourceType::Uranium));
    assert_eq!(me.city_tile_count(), 2);
    assert_eq!(me.worker_count(), 1);

    let opponents: Vec<_> = state.opponents().map(|p| p.team).collect();
    assert_eq!(opponents, vec![0]);

    let tile = state.map.cell(Position::new(5, 1)).unwrap();
    assert_eq!(
        tile.city_tile.as_ref().map(|t| (&t.city_id, t.team)),
        Some((&CityId::new("c_2"), 1))
    );
    assert_eq!(state.map.adjacent_city_tiles(Position::new(4, 2)), 1);

    // An exhausted deposit is not a resource.
    assert!(!state.map.cell(Position::new(5, 3)).unwrap().has_resource());
    assert!(state.map.cell(Position::new(0, 0)).unwrap().has_resource());
}

#[test]
fn city_on_live_resource_is_rejected() {
    let err = parse(
        r#"{"player": 0, "width": 3, "height": 3,
            "resources": [{"kind": "coal", "x": 1, "y": 1, "amount": 50}],
            "players": [{"team": 0, "cities": [{"id": "c_1", "tiles": [{"x": 1, "y": 1}]}]}]}"#,
    )
    .unwrap_err();
    assert_eq!(err, WorldError::CellConflict(Position::new(1, 1)));
}

#[test]
fn shared_city_cell_is_rejected() {
    let err = parse(
        r#"{"player": 0, "width": 3, "height": 3,
            "players": [
                {"team": 0, "cities": [{"id": "c_1", "tiles": [{"x": 0, "y": 2}]}]},
                {"team": 1, "cities": [{"id": "c_2", "tiles": [{"x": 0, "y": 2}]}]}
            ]}"#,
    )
    .unwrap_err();
    assert_eq!(err, WorldError::DuplicateCityTile(Position::new(0, 2)));
}

#[test]
fn zero_sized_map_is_rejected() {
    let err = parse(r#"{"player": 0, "width": 0, "height": 5, "players": [{"team": 0}]}"#).unwrap_err();
    assert_eq!(
        err,
        WorldError::InvalidDimensions {
            width: 0,
            height: 5
        }
    );
}
