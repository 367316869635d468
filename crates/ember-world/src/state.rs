//! The validated world for one turn.

use ember_types::Position;
use tracing::debug;

use crate::error::WorldError;
use crate::map::GameMap;
use crate::observation::{Observation, PlayerObservation};
use crate::player::{City, CityTile, Player, Team, Unit};

/// One turn's world: the grid plus every player's cities and units.
///
/// Built once per turn and only read afterwards. Every city tile listed by
/// a player is also marked on the map, so cell queries and player queries
/// agree.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Turn number.
    pub turn: u32,
    /// The team the planner controls.
    pub team: Team,
    /// The grid.
    pub map: GameMap,
    /// All players, in snapshot order.
    pub players: Vec<Player>,
}

impl GameState {
    /// Assemble a world from already-built parts.
    ///
    /// The map is taken as given; callers that build players by hand must
    /// mark their city tiles on it themselves.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownTeam`] if no player has team `team`.
    pub fn new(
        turn: u32,
        team: Team,
        map: GameMap,
        players: Vec<Player>,
    ) -> Result<Self, WorldError> {
        if !players.iter().any(|p| p.team == team) {
            return Err(WorldError::UnknownTeam(team));
        }
        Ok(Self {
            turn,
            team,
            map,
            players,
        })
    }

    /// Build and validate the world described by a snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`WorldError`] if the grid size is invalid, anything lies
    /// off the grid, a cell would hold both a resource and a city tile, two
    /// city tiles share a cell, or the controlled team is missing.
    pub fn from_observation(obs: &Observation) -> Result<Self, WorldError> {
        let mut map = GameMap::new(obs.width, obs.height)?;

        for resource in &obs.resources {
            map.set_resource(
                Position::new(resource.x, resource.y),
                resource.kind,
                resource.amount,
            )?;
        }

        let mut players = Vec::with_capacity(obs.players.len());
        for player_obs in &obs.players {
            players.push(build_player(&mut map, player_obs)?);
        }

        debug!(
            turn = obs.turn,
            width = obs.width,
            height = obs.height,
            resources = obs.resources.len(),
            players = players.len(),
            "world built from observation"
        );

        Self::new(obs.turn, obs.player, map, players)
    }

    /// The controlled player.
    pub fn player(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.team == self.team)
    }

    /// Every player other than the controlled one.
    pub fn opponents(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.team != self.team)
    }
}

/// Convert one player's snapshot, marking its city tiles on the map.
fn build_player(map: &mut GameMap, obs: &PlayerObservation) -> Result<Player, WorldError> {
    let mut player = Player::new(obs.team);
    player.research_points = obs.research_points;

    for city_obs in &obs.cities {
        let mut tiles = Vec::with_capacity(city_obs.tiles.len());
        for tile in &city_obs.tiles {
            let pos = Position::new(tile.x, tile.y);
            map.set_city_tile(pos, obs.team, city_obs.id.clone())?;
            tiles.push(CityTile {
                city_id: city_obs.id.clone(),
                team: obs.team,
                pos,
                cooldown: tile.cooldown,
            });
        }
        player.cities.push(City {
            id: city_obs.id.clone(),
            team: obs.team,
            fuel: city_obs.fuel,
            tiles,
        });
    }

    for unit_obs in &obs.units {
        let pos = Position::new(unit_obs.x, unit_obs.y);
        if !map.in_bounds(pos) {
            return Err(WorldError::OutOfBounds(pos));
        }
        player.units.push(Unit {
            id: unit_obs.id.clone(),
            team: obs.team,
            kind: unit_obs.kind,
            pos,
            cooldown: unit_obs.cooldown,
            cargo: unit_obs.cargo,
        });
    }

    Ok(player)
}
