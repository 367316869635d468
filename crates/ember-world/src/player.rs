//! Players and the entities they control.
//!
//! Everything here mirrors what the game reports for one turn. Predicates
//! such as [`Unit::can_act`] or [`Player::researched`] encode the game rules
//! the planner must respect; none of them change state.

use ember_types::{CityId, Position, ResourceType, UnitId, UnitKind};
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACTION_COOLDOWN_LIMIT, CITY_BUILD_COST, COAL_RESEARCH_POINTS, URANIUM_RESEARCH_POINTS,
};
use crate::map::GameMap;

/// Team index (0 or 1 in a two-player match).
pub type Team = u8;

/// Resources carried by a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cargo {
    /// Wood carried.
    #[serde(default)]
    pub wood: u32,
    /// Coal carried.
    #[serde(default)]
    pub coal: u32,
    /// Uranium carried.
    #[serde(default)]
    pub uranium: u32,
}

impl Cargo {
    /// Total carried across all resource types.
    pub const fn total(&self) -> u32 {
        self.wood
            .saturating_add(self.coal)
            .saturating_add(self.uranium)
    }
}

/// A worker or cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit identifier.
    pub id: UnitId,
    /// Owning team.
    pub team: Team,
    /// Worker or cart.
    pub kind: UnitKind,
    /// Current cell.
    pub pos: Position,
    /// Turns until the unit may act again; it may act below 1.
    pub cooldown: f64,
    /// Carried resources.
    pub cargo: Cargo,
}

impl Unit {
    /// Whether this is a worker.
    pub fn is_worker(&self) -> bool {
        self.kind == UnitKind::Worker
    }

    /// Whether this is a cart.
    pub fn is_cart(&self) -> bool {
        self.kind == UnitKind::Cart
    }

    /// Whether the unit has action budget this turn.
    pub fn can_act(&self) -> bool {
        self.cooldown < ACTION_COOLDOWN_LIMIT
    }

    /// Free cargo capacity.
    pub const fn cargo_space_left(&self) -> u32 {
        self.kind.cargo_capacity().saturating_sub(self.cargo.total())
    }

    /// Whether the unit could found a city on its current cell this turn.
    ///
    /// Requires a worker with action budget, enough cargo to pay the build
    /// cost, and a cell with neither a resource nor a city tile.
    pub fn can_build(&self, map: &GameMap) -> bool {
        self.is_worker()
            && self.can_act()
            && self.cargo.total() >= CITY_BUILD_COST
            && map.cell(self.pos).is_some_and(|cell| cell.is_empty())
    }
}

/// One tile of a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityTile {
    /// Owning city.
    pub city_id: CityId,
    /// Owning team.
    pub team: Team,
    /// Cell the tile occupies.
    pub pos: Position,
    /// Turns until the tile may act again; it may act below 1.
    pub cooldown: f64,
}

impl CityTile {
    /// Whether the tile has action budget this turn.
    pub fn can_act(&self) -> bool {
        self.cooldown < ACTION_COOLDOWN_LIMIT
    }
}

/// A city: tiles sharing one fuel pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// City identifier.
    pub id: CityId,
    /// Owning team.
    pub team: Team,
    /// Fuel shared by every tile of the city.
    pub fuel: f64,
    /// Tiles in the order the game reported them.
    pub tiles: Vec<CityTile>,
}

/// One side of the match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Team index.
    pub team: Team,
    /// Accumulated research points.
    pub research_points: u32,
    /// Cities in report order; this is the planner's iteration order.
    pub cities: Vec<City>,
    /// Units in report order; this decides who wins a contested cell.
    pub units: Vec<Unit>,
}

impl Player {
    /// Create a player with no cities or units.
    pub const fn new(team: Team) -> Self {
        Self {
            team,
            research_points: 0,
            cities: Vec::new(),
            units: Vec::new(),
        }
    }

    /// Whether coal can be mined.
    pub const fn researched_coal(&self) -> bool {
        self.research_points >= COAL_RESEARCH_POINTS
    }

    /// Whether uranium can be mined.
    pub const fn researched_uranium(&self) -> bool {
        self.research_points >= URANIUM_RESEARCH_POINTS
    }

    /// Whether resources of `kind` can be mined.
    pub const fn researched(&self, kind: ResourceType) -> bool {
        match kind {
            ResourceType::Wood => true,
            ResourceType::Coal => self.researched_coal(),
            ResourceType::Uranium => self.researched_uranium(),
        }
    }

    /// Look up a city by id.
    pub fn city(&self, id: &CityId) -> Option<&City> {
        self.cities.iter().find(|city| &city.id == id)
    }

    /// All city tiles, per city then per tile.
    pub fn city_tiles(&self) -> impl Iterator<Item = &CityTile> {
        self.cities.iter().flat_map(|city| city.tiles.iter())
    }

    /// Total number of city tiles across all cities.
    pub fn city_tile_count(&self) -> usize {
        self.cities.iter().map(|city| city.tiles.len()).sum()
    }

    /// Number of workers.
    pub fn worker_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_worker()).count()
    }

    /// Number of carts.
    pub fn cart_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_cart()).count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn worker_at(pos: Position, wood: u32, cooldown: f64) -> Unit {
        Unit {
            id: UnitId::new("u_1"),
            team: 0,
            kind: UnitKind::Worker,
            pos,
            cooldown,
            cargo: Cargo {
                wood,
                ..Cargo::default()
            },
        }
    }

    #[test]
    fn research_unlocks_follow_thresholds() {
        let mut player = Player::new(0);
        assert!(player.researched(ResourceType::Wood));
        assert!(!player.researched(ResourceType::Coal));

        player.research_points = 50;
        assert!(player.researched(ResourceType::Coal));
        assert!(!player.researched(ResourceType::Uranium));

        player.research_points = 200;
        assert!(player.researched(ResourceType::Uranium));
    }

    #[test]
    fn cargo_space_is_capacity_minus_load() {
        let mut unit = worker_at(Position::new(0, 0), 40, 0.0);
        unit.cargo.coal = 10;
        assert_eq!(unit.cargo_space_left(), 50);

        unit.cargo.uranium = 500;
        assert_eq!(unit.cargo_space_left(), 0);
    }

    #[test]
    fn cooldown_gates_actions() {
        assert!(worker_at(Position::new(0, 0), 0, 0.5).can_act());
        assert!(!worker_at(Position::new(0, 0), 0, 1.0).can_act());
    }

    #[test]
    fn can_build_needs_full_cargo_on_empty_cell() {
        let mut map = GameMap::new(3, 3).unwrap();
        let pos = Position::new(1, 1);
        assert!(worker_at(pos, 100, 0.0).can_build(&map));
        assert!(!worker_at(pos, 99, 0.0).can_build(&map));
        assert!(!worker_at(pos, 100, 2.0).can_build(&map));

        map.set_resource(pos, ResourceType::Wood, 50).unwrap();
        assert!(!worker_at(pos, 100, 0.0).can_build(&map));
    }

    #[test]
    fn carts_never_build() {
        let map = GameMap::new(3, 3).unwrap();
        let mut cart = worker_at(Position::new(0, 0), 100, 0.0);
        cart.kind = UnitKind::Cart;
        assert!(!cart.can_build(&map));
    }

    #[test]
    fn counts_tiles_and_units() {
        let mut player = Player::new(1);
        player.cities.push(City {
            id: CityId::new("c_1"),
            team: 1,
            fuel: 0.0,
            tiles: vec![
                CityTile {
                    city_id: CityId::new("c_1"),
                    team: 1,
                    pos: Position::new(0, 0),
                    cooldown: 0.0,
                },
                CityTile {
                    city_id: CityId::new("c_1"),
                    team: 1,
                    pos: Position::new(0, 1),
                    cooldown: 0.0,
                },
            ],
        });
        player.units.push(worker_at(Position::new(2, 2), 0, 0.0));
        assert_eq!(player.city_tile_count(), 2);
        assert_eq!(player.worker_count(), 1);
        assert_eq!(player.cart_count(), 0);
        assert!(player.city(&CityId::new("c_1")).is_some());
        assert!(player.city(&CityId::new("c_9")).is_none());
    }
}
