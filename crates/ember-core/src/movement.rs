//! Collision-avoidant movement.
//!
//! Units are resolved one at a time against a [`MovementState`] that lives
//! for a single turn. The first unit to claim a cell keeps it; later units
//! that want the same cell get one random alternative and otherwise stay
//! put.

use ember_types::{Direction, Position};
use ember_world::{GameMap, Player};
use rand::Rng;
use tracing::debug;

use crate::proximity::closest;

/// Attempts per move: the desired direction plus one random alternative.
pub const MAX_MOVE_ATTEMPTS: usize = 2;

// ---------------------------------------------------------------------------
// OccupancyGrid
// ---------------------------------------------------------------------------

/// Which cells are already spoken for this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// An all-free grid of the given size. Negative sizes yield an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let len = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .unwrap_or(0);
        Self {
            width,
            height,
            cells: vec![false; len],
        }
    }

    /// An all-free grid the size of `map`.
    pub fn for_map(map: &GameMap) -> Self {
        Self::new(map.width(), map.height())
    }

    /// Whether `pos` lies on the grid.
    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        let row = usize::try_from(pos.y).ok()?;
        let col = usize::try_from(pos.x).ok()?;
        let width = usize::try_from(self.width).ok()?;
        row.checked_mul(width)?.checked_add(col)
    }

    /// Whether `pos` has been claimed. Off-grid cells are never claimed.
    pub fn is_claimed(&self, pos: Position) -> bool {
        self.index(pos)
            .and_then(|i| self.cells.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Claim `pos`. Returns `false` if it was already claimed or is off the
    /// grid.
    pub fn claim(&mut self, pos: Position) -> bool {
        match self.index(pos).and_then(|i| self.cells.get_mut(i)) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.cells.iter().filter(|&&claimed| claimed).count()
    }
}

// ---------------------------------------------------------------------------
// MovementState
// ---------------------------------------------------------------------------

/// Per-turn movement bookkeeping threaded through unit planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementState {
    occupancy: OccupancyGrid,
    destinations: Vec<Position>,
}

impl MovementState {
    /// Fresh state for `map` with nothing claimed.
    pub fn new(map: &GameMap) -> Self {
        Self {
            occupancy: OccupancyGrid::for_map(map),
            destinations: Vec::new(),
        }
    }

    /// Fresh state with every opposing unit and city tile pre-claimed.
    ///
    /// Pre-claimed cells are not destinations.
    pub fn with_blockers<'a>(map: &GameMap, opponents: impl IntoIterator<Item = &'a Player>) -> Self {
        let mut state = Self::new(map);
        for opponent in opponents {
            for unit in &opponent.units {
                state.occupancy.claim(unit.pos);
            }
            for tile in opponent.city_tiles() {
                state.occupancy.claim(tile.pos);
            }
        }
        state
    }

    /// The occupancy grid.
    pub const fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    /// Committed move destinations, in commit order.
    pub fn destinations(&self) -> &[Position] {
        &self.destinations
    }

    /// Consume the state, keeping the destination list.
    pub fn into_destinations(self) -> Vec<Position> {
        self.destinations
    }

    /// Mark a cell as held by a unit that is not moving this turn.
    pub fn hold(&mut self, pos: Position) {
        self.occupancy.claim(pos);
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a one-step move from `from` toward `desired`.
///
/// On success the target cell is claimed, appended to the destination list,
/// and the direction that was actually validated is returned. This is
/// `desired` on the first attempt, or the random alternative on the retry.
///
/// Returns `None`, without claiming anything, when the target is off the
/// grid, when the random alternative is `desired` itself, or when both
/// attempts hit claimed cells.
pub fn resolve<R: Rng + ?Sized>(
    state: &mut MovementState,
    from: Position,
    desired: Direction,
    rng: &mut R,
) -> Option<Direction> {
    let mut direction = desired;
    for attempt in 1..=MAX_MOVE_ATTEMPTS {
        let target = from.translate(direction);
        if !state.occupancy.in_bounds(target) {
            debug!(from = %from, direction = %direction, "move rejected: off the grid");
            return None;
        }
        if state.occupancy.claim(target) {
            state.destinations.push(target);
            return Some(direction);
        }
        if attempt >= MAX_MOVE_ATTEMPTS {
            break;
        }
        let alternative = Direction::ALL
            .get(rng.random_range(0..Direction::ALL.len()))
            .copied()?;
        if alternative == desired {
            debug!(from = %from, direction = %direction, "move rejected: retry drew the same direction");
            return None;
        }
        debug!(
            from = %from,
            blocked = %target,
            retry = %alternative,
            "target claimed, retrying"
        );
        direction = alternative;
    }
    debug!(from = %from, desired = %desired, "move rejected: all attempts claimed");
    None
}

/// Steer around city tiles on the way to a build site.
///
/// When stepping `direction` from `from` would land on a city tile other
/// than `toward`, returns the first of north, east, south, west whose cell
/// is on the grid, holds no city tile, and is strictly closest to `toward`.
/// Otherwise, or when no such cell exists, `direction` is returned as is.
pub fn deflect(map: &GameMap, from: Position, toward: Position, direction: Direction) -> Direction {
    let next = from.translate(direction);
    if next == toward || !map.has_city_tile(next) {
        return direction;
    }
    let candidates = Direction::CARDINAL.map(|d| from.translate(d));
    closest(toward, candidates, |&cell| {
        map.in_bounds(cell) && !map.has_city_tile(cell)
    })
    .map_or(direction, |cell| from.direction_to(cell))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ember_types::{CityId, UnitId, UnitKind};
    use ember_world::{Cargo, City, CityTile, Unit};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn map(width: i32, height: i32) -> GameMap {
        GameMap::new(width, height).unwrap()
    }

    #[test]
    fn claim_is_first_come() {
        let mut grid = OccupancyGrid::new(3, 3);
        assert!(grid.claim(Position::new(1, 1)));
        assert!(!grid.claim(Position::new(1, 1)));
        assert!(!grid.claim(Position::new(3, 0)));
        assert!(grid.is_claimed(Position::new(1, 1)));
        assert!(!grid.is_claimed(Position::new(-1, 0)));
        assert_eq!(grid.claimed_count(), 1);
    }

    #[test]
    fn free_target_is_claimed_and_recorded() {
        let mut state = MovementState::new(&map(4, 4));
        let mut rng = SmallRng::seed_from_u64(42);
        let dir = resolve(&mut state, Position::new(0, 0), Direction::East, &mut rng);
        assert_eq!(dir, Some(Direction::East));
        assert!(state.occupancy().is_claimed(Position::new(1, 0)));
        assert_eq!(state.destinations(), &[Position::new(1, 0)]);
    }

    #[test]
    fn off_grid_target_leaves_state_untouched() {
        let mut state = MovementState::new(&map(4, 4));
        let before = state.clone();
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(
            resolve(&mut state, Position::new(0, 0), Direction::West, &mut rng),
            None
        );
        assert_eq!(
            resolve(&mut state, Position::new(0, 0), Direction::North, &mut rng),
            None
        );
        assert_eq!(state, before);
    }

    #[test]
    fn claimed_target_never_double_booked() {
        for seed in 0..200 {
            let mut state = MovementState::new(&map(5, 5));
            let mut rng = SmallRng::seed_from_u64(seed);
            let from = Position::new(2, 2);
            state.hold(Position::new(3, 2));

            let result = resolve(&mut state, from, Direction::East, &mut rng);
            match result {
                None => {
                    assert!(state.destinations().is_empty());
                    assert_eq!(state.occupancy().claimed_count(), 1);
                }
                Some(dir) => {
                    assert_ne!(dir, Direction::East);
                    assert_eq!(state.destinations(), &[from.translate(dir)]);
                    assert_eq!(state.occupancy().claimed_count(), 2);
                }
            }
        }
    }

    #[test]
    fn fully_boxed_in_unit_stays() {
        let mut state = MovementState::new(&map(3, 3));
        let from = Position::new(1, 1);
        state.hold(from);
        for n in from.neighbors() {
            state.hold(n);
        }
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            assert_eq!(resolve(&mut state, from, Direction::North, &mut rng), None);
        }
        assert!(state.destinations().is_empty());
    }

    #[test]
    fn opponents_are_pre_claimed_but_not_destinations() {
        let game_map = map(4, 4);
        let mut opponent = Player::new(1);
        opponent.units.push(Unit {
            id: UnitId::new("u_9"),
            team: 1,
            kind: UnitKind::Worker,
            pos: Position::new(2, 2),
            cooldown: 0.0,
            cargo: Cargo::default(),
        });
        opponent.cities.push(City {
            id: CityId::new("c_9"),
            team: 1,
            fuel: 0.0,
            tiles: vec![CityTile {
                city_id: CityId::new("c_9"),
                team: 1,
                pos: Position::new(3, 3),
                cooldown: 0.0,
            }],
        });
        let state = MovementState::with_blockers(&game_map, [&opponent]);
        assert!(state.occupancy().is_claimed(Position::new(2, 2)));
        assert!(state.occupancy().is_claimed(Position::new(3, 3)));
        assert!(state.destinations().is_empty());
    }

    #[test]
    fn deflect_keeps_direction_off_city_tiles() {
        let game_map = map(5, 5);
        let dir = deflect(&game_map, Position::new(0, 0), Position::new(3, 0), Direction::East);
        assert_eq!(dir, Direction::East);
    }

    #[test]
    fn deflect_steps_around_a_city_tile() {
        let mut game_map = map(5, 5);
        game_map
            .set_city_tile(Position::new(1, 1), 0, CityId::new("c_1"))
            .unwrap();
        // From (1,2) heading north to (1,0) would cross the tile at (1,1).
        let dir = deflect(&game_map, Position::new(1, 2), Position::new(1, 0), Direction::North);
        // East, south and west all sit 3 away from the site; east is scanned first.
        assert_eq!(dir, Direction::East);
    }

    #[test]
    fn deflect_keeps_direction_when_walled_in() {
        let mut game_map = map(2, 2);
        game_map
            .set_city_tile(Position::new(1, 0), 0, CityId::new("c_1"))
            .unwrap();
        game_map
            .set_city_tile(Position::new(0, 1), 0, CityId::new("c_1"))
            .unwrap();
        let dir = deflect(&game_map, Position::new(0, 0), Position::new(1, 1), Direction::East);
        assert_eq!(dir, Direction::East);
    }
}
