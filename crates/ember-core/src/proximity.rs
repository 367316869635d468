//! Nearest-entity queries.
//!
//! [`closest`] is the one primitive: scan candidates in order, keep the
//! eligible one with the smallest Manhattan distance, and let the first
//! candidate win a tie (only a strictly smaller distance replaces the
//! current best). The helpers below feed it resource cells, city tiles, and
//! build sites.

use ember_types::Position;
use ember_world::{Cell, CityTile, GameMap, Player};

/// Something that sits on a grid cell.
pub trait Located {
    /// The cell it sits on.
    fn position(&self) -> Position;
}

impl Located for Position {
    fn position(&self) -> Position {
        *self
    }
}

impl Located for Cell {
    fn position(&self) -> Position {
        self.pos
    }
}

impl Located for CityTile {
    fn position(&self) -> Position {
        self.pos
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn position(&self) -> Position {
        (**self).position()
    }
}

/// The eligible candidate nearest to `origin`.
///
/// Returns `None` when `candidates` is empty or nothing passes `eligible`.
/// Ties go to the candidate scanned first.
pub fn closest<T, I, F>(origin: Position, candidates: I, mut eligible: F) -> Option<T>
where
    T: Located,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    let mut best: Option<(u32, T)> = None;
    for candidate in candidates {
        if !eligible(&candidate) {
            continue;
        }
        let dist = origin.distance_to(candidate.position());
        if best.as_ref().is_none_or(|(best_dist, _)| dist < *best_dist) {
            best = Some((dist, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}

/// Nearest resource cell the player has the research to mine.
pub fn closest_resource<'a>(
    origin: Position,
    player: &Player,
    resources: &[&'a Cell],
) -> Option<&'a Cell> {
    closest(origin, resources.iter().copied(), |cell| {
        cell.resource_type()
            .is_some_and(|kind| player.researched(kind))
    })
}

/// Nearest of the player's city tiles, scanned per city then per tile.
pub fn closest_city_tile(origin: Position, player: &Player) -> Option<&CityTile> {
    closest(origin, player.city_tiles(), |_| true)
}

/// Nearest empty cell edge-adjacent to one of the player's city tiles.
///
/// Neighbours are scanned per city, per tile, then north, east, south, west;
/// a cell next to several tiles is simply seen more than once.
pub fn closest_build_site(origin: Position, map: &GameMap, player: &Player) -> Option<Position> {
    let sites = player
        .city_tiles()
        .flat_map(|tile| map.neighbors(tile.pos))
        .filter(|cell| cell.is_empty())
        .map(|cell| cell.pos);
    closest(origin, sites, |_| true)
}
