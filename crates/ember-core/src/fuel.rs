//! Fuel survival analysis.
//!
//! Every city tile burns fuel each night, less for each city tile touching
//! it. A city pays for all of its tiles from one shared pool, so risk is
//! judged per city and then reported on every tile of that city.
//!
//! Only one city is rescued per turn: [`rescue_target`] returns the first
//! flagged tile in city order, and units fall back on it when cities are at
//! risk. Spreading units across several failing cities is not attempted.

use ember_types::{CityId, Position};
use ember_world::{City, GameMap, Player};
use tracing::debug;

use crate::config::FuelConfig;

/// Survival verdict for one city tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileFuelStatus {
    /// The tile's cell.
    pub pos: Position,
    /// Owning city.
    pub city_id: CityId,
    /// The city's shared fuel.
    pub fuel: f64,
    /// Sum of every tile's burn rate in the city.
    pub total_burn: u64,
    /// Whether the city's fuel covers no more than the survival horizon.
    pub may_burn_out: bool,
}

/// Per-turn burn of a tile with `adjacent_city_tiles` edge neighbours that
/// are city tiles. Never negative.
pub const fn tile_burn_rate(config: &FuelConfig, adjacent_city_tiles: u32) -> u32 {
    config
        .base_burn
        .saturating_sub(config.adjacency_discount.saturating_mul(adjacent_city_tiles))
}

/// Total per-turn burn of a city: the sum of its tiles' burn rates.
pub fn city_burn(map: &GameMap, config: &FuelConfig, city: &City) -> u64 {
    city.tiles
        .iter()
        .map(|tile| {
            let adjacent = u32::try_from(map.adjacent_city_tiles(tile.pos)).unwrap_or(u32::MAX);
            u64::from(tile_burn_rate(config, adjacent))
        })
        .fold(0_u64, u64::saturating_add)
}

/// Whether `fuel` lasts no longer than `horizon` turns at `total_burn` per
/// turn. The boundary is inclusive: exactly enough fuel is still at risk.
#[allow(clippy::cast_precision_loss)]
pub fn may_burn_out(fuel: f64, total_burn: u64, horizon: u32) -> bool {
    let needed = total_burn.saturating_mul(u64::from(horizon));
    fuel <= needed as f64
}

/// Survival status of every city tile the player owns, per city then per
/// tile.
pub fn analyze(map: &GameMap, player: &Player, config: &FuelConfig) -> Vec<TileFuelStatus> {
    let mut statuses = Vec::with_capacity(player.city_tile_count());
    for city in &player.cities {
        let total_burn = city_burn(map, config, city);
        let at_risk = may_burn_out(city.fuel, total_burn, config.survival_horizon_turns);
        debug!(
            city = %city.id,
            fuel = city.fuel,
            total_burn,
            tiles = city.tiles.len(),
            at_risk,
            "city fuel checked"
        );
        statuses.extend(city.tiles.iter().map(|tile| TileFuelStatus {
            pos: tile.pos,
            city_id: city.id.clone(),
            fuel: city.fuel,
            total_burn,
            may_burn_out: at_risk,
        }));
    }
    statuses
}

/// Position of the first at-risk tile, or `None` when every city is safe.
pub fn rescue_target(statuses: &[TileFuelStatus]) -> Option<Position> {
    statuses
        .iter()
        .find(|status| status.may_burn_out)
        .map(|status| status.pos)
}
