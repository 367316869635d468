//! City tile production and research.
//!
//! Each city tile with action budget does at most one thing per turn:
//!
//! 1. **Produce** while the player has more city tiles than units. A cart is
//!    chosen once `workers / workers_per_cart <= carts`, otherwise a worker.
//! 2. **Research** while the highest resource tier is still locked.
//! 3. Otherwise nothing.
//!
//! Unit counts are taken once at the start of the turn and are not updated
//! as tiles queue production.

use ember_types::{Action, ResourceType};
use ember_world::Player;
use tracing::debug;

use crate::config::ProductionConfig;

/// Which unit kind the next production should be, given current counts.
///
/// `workers / workers_per_cart <= carts` is evaluated as
/// `workers <= carts * workers_per_cart`, which is exact for whole numbers.
pub fn wants_cart(workers: usize, carts: usize, workers_per_cart: u32) -> bool {
    let ratio = usize::try_from(workers_per_cart).unwrap_or(usize::MAX);
    workers <= carts.saturating_mul(ratio)
}

/// One action for every city tile that can act and has something to do, in
/// per-city, per-tile order.
pub fn plan_production(player: &Player, config: &ProductionConfig) -> Vec<Action> {
    let tile_count = player.city_tile_count();
    let unit_count = player.units.len();
    let workers = player.worker_count();
    let carts = player.cart_count();
    let research_done = player.researched(ResourceType::HIGHEST);

    let mut actions = Vec::new();
    for tile in player.city_tiles().filter(|tile| tile.can_act()) {
        let action = if tile_count > unit_count {
            if wants_cart(workers, carts, config.workers_per_cart) {
                Action::BuildCart { pos: tile.pos }
            } else {
                Action::BuildWorker { pos: tile.pos }
            }
        } else if !research_done {
            Action::Research { pos: tile.pos }
        } else {
            continue;
        };
        debug!(city = %tile.city_id, pos = %tile.pos, command = %action, "city tile action");
        actions.push(action);
    }
    actions
}
