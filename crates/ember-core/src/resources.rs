//! Resource locator.
//!
//! Scans the grid once per turn for every cell holding a harvestable
//! deposit. Research eligibility is not applied here: it depends on the
//! player asking, so [`crate::proximity::closest_resource`] filters at query
//! time.

use ember_world::{Cell, GameMap};

/// Every cell with a positive resource amount, in row-major order.
///
/// The fixed scan order makes "first found wins" tie-breaks downstream
/// reproducible.
pub fn find_resources(map: &GameMap) -> Vec<&Cell> {
    map.cells().filter(|cell| cell.has_resource()).collect()
}
