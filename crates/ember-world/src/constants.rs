//! Game rule constants the planner relies on.

/// Research points at which coal becomes mineable.
pub const COAL_RESEARCH_POINTS: u32 = 50;

/// Research points at which uranium becomes mineable.
pub const URANIUM_RESEARCH_POINTS: u32 = 200;

/// Total cargo a worker must carry to found a city.
pub const CITY_BUILD_COST: u32 = 100;

/// A unit or city tile may act only while its cooldown is below this.
pub const ACTION_COOLDOWN_LIMIT: f64 = 1.0;
