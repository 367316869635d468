//! Enumeration types shared across the workspace.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Resource tiers
// ---------------------------------------------------------------------------

/// A harvestable resource type.
///
/// Variants are ordered by the research needed to mine them, so
/// `Wood < Coal < Uranium` holds for the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Available from turn 0.
    Wood,
    /// Requires coal research.
    Coal,
    /// Requires uranium research; the highest tier.
    Uranium,
}

impl ResourceType {
    /// The highest resource tier. Research stops once it is unlocked.
    pub const HIGHEST: Self = Self::Uranium;

    /// Lowercase name used in logs and snapshots.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Coal => "coal",
            Self::Uranium => "uranium",
        }
    }
}

// ---------------------------------------------------------------------------
// Unit kinds
// ---------------------------------------------------------------------------

/// Cargo capacity of a worker.
pub const WORKER_CARGO_CAPACITY: u32 = 100;

/// Cargo capacity of a cart.
pub const CART_CARGO_CAPACITY: u32 = 2000;

/// The two kinds of mobile unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Light unit: harvests resources and founds cities.
    Worker,
    /// Heavy unit: large cargo hold, cannot found cities.
    Cart,
}

impl UnitKind {
    /// Maximum total cargo this kind of unit can carry.
    pub const fn cargo_capacity(self) -> u32 {
        match self {
            Self::Worker => WORKER_CARGO_CAPACITY,
            Self::Cart => CART_CARGO_CAPACITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// A single-step movement direction on the grid.
///
/// `North` decreases `y`, `South` increases it; `East` increases `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `y - 1`.
    North,
    /// `x + 1`.
    East,
    /// `y + 1`.
    South,
    /// `x - 1`.
    West,
    /// Stay in place.
    Center,
}

impl Direction {
    /// The four cardinal directions in tie-break order.
    pub const CARDINAL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The cardinal directions plus [`Direction::Center`].
    pub const ALL: [Self; 5] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Center,
    ];

    /// Offset `(dx, dy)` applied by one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::Center => (0, 0),
        }
    }

    /// Single-letter code used in move commands.
    pub const fn code(self) -> char {
        match self {
            Self::North => 'n',
            Self::East => 'e',
            Self::South => 's',
            Self::West => 'w',
            Self::Center => 'c',
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_tiers_are_ordered_by_unlock() {
        assert!(ResourceType::Wood < ResourceType::Coal);
        assert!(ResourceType::Coal < ResourceType::Uranium);
        assert_eq!(ResourceType::HIGHEST, ResourceType::Uranium);
    }

    #[test]
    fn cart_carries_more_than_worker() {
        assert_eq!(UnitKind::Worker.cargo_capacity(), 100);
        assert_eq!(UnitKind::Cart.cargo_capacity(), 2000);
    }

    #[test]
    fn direction_codes() {
        let codes: String = Direction::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, "neswc");
    }

    #[test]
    fn resource_type_deserializes_lowercase() {
        let parsed: Result<ResourceType, _> = serde_json::from_str("\"coal\"");
        assert_eq!(parsed.ok(), Some(ResourceType::Coal));
    }
}
