//! Grid coordinates.
//!
//! Units move one cell per turn along the four cardinal directions, so the
//! distance that matches the movement model is Manhattan distance. Every
//! proximity query in the planner goes through [`Position::distance_to`].

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// A cell coordinate. Signed so that a step off the grid edge is still
/// representable and can be rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, growing eastward.
    pub x: i32,
    /// Row, growing southward.
    pub y: i32,
}

impl Position {
    /// Create a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in `direction`.
    pub const fn translate(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Manhattan distance to `other`.
    pub const fn distance_to(self, other: Self) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// Whether `other` shares an edge with this cell.
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.distance_to(other) == 1
    }

    /// The single step that brings this position closest to `target`.
    ///
    /// Directions are tried in [`Direction::CARDINAL`] order and only a
    /// strictly shorter distance replaces the current best, so the first
    /// improving direction wins ties. Returns [`Direction::Center`] when no
    /// step improves on standing still, which includes `self == target`.
    pub fn direction_to(self, target: Self) -> Direction {
        let mut closest_dist = self.distance_to(target);
        let mut closest_dir = Direction::Center;
        for direction in Direction::CARDINAL {
            let dist = self.translate(direction).distance_to(target);
            if dist < closest_dist {
                closest_dist = dist;
                closest_dir = direction;
            }
        }
        closest_dir
    }

    /// The four edge-adjacent positions, in [`Direction::CARDINAL`] order.
    /// No bounds check is applied.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        Direction::CARDINAL
            .into_iter()
            .map(move |direction| self.translate(direction))
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
