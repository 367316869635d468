//! Actions emitted by the planner and the debug annotations that ride along.
//!
//! Each [`Action`] belongs to exactly one [`Actor`]: a unit (by id) or a
//! city tile (by position). `Display` renders the command string the game
//! harness expects, e.g. `m u_3 n` or `bw 4 7`.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;
use crate::ids::UnitId;
use crate::position::Position;

/// Who performs an action.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// A worker or cart.
    Unit(UnitId),
    /// The city tile at this position.
    CityTile(Position),
}

/// One action for one actor, valid for the current turn only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Move a unit one cell.
    Move {
        /// The moving unit.
        unit_id: UnitId,
        /// Step direction; [`Direction::Center`] keeps the unit in place.
        direction: Direction,
    },
    /// Found a city on the unit's current cell.
    BuildCity {
        /// The building worker.
        unit_id: UnitId,
    },
    /// Produce a worker at a city tile.
    BuildWorker {
        /// The producing city tile.
        pos: Position,
    },
    /// Produce a cart at a city tile.
    BuildCart {
        /// The producing city tile.
        pos: Position,
    },
    /// Spend the city tile's turn on research.
    Research {
        /// The researching city tile.
        pos: Position,
    },
}

impl Action {
    /// The actor this action is issued for.
    pub fn actor(&self) -> Actor {
        match self {
            Self::Move { unit_id, .. } | Self::BuildCity { unit_id } => {
                Actor::Unit(unit_id.clone())
            }
            Self::BuildWorker { pos } | Self::BuildCart { pos } | Self::Research { pos } => {
                Actor::CityTile(*pos)
            }
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Move { unit_id, direction } => write!(f, "m {unit_id} {direction}"),
            Self::BuildCity { unit_id } => write!(f, "bcity {unit_id}"),
            Self::BuildWorker { pos } => write!(f, "bw {} {}", pos.x, pos.y),
            Self::BuildCart { pos } => write!(f, "bc {} {}", pos.x, pos.y),
            Self::Research { pos } => write!(f, "r {} {}", pos.x, pos.y),
        }
    }
}

/// Shape of a debug marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    /// A circle, used for build-site targets.
    Circle,
    /// An X, used for committed move destinations.
    Cross,
}

/// A visual marker for replays. Has no effect on the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Marker shape.
    pub kind: AnnotationKind,
    /// Marked cell.
    pub pos: Position,
}

impl Annotation {
    /// A circle at `pos`.
    pub const fn circle(pos: Position) -> Self {
        Self {
            kind: AnnotationKind::Circle,
            pos,
        }
    }

    /// A cross at `pos`.
    pub const fn cross(pos: Position) -> Self {
        Self {
            kind: AnnotationKind::Cross,
            pos,
        }
    }
}

impl core::fmt::Display for Annotation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let code = match self.kind {
            AnnotationKind::Circle => "dc",
            AnnotationKind::Cross => "dx",
        };
        write!(f, "{code} {} {}", self.pos.x, self.pos.y)
    }
}
