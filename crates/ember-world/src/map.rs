//! The fixed-size game grid.
//!
//! [`GameMap`] stores `width * height` cells in row-major order. A cell holds
//! at most one of {resource, city tile}; the mutators reject anything that
//! would break that. Lookups outside the grid return `None`.

use ember_types::{CityId, Position, ResourceType};
use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::player::Team;

/// A resource deposit on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource tier.
    pub kind: ResourceType,
    /// Units left to harvest.
    pub amount: u32,
}

/// Marks a cell as belonging to a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityTileRef {
    /// Owning team.
    pub team: Team,
    /// Owning city.
    pub city_id: CityId,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Where the cell is.
    pub pos: Position,
    /// Resource deposit, if any.
    pub resource: Option<Resource>,
    /// City tile, if any.
    pub city_tile: Option<CityTileRef>,
}

impl Cell {
    const fn empty(pos: Position) -> Self {
        Self {
            pos,
            resource: None,
            city_tile: None,
        }
    }

    /// Whether a deposit with a positive amount sits here.
    pub const fn has_resource(&self) -> bool {
        matches!(self.resource, Some(Resource { amount, .. }) if amount > 0)
    }

    /// The tier of the deposit here, if there is one worth harvesting.
    pub const fn resource_type(&self) -> Option<ResourceType> {
        match self.resource {
            Some(Resource { kind, amount }) if amount > 0 => Some(kind),
            _ => None,
        }
    }

    /// Whether a city tile occupies this cell.
    pub const fn is_city_tile(&self) -> bool {
        self.city_tile.is_some()
    }

    /// Neither a resource nor a city tile: a place a city could be founded.
    pub const fn is_empty(&self) -> bool {
        !self.has_resource() && !self.is_city_tile()
    }
}

/// The game grid for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    width: i32,
    height: i32,
    /// Row-major: index `y * width + x`.
    cells: Vec<Cell>,
}

impl GameMap {
    /// Create an empty `width x height` grid.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidDimensions`] if either side is not
    /// positive.
    pub fn new(width: i32, height: i32) -> Result<Self, WorldError> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::InvalidDimensions { width, height });
        }
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::empty(Position::new(x, y))))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> i32 {
        self.height
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

    /// The cell at `pos`, or `None` off the grid.
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).and_then(|i| self.cells.get(i))
    }

    /// The cell at `(x, y)`, or `None` off the grid.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.cell(Position::new(x, y))
    }

    fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell, WorldError> {
        self.index(pos)
            .and_then(|i| self.cells.get_mut(i))
            .ok_or(WorldError::OutOfBounds(pos))
    }

    /// All cells in row-major order (`y` outer, `x` inner).
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In-bounds edge neighbours of `pos`, in north, east, south, west order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = &Cell> {
        pos.neighbors().filter_map(|n| self.cell(n))
    }

    /// Whether a city tile (of either team) occupies `pos`.
    pub fn has_city_tile(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_city_tile)
    }

    /// Number of city tiles (of either team) edge-adjacent to `pos`.
    pub fn adjacent_city_tiles(&self, pos: Position) -> usize {
        self.neighbors(pos).filter(|c| c.is_city_tile()).count()
    }

    /// Place a resource deposit.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::OutOfBounds`] off the grid, or
    /// [`WorldError::CellConflict`] if a city tile already sits there.
    pub fn set_resource(
        &mut self,
        pos: Position,
        kind: ResourceType,
        amount: u32,
    ) -> Result<(), WorldError> {
        let cell = self.cell_mut(pos)?;
        if cell.city_tile.is_some() {
            return Err(WorldError::CellConflict(pos));
        }
        cell.resource = Some(Resource { kind, amount });
        Ok(())
    }

    /// Mark a cell as a city tile.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::OutOfBounds`] off the grid,
    /// [`WorldError::DuplicateCityTile`] if a city tile is already there, or
    /// [`WorldError::CellConflict`] if a resource deposit sits there.
    pub fn set_city_tile(
        &mut self,
        pos: Position,
        team: Team,
        city_id: CityId,
    ) -> Result<(), WorldError> {
        let cell = self.cell_mut(pos)?;
        if cell.city_tile.is_some() {
            return Err(WorldError::DuplicateCityTile(pos));
        }
        if cell.has_resource() {
            return Err(WorldError::CellConflict(pos));
        }
        // A depleted deposit is no longer a resource.
        cell.resource = None;
        cell.city_tile = Some(CityTileRef { team, city_id });
        Ok(())
    }
}
