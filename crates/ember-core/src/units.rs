//! Per-unit decisions.
//!
//! Only workers are driven; carts cannot mine, so they stay put and hold
//! their cell. A worker with free cargo space goes harvesting. A full unit founds a city
//! when every city is safe and it is standing on a buildable cell, heads
//! for a build site when every city is safe but it is not, rescues the
//! first at-risk city otherwise, and falls back on dropping its cargo at
//! the nearest city tile.
//!
//! Every step goes through [`movement::resolve`](crate::movement::resolve).
//! A unit that ends up staying where it is holds its own cell so nobody
//! moves onto it.

use ember_types::{Action, Annotation, Direction, Position};
use ember_world::{Cell, GameMap, Player, Unit};
use rand::Rng;
use tracing::debug;

use crate::config::DebugConfig;
use crate::fuel::{TileFuelStatus, rescue_target};
use crate::movement::{MovementState, deflect, resolve};
use crate::proximity::{closest_build_site, closest_city_tile, closest_resource};

/// What a unit has decided to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move toward a resource cell it can mine.
    Harvest(Position),
    /// Found a city on the current cell.
    BuildCity,
    /// Move toward an empty cell next to one of our cities.
    BuildSite(Position),
    /// Move toward a city tile that may burn out.
    Rescue(Position),
    /// Move toward the nearest city tile to hand over cargo.
    Deposit(Position),
    /// Nothing to do.
    Idle,
}

impl Intent {
    /// Short label for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Harvest(_) => "harvest",
            Self::BuildCity => "build_city",
            Self::BuildSite(_) => "build_site",
            Self::Rescue(_) => "rescue",
            Self::Deposit(_) => "deposit",
            Self::Idle => "idle",
        }
    }
}

/// Turn-wide context shared by every unit decision.
#[derive(Debug, Clone)]
pub struct UnitPlanner<'a> {
    map: &'a GameMap,
    player: &'a Player,
    resources: Vec<&'a Cell>,
    rescue: Option<Position>,
    annotate_build_sites: bool,
}

impl<'a> UnitPlanner<'a> {
    /// Set up planning for `player`'s units.
    ///
    /// `resources` are the cells holding resources, as returned by
    /// [`find_resources`](crate::resources::find_resources). `fuel` is the
    /// output of [`analyze`](crate::fuel::analyze) for the same player.
    pub fn new(
        map: &'a GameMap,
        player: &'a Player,
        resources: Vec<&'a Cell>,
        fuel: &[TileFuelStatus],
        debug: &DebugConfig,
    ) -> Self {
        Self {
            map,
            player,
            resources,
            rescue: rescue_target(fuel),
            annotate_build_sites: debug.annotate_build_sites,
        }
    }

    /// Whether no city is at risk of burning out.
    pub const fn all_cities_safe(&self) -> bool {
        self.rescue.is_none()
    }

    /// Decide what `unit` wants, ignoring other units and cooldown.
    pub fn intent(&self, unit: &Unit) -> Intent {
        if !unit.is_worker() {
            return Intent::Idle;
        }

        if unit.cargo_space_left() > 0 {
            return closest_resource(unit.pos, self.player, &self.resources)
                .map_or(Intent::Idle, |cell| Intent::Harvest(cell.pos));
        }

        if self.all_cities_safe() {
            if unit.can_build(self.map) {
                return Intent::BuildCity;
            }
            if let Some(site) = closest_build_site(unit.pos, self.map, self.player) {
                return Intent::BuildSite(site);
            }
        }

        if let Some(target) = self.rescue {
            return Intent::Rescue(target);
        }

        closest_city_tile(unit.pos, self.player).map_or(Intent::Idle, |tile| Intent::Deposit(tile.pos))
    }

    /// Plan `unit`'s action for the turn, claiming cells in `movement`.
    ///
    /// Build-site targets are recorded in `annotations` when enabled.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        unit: &Unit,
        movement: &mut MovementState,
        annotations: &mut Vec<Annotation>,
        rng: &mut R,
    ) -> Option<Action> {
        let intent = if unit.can_act() {
            self.intent(unit)
        } else {
            Intent::Idle
        };
        debug!(unit_id = %unit.id, pos = %unit.pos, intent = intent.as_str(), "unit intent");

        let action = match intent {
            Intent::Idle => None,
            Intent::BuildCity => Some(Action::BuildCity {
                unit_id: unit.id.clone(),
            }),
            Intent::BuildSite(site) => {
                if self.annotate_build_sites {
                    annotations.push(Annotation::circle(site));
                }
                let direction = deflect(self.map, unit.pos, site, unit.pos.direction_to(site));
                step(unit, direction, movement, rng)
            }
            Intent::Harvest(target) | Intent::Rescue(target) | Intent::Deposit(target) => {
                step(unit, unit.pos.direction_to(target), movement, rng)
            }
        };

        if !matches!(action, Some(Action::Move { .. })) {
            movement.hold(unit.pos);
        }
        action
    }
}

fn step<R: Rng + ?Sized>(
    unit: &Unit,
    desired: Direction,
    movement: &mut MovementState,
    rng: &mut R,
) -> Option<Action> {
    resolve(movement, unit.pos, desired, rng).map(|direction| Action::Move {
        unit_id: unit.id.clone(),
        direction,
    })
}
