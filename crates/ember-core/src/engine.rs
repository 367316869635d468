//! Turn planning entry point.
//!
//! [`plan_turn`] runs the whole pipeline once: locate resources, check
//! fuel, queue city tile actions, then fold every unit through the
//! movement state in unit order. [`Agent`] wraps it with a config and a
//! per-turn seeded RNG for reproducible games.

use ember_types::{Action, Annotation, Position};
use ember_world::GameState;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::fuel::analyze;
use crate::movement::MovementState;
use crate::production::plan_production;
use crate::resources::find_resources;
use crate::units::UnitPlanner;

/// Everything decided for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnPlan {
    /// City tile actions first, then unit actions in unit order.
    pub actions: Vec<Action>,
    /// Debug markers; they do not affect the game.
    pub annotations: Vec<Annotation>,
    /// Cells units committed to move onto, in commit order.
    pub destinations: Vec<Position>,
    /// Occupancy grid cells claimed once planning finished: destinations,
    /// cells held by stationary units, and pre-claimed opponent cells.
    pub claimed_cells: usize,
}

impl TurnPlan {
    /// The game command strings: actions, then annotations.
    pub fn commands(&self) -> Vec<String> {
        self.actions
            .iter()
            .map(ToString::to_string)
            .chain(self.annotations.iter().map(ToString::to_string))
            .collect()
    }
}

/// Plan every action for the controlled player this turn.
///
/// # Errors
///
/// Returns [`PlanError::UnknownPlayer`] if `state` has no player for its
/// controlled team.
pub fn plan_turn<R: Rng + ?Sized>(
    state: &GameState,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<TurnPlan, PlanError> {
    let player = state
        .player()
        .ok_or(PlanError::UnknownPlayer(state.team))?;
    let map = &state.map;

    let resources = find_resources(map);
    let resource_cells = resources.len();
    let fuel = analyze(map, player, &config.fuel);
    let at_risk_tiles = fuel.iter().filter(|status| status.may_burn_out).count();

    let mut actions = plan_production(player, &config.production);
    let city_actions = actions.len();

    let planner = UnitPlanner::new(map, player, resources, &fuel, &config.debug);
    let movement = if config.movement.block_opponent_cells {
        MovementState::with_blockers(map, state.opponents())
    } else {
        MovementState::new(map)
    };

    let mut annotations = Vec::new();
    let movement = player.units.iter().fold(movement, |mut movement, unit| {
        if let Some(action) = planner.plan(unit, &mut movement, &mut annotations, &mut *rng) {
            actions.push(action);
        }
        movement
    });
    let claimed_cells = movement.occupancy().claimed_count();
    let destinations = movement.into_destinations();

    if config.debug.annotate_destinations {
        annotations.extend(destinations.iter().copied().map(Annotation::cross));
    }

    info!(
        turn = state.turn,
        team = state.team,
        resource_cells,
        at_risk_tiles,
        city_actions,
        unit_actions = actions.len().saturating_sub(city_actions),
        moves = destinations.len(),
        claimed_cells,
        "turn planned"
    );

    Ok(TurnPlan {
        actions,
        annotations,
        destinations,
        claimed_cells,
    })
}

/// A planner with fixed configuration, seeded once per game.
#[derive(Debug, Clone, Default)]
pub struct Agent {
    config: PlannerConfig,
    seed: u64,
}

impl Agent {
    /// Create an agent. The same seed and turn always give the same plan.
    pub const fn new(config: PlannerConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// The agent's configuration.
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan the turn in `state` with an RNG seeded from the game seed and
    /// the turn number.
    ///
    /// # Errors
    ///
    /// See [`plan_turn`].
    pub fn act(&self, state: &GameState) -> Result<TurnPlan, PlanError> {
        let mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(u64::from(state.turn)));
        plan_turn(state, &self.config, &mut rng)
    }
}
