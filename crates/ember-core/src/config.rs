//! Configuration loading and typed config structures for the planner.
//!
//! The canonical configuration lives in `ember-config.yaml` at the project
//! root. Every field has a default matching the game's rules, so an empty or
//! partial file is valid.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlannerConfig {
    /// Fuel survival analysis.
    #[serde(default)]
    pub fuel: FuelConfig,

    /// Unit production.
    #[serde(default)]
    pub production: ProductionConfig,

    /// Movement resolution.
    #[serde(default)]
    pub movement: MovementConfig,

    /// Debug annotations.
    #[serde(default)]
    pub debug: DebugConfig,
}

impl PlannerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// City fuel survival parameters.
///
/// A tile burns `base_burn - adjacency_discount * adjacent_city_tiles` fuel
/// per turn (never below zero). A city is at risk when its fuel does not
/// exceed `survival_horizon_turns` turns of its total burn.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FuelConfig {
    /// Per-tile burn with no neighbouring city tiles.
    #[serde(default = "default_base_burn")]
    pub base_burn: u32,

    /// Burn reduction per edge-adjacent city tile.
    #[serde(default = "default_adjacency_discount")]
    pub adjacency_discount: u32,

    /// Turns of burn a city's fuel must cover to count as safe.
    #[serde(default = "default_survival_horizon_turns")]
    pub survival_horizon_turns: u32,
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            base_burn: default_base_burn(),
            adjacency_discount: default_adjacency_discount(),
            survival_horizon_turns: default_survival_horizon_turns(),
        }
    }
}

/// City tile production parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductionConfig {
    /// Target number of workers per cart.
    #[serde(default = "default_workers_per_cart")]
    pub workers_per_cart: u32,
}

impl Default for ProductionConfig {
    fn default() -> Self {
        Self {
            workers_per_cart: default_workers_per_cart(),
        }
    }
}

/// Movement resolution parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovementConfig {
    /// Treat opposing units and opposing city tiles as claimed cells, since
    /// the game never lets a unit enter them.
    #[serde(default = "default_true")]
    pub block_opponent_cells: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            block_opponent_cells: true,
        }
    }
}

/// Debug annotation toggles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DebugConfig {
    /// Emit a circle on every build-site target.
    #[serde(default = "default_true")]
    pub annotate_build_sites: bool,

    /// Emit a cross on every committed move destination.
    #[serde(default)]
    pub annotate_destinations: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            annotate_build_sites: true,
            annotate_destinations: false,
        }
    }
}

const fn default_base_burn() -> u32 {
    23
}

const fn default_adjacency_discount() -> u32 {
    5
}

const fn default_survival_horizon_turns() -> u32 {
    10
}

const fn default_workers_per_cart() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_game_rules() {
        let config = PlannerConfig::default();
        assert_eq!(config.fuel.base_burn, 23);
        assert_eq!(config.fuel.adjacency_discount, 5);
        assert_eq!(config.fuel.survival_horizon_turns, 10);
        assert_eq!(config.production.workers_per_cart, 5);
        assert!(config.movement.block_opponent_cells);
        assert!(config.debug.annotate_build_sites);
        assert!(!config.debug.annotate_destinations);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
fuel:
  base_burn: 30
  adjacency_discount: 4
  survival_horizon_turns: 20

production:
  workers_per_cart: 3

movement:
  block_opponent_cells: false

debug:
  annotate_build_sites: false
  annotate_destinations: true
";
        let config = PlannerConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();
        assert_eq!(config.fuel.base_burn, 30);
        assert_eq!(config.fuel.adjacency_discount, 4);
        assert_eq!(config.fuel.survival_horizon_turns, 20);
        assert_eq!(config.production.workers_per_cart, 3);
        assert!(!config.movement.block_opponent_cells);
        assert!(!config.debug.annotate_build_sites);
        assert!(config.debug.annotate_destinations);
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "fuel:\n  survival_horizon_turns: 4\n";
        let config = PlannerConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        // Horizon is overridden
        assert_eq!(config.fuel.survival_horizon_turns, 4);
        // Everything else uses defaults
        assert_eq!(config.fuel.base_burn, 23);
        assert_eq!(config.production.workers_per_cart, 5);
    }

    #[test]
    fn parse_rejects_wrong_types() {
        let yaml = "production:\n  workers_per_cart: many\n";
        assert!(matches!(
            PlannerConfig::parse(yaml),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("ember-config.yaml");
        if path.exists() {
            let config = PlannerConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
