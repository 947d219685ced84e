use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::{Difficulty, EvalWeights, MinimaxEngine, PositionalHeuristic};
use crate::error::ConfigError;

/// Deepest search accepted as an explicit override.
pub const MAX_DEPTH: u32 = 12;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub game: GameConfig,
}

/// How strong the engine plays and how it scores positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Explicit search depth; takes precedence over `difficulty`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    pub weights: EvalWeights,
}

impl EngineConfig {
    pub fn search_depth(&self) -> u32 {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }

    pub fn build_engine(&self) -> MinimaxEngine {
        MinimaxEngine::with_heuristic(
            self.search_depth(),
            Box::new(PositionalHeuristic::new(self.weights)),
        )
    }
}

/// Who drops the first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Engine,
    #[default]
    Random,
}

/// Who sits across from the first human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    #[default]
    Engine,
    /// A second person at the same console.
    Human,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first: FirstPlayer,
    pub opponent: Opponent,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(depth) = self.engine.depth {
            if depth == 0 || depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "engine.depth must be in 1..={MAX_DEPTH}"
                )));
            }
        }

        let w = &self.engine.weights;
        if w.center < 0 || w.adjacent < 0 {
            return Err(ConfigError::Validation(
                "engine.weights.center and engine.weights.adjacent must be >= 0".into(),
            ));
        }
        if w.two < 0 {
            return Err(ConfigError::Validation(
                "engine.weights.two must be >= 0".into(),
            ));
        }
        if w.three <= w.two {
            return Err(ConfigError::Validation(
                "engine.weights.three must be > engine.weights.two".into(),
            ));
        }
        if w.win <= w.three {
            return Err(ConfigError::Validation(
                "engine.weights.win must be > engine.weights.three".into(),
            ));
        }
        if w.opponent_two > 0 {
            return Err(ConfigError::Validation(
                "engine.weights.opponent_two must be <= 0".into(),
            ));
        }
        if w.opponent_three > w.opponent_two {
            return Err(ConfigError::Validation(
                "engine.weights.opponent_three must be <= engine.weights.opponent_two".into(),
            ));
        }

        Ok(())
    }

    /// Render this configuration, overrides included, as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        AppConfig::default()
            .to_toml()
            .expect("default config serializes")
    }
}
