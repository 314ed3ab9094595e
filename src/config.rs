//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Deepest search the console will run.
pub const MAX_SEARCH_DEPTH: u32 = 8;

/// Settings shared by every variant.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Plies searched by computer players.
    #[serde(default = "default_search_depth")]
    search_depth: u32,

    /// Node cap for the letter variants.
    #[serde(default = "default_node_budget")]
    node_budget: u64,

    /// Newline-separated word list for the words variant.
    #[serde(default)]
    dictionary: Option<PathBuf>,

    /// Seed for obstacle placement. Random when absent.
    #[serde(default)]
    obstacle_seed: Option<u64>,

    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[instrument]
fn default_search_depth() -> u32 {
    3
}

#[instrument]
fn default_node_budget() -> u64 {
    50_000
}

#[instrument]
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: default_search_depth(),
            node_budget: default_node_budget(),
            dictionary: None,
            obstacle_seed: None,
            log_level: default_log_level(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(depth = config.search_depth, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the search depth, keeping the validation rules.
    pub fn with_search_depth(mut self, depth: u32) -> Result<Self, ConfigError> {
        self.search_depth = depth;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the obstacle seed.
    pub fn with_obstacle_seed(mut self, seed: u64) -> Self {
        self.obstacle_seed = Some(seed);
        self
    }

    /// Replaces the dictionary path.
    pub fn with_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary = Some(path.into());
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SEARCH_DEPTH).contains(&self.search_depth) {
            return Err(ConfigError::new(format!(
                "search_depth must be between 1 and {}, got {}",
                MAX_SEARCH_DEPTH, self.search_depth
            )));
        }
        if self.node_budget == 0 {
            return Err(ConfigError::new("node_budget must be positive".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_takes_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.search_depth(), 3);
        assert_eq!(*config.node_budget(), 50_000);
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn test_fields_override_defaults() {
        let config = GameConfig::from_toml(
            r#"
search_depth = 5
obstacle_seed = 7
dictionary = "words.txt"
"#,
        )
        .unwrap();
        assert_eq!(*config.search_depth(), 5);
        assert_eq!(*config.obstacle_seed(), Some(7));
        assert_eq!(config.dictionary().as_deref(), Some(Path::new("words.txt")));
    }

    #[test]
    fn test_command_line_overrides() {
        let config = GameConfig::from_toml("obstacle_seed = 7")
            .unwrap()
            .with_obstacle_seed(42)
            .with_dictionary("words.txt");
        assert_eq!(*config.obstacle_seed(), Some(42));
        assert_eq!(config.dictionary().as_deref(), Some(Path::new("words.txt")));
    }

    #[test]
    fn test_validation() {
        assert!(GameConfig::from_toml("search_depth = 0").is_err());
        assert!(GameConfig::from_toml("search_depth = 9").is_err());
        assert!(GameConfig::from_toml("node_budget = 0").is_err());
        assert!(GameConfig::from_toml("colour = true").is_err());
        let err = GameConfig::default().with_search_depth(12).unwrap_err();
        assert!(err.message.contains("search_depth"));
    }
}
