use std::path::Path;

use log::warn;

use crate::ai::SearchConfig;
use crate::arena::ArenaConfig;
use crate::error::ConfigError;
use crate::game::{COLS, ROWS};

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: String,
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub arena: ArenaConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: "info".to_string(),
            board: BoardConfig::default(),
            search: SearchConfig::default(),
            arena: ArenaConfig::default(),
        }
    }
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be >= 1".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be >= 1".into()));
        }
        if self.search.max_depth == 0 && self.search.time_limit_ms == 0 {
            return Err(ConfigError::Validation(
                "search.max_depth or search.time_limit_ms must be > 0".into(),
            ));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be >= 1".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
