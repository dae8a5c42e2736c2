// Dashboard configuration (dashboard.toml).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "NBA_DASHBOARD_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub model: ModelConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub path: PathBuf,
    pub columns: ColumnMapping,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/nba_2022-23_all_stats_with_salary.csv"),
            columns: ColumnMapping::default(),
        }
    }
}

/// Source column names for the three fields the dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub player: String,
    pub salary: String,
    pub three_point_percentage: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            player: "Player Name".to_string(),
            salary: "Salary".to_string(),
            three_point_percentage: "3P%".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Number of points on the sampled regression curve.
    pub curve_samples: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { curve_samples: 100 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_salary_millions: f64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_salary_millions: 15.0,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Resolve the config file the way the dashboard does at startup.
    ///
    /// An explicit path (from [`CONFIG_ENV_VAR`]) must exist. Otherwise
    /// `dashboard.toml` in `dir` is used when present, and defaults when not.
    pub fn discover(explicit: Option<PathBuf>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(&path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.exists() {
            Self::load_from(&candidate)
        } else {
            log::info!("No {DEFAULT_CONFIG_FILE} found, using default configuration");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let columns = [
            ("data.columns.player", &self.data.columns.player),
            ("data.columns.salary", &self.data.columns.salary),
            (
                "data.columns.three_point_percentage",
                &self.data.columns.three_point_percentage,
            ),
        ];
        for (field, name) in columns {
            if name.is_empty() {
                return Err(validation(field, "column name must not be empty"));
            }
        }

        if self.model.curve_samples < 2 {
            return Err(validation(
                "model.curve_samples",
                format!("must be at least 2, got {}", self.model.curve_samples),
            ));
        }

        if !(self.ui.default_salary_millions.is_finite() && self.ui.default_salary_millions > 0.0) {
            return Err(validation(
                "ui.default_salary_millions",
                "must be a positive number",
            ));
        }

        if self.ui.window_width <= 0.0 || self.ui.window_height <= 0.0 {
            return Err(validation("ui.window_width/window_height", "must be positive"));
        }

        Ok(())
    }
}

/// Load the startup configuration, honouring [`CONFIG_ENV_VAR`].
pub fn load_config() -> Result<Config, ConfigError> {
    let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    Config::discover(explicit, Path::new("."))
}

fn validation(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.to_string(),
        message: message.into(),
    }
}
