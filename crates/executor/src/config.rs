use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use common::types::{AdjacencyMatrix, Vertex};

use super::error::Error;

fn default_show_matrix() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_show_matrix")]
    pub show_matrix: bool,
    #[serde(default)]
    pub show_operators: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_matrix: default_show_matrix(),
            show_operators: false,
        }
    }
}

/// A `(from, to)` query for the path report.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PathQuery {
    pub from: Vertex,
    pub to: Vertex,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub matrix: AdjacencyMatrix,
    #[serde(default)]
    pub paths: Vec<PathQuery>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    pub scenarios: Vec<ScenarioConfig>,
}

/// Default location, relative to the workspace root.
pub fn default_config_path() -> Result<PathBuf, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    Ok(base_path
        .join("crates")
        .join("executor")
        .join("Config.toml"))
}

/// Loads configuration from a TOML file, then applies `EXECUTOR_*`
/// environment overrides (nested keys split on `__`, e.g.
/// `EXECUTOR_REPORT__SHOW_MATRIX=false`).
pub fn load_config(config_file_path: &Path) -> Result<Config, Error> {
    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path).required(true))
        .add_source(
            Environment::with_prefix("EXECUTOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
