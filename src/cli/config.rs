//! Cost configuration files and default paths

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cost::CostModel;

/// Name of the directory holding the default config file.
const APP_DIR: &str = "min-edit-distance";

/// Get the configuration directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join(APP_DIR))
}

/// Get the default config file path (may not exist)
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// Cost settings as stored on disk.
///
/// Fields are signed so that negative values in a file produce a validation
/// error naming the operation instead of a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostConfig {
    /// Cost of inserting one symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_cost: Option<i64>,
    /// Cost of deleting one symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_cost: Option<i64>,
    /// Cost of replacing one symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_cost: Option<i64>,
}

impl CostConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, overrides: &CostConfig) -> Self {
        Self {
            insert_cost: overrides.insert_cost.or(self.insert_cost),
            delete_cost: overrides.delete_cost.or(self.delete_cost),
            replace_cost: overrides.replace_cost.or(self.replace_cost),
        }
    }

    /// Resolve into a validated cost model, filling gaps with the defaults.
    pub fn to_cost_model(&self) -> Result<CostModel> {
        let defaults = CostModel::default();
        let model = CostModel::from_signed(
            self.insert_cost.unwrap_or(defaults.insert_cost() as i64),
            self.delete_cost.unwrap_or(defaults.delete_cost() as i64),
            self.replace_cost.unwrap_or(defaults.replace_cost() as i64),
        )?;

        if !model.is_metric() {
            log::warn!(
                "replace cost exceeds insert + delete cost ({}); distances may violate the triangle inequality",
                model
            );
        }

        Ok(model)
    }
}

/// Where the file layer of the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from this file
    File(PathBuf),
    /// No config file; built-in defaults
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Load the config file layer.
///
/// An explicit path must exist. Without one, the default path is used when a
/// file is present there, and built-in defaults otherwise.
pub fn resolve_config(custom_path: Option<&Path>) -> Result<(CostConfig, ConfigSource)> {
    if let Some(path) = custom_path {
        validate_config_path(path)?;
        let config = CostConfig::load(path)?;
        log::debug!("loaded cost config from {}", path.display());
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    match default_config_path() {
        Ok(path) if path.exists() => {
            let config = CostConfig::load(&path)?;
            log::debug!("loaded cost config from {}", path.display());
            Ok((config, ConfigSource::File(path)))
        }
        Ok(_) => Ok((CostConfig::default(), ConfigSource::Defaults)),
        Err(e) => {
            log::debug!("no default config location: {}", e);
            Ok((CostConfig::default(), ConfigSource::Defaults))
        }
    }
}
