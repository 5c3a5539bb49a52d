//! Configuration for the revopt CLI.
//!
//! Resolution order: `--config <path>`, then `./revopt.toml`, then
//! `<config dir>/revopt/revopt.toml`, then built-in defaults. Command-line
//! flags override whatever the file says.

use anyhow::{Context, Result};
use revopt_core::{DemandModel, RevoptError, RevoptResult, DEFAULT_ELASTICITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::slider::Slider;

pub const CONFIG_FILE_NAME: &str = "revopt.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RevoptConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Booking export to load
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("merged_data_with_fields.csv")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_elasticity")]
    pub elasticity: f64,
    #[serde(default = "default_slider_min")]
    pub slider_min: f64,
    #[serde(default = "default_slider_max")]
    pub slider_max: f64,
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            elasticity: default_elasticity(),
            slider_min: default_slider_min(),
            slider_max: default_slider_max(),
            slider_step: default_slider_step(),
        }
    }
}

fn default_elasticity() -> f64 {
    DEFAULT_ELASTICITY
}

fn default_slider_min() -> f64 {
    500.0
}

fn default_slider_max() -> f64 {
    5000.0
}

fn default_slider_step() -> f64 {
    10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl RevoptConfig {
    pub fn validate(&self) -> RevoptResult<()> {
        let sim = &self.simulation;
        if !sim.elasticity.is_finite() {
            return Err(RevoptError::Config(format!(
                "simulation.elasticity must be finite, got {}",
                sim.elasticity
            )));
        }
        if !(sim.slider_min.is_finite() && sim.slider_max.is_finite())
            || sim.slider_min >= sim.slider_max
        {
            return Err(RevoptError::Config(format!(
                "slider bounds must satisfy min < max, got [{}, {}]",
                sim.slider_min, sim.slider_max
            )));
        }
        if !(sim.slider_step.is_finite() && sim.slider_step > 0.0) {
            return Err(RevoptError::Config(format!(
                "simulation.slider_step must be positive, got {}",
                sim.slider_step
            )));
        }
        self.logging
            .level
            .parse::<tracing::Level>()
            .map_err(|_| {
                RevoptError::Config(format!("unknown logging.level '{}'", self.logging.level))
            })?;
        Ok(())
    }

    pub fn slider(&self) -> Slider {
        Slider::new(
            self.simulation.slider_min,
            self.simulation.slider_max,
            self.simulation.slider_step,
        )
    }

    pub fn demand_model(&self) -> RevoptResult<DemandModel> {
        DemandModel::new(self.simulation.elasticity)
    }
}

/// `<config dir>/revopt/revopt.toml`, when the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("revopt").join(CONFIG_FILE_NAME))
}

/// Find the config file to use; `None` means defaults.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    user_config_path().filter(|path| path.exists())
}

pub fn parse_config(contents: &str) -> Result<RevoptConfig> {
    let config: RevoptConfig = toml::from_str(contents).context("parsing revopt config")?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(explicit: Option<&Path>) -> Result<RevoptConfig> {
    let Some(path) = resolve_config_path(explicit) else {
        debug!("no config file found, using defaults");
        return Ok(RevoptConfig::default());
    };
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config =
        parse_config(&contents).with_context(|| format!("in config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
