//! Desk configuration, read from a JSON file at startup.
//!
//! The path is taken from `--config`, then `RENTAL_DESK_CONFIG`, then
//! `<config dir>/rental-desk/config.json`. Nothing is ever written back except
//! by `rental-desk init-config`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{check_daily_rate, SeedVehicle};

const APP_NAME: &str = "rental-desk";
const CONFIG_FILE: &str = "config.json";
pub const CONFIG_ENV: &str = "RENTAL_DESK_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeskConfig {
    /// Prefix for money amounts shown at the desk.
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
    /// Vehicles loaded into the fleet when the desk opens.
    #[serde(default)]
    pub fleet: Vec<SeedVehicle>,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            fleet: Vec::new(),
        }
    }
}

impl DeskConfig {
    /// The config written by `init-config`: defaults plus one sample vehicle.
    pub fn sample() -> Self {
        Self {
            fleet: vec![SeedVehicle {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                registration_number: "REG1".to_string(),
                price_per_day: Decimal::from(30),
            }],
            ..Self::default()
        }
    }

    /// Load configuration from `path`.
    /// Returns default config if the file doesn't exist or fails to parse.
    pub fn load(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Strict load: a missing file yields defaults, anything else unreadable or
    /// a seed vehicle with an out-of-range rate is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        for seed in &config.fleet {
            check_daily_rate(seed.price_per_day).with_context(|| {
                format!(
                    "Vehicle {} in config file {}",
                    seed.registration_number,
                    path.display()
                )
            })?;
        }

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }
}

/// Resolve the config path: explicit flag, then environment, then the user's
/// config directory.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    default_config_path()
}

fn default_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
