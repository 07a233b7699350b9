//! Configuration file support for Vitalog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/vitalog/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub goals: GoalsConfig,

    #[serde(default)]
    pub quick_add: QuickAddConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Which built-in nutrition default set to seed the goal store with
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NutritionDefaults {
    #[default]
    Dashboard,
    Tracker,
}

/// Daily goal configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GoalsConfig {
    #[serde(default = "default_water_goal_ml")]
    pub water_ml: u32,

    #[serde(default = "default_meditation_minutes")]
    pub meditation_minutes: u32,

    #[serde(default)]
    pub nutrition_defaults: NutritionDefaults,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            water_ml: default_water_goal_ml(),
            meditation_minutes: default_meditation_minutes(),
            nutrition_defaults: NutritionDefaults::default(),
        }
    }
}

/// Fixed increments used by the summary view's quick-add buttons
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuickAddConfig {
    #[serde(default = "default_quick_water_ml")]
    pub water_ml: u32,

    #[serde(default = "default_quick_calories")]
    pub calories: u32,

    #[serde(default = "default_quick_meditation_minutes")]
    pub meditation_minutes: u32,
}

impl Default for QuickAddConfig {
    fn default() -> Self {
        Self {
            water_ml: default_quick_water_ml(),
            calories: default_quick_calories(),
            meditation_minutes: default_quick_meditation_minutes(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("vitalog")
}

fn default_water_goal_ml() -> u32 {
    2000
}

fn default_meditation_minutes() -> u32 {
    30
}

fn default_quick_water_ml() -> u32 {
    250
}

fn default_quick_calories() -> u32 {
    100
}

fn default_quick_meditation_minutes() -> u32 {
    5
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("vitalog").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Build the goal store this configuration describes
    pub fn goal_store(&self) -> crate::GoalStore {
        let mut store = match self.goals.nutrition_defaults {
            NutritionDefaults::Dashboard => crate::GoalStore::with_dashboard_defaults(),
            NutritionDefaults::Tracker => crate::GoalStore::with_tracker_defaults(),
        };
        store.set_water_goal(self.goals.water_ml);
        store.set_meditation_goal(self.goals.meditation_minutes);
        store
    }
}
