//! Configuration file support for bodyman.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bodyman/config.toml`.

use crate::{ActivityLevel, Error, Gender, Result, UserProfile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the persisted data file inside the data directory
pub const DATA_FILE_NAME: &str = "body_management_data.json";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub goal: GoalConfig,
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

/// User biometrics
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_age")]
    pub age: u32,

    #[serde(default = "default_gender")]
    pub gender: Gender,

    #[serde(default = "default_height_cm")]
    pub height_cm: f64,

    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,

    #[serde(default = "default_activity_level")]
    pub activity_level: ActivityLevel,

    #[serde(default = "default_goal_weight_kg")]
    pub goal_weight_kg: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            age: default_age(),
            gender: default_gender(),
            height_cm: default_height_cm(),
            weight_kg: default_weight_kg(),
            activity_level: default_activity_level(),
            goal_weight_kg: default_goal_weight_kg(),
        }
    }
}

impl ProfileConfig {
    /// Build the profile, rejecting biometrics that make no sense
    pub fn to_profile(&self) -> Result<UserProfile> {
        if self.age == 0 {
            return Err(Error::Config("profile.age must be positive".into()));
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.height_cm) || !positive(self.weight_kg) {
            return Err(Error::Config(
                "profile.height_cm and profile.weight_kg must be positive".into(),
            ));
        }
        if let ActivityLevel::Other(level) = &self.activity_level {
            tracing::warn!(
                "Unknown activity level {:?}, using sedentary multiplier",
                level
            );
        }
        Ok(UserProfile::new(
            self.age,
            self.gender,
            self.height_cm,
            self.weight_kg,
            self.activity_level.clone(),
            self.goal_weight_kg,
        ))
    }
}

/// Weekly exercise goal configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Target used when no data file exists yet
    #[serde(default = "default_weekly_calories")]
    pub weekly_calories: f64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            weekly_calories: default_weekly_calories(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bodyman")
}

fn default_age() -> u32 {
    30
}

fn default_gender() -> Gender {
    Gender::Female
}

fn default_height_cm() -> f64 {
    165.0
}

fn default_weight_kg() -> f64 {
    68.0
}

fn default_activity_level() -> ActivityLevel {
    ActivityLevel::ModeratelyActive
}

fn default_goal_weight_kg() -> f64 {
    60.0
}

fn default_weekly_calories() -> f64 {
    3000.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
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
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bodyman")
            .join("config.toml")
    }

    /// Path of the persisted data file
    pub fn data_file_path(&self) -> PathBuf {
        self.data.data_dir.join(DATA_FILE_NAME)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
