use crate::domain::WorldSettings;
use crate::domain::tuning::{DEFAULT_SAIL_MODIFIER, UNDERGROUND_WINDMILLS_KEY};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fmt, time::Duration};
use tracing::{info, warn};

// Runtime constants and env lookups (not gameplay tuning).

pub const EVENT_CHANNEL_CAPACITY: usize = 64;

pub fn config_path() -> PathBuf {
    env::var("MILLWRIGHT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("millwright.toml"))
}

pub fn state_path() -> PathBuf {
    env::var("MILLWRIGHT_STATE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("rotors.json"))
}

pub fn sample_interval() -> Duration {
    let millis = env::var("ROTOR_SAMPLE_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .unwrap_or(1000);
    Duration::from_millis(millis)
}

pub fn rng_seed() -> Option<u64> {
    env::var("ROTOR_RNG_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
}

/// World-level settings the host exposes through the environment.
pub fn world_settings() -> WorldSettings {
    let mut settings = WorldSettings::default();
    if let Ok(value) = env::var("UNDERGROUND_WINDMILLS") {
        settings.set(UNDERGROUND_WINDMILLS_KEY, value);
    }
    settings
}

/// Tunables read from the mod config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MillwrightConfig {
    pub sail_centered_modifier: f64,
    // Reserved for angled sails; single-segment rotors ignore it.
    pub sail_angled_modifier: f64,
}

impl Default for MillwrightConfig {
    fn default() -> Self {
        Self {
            sail_centered_modifier: DEFAULT_SAIL_MODIFIER,
            sail_angled_modifier: DEFAULT_SAIL_MODIFIER,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(toml::de::Error),
    Encode(toml::ser::Error),
    Write(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(error) => write!(f, "failed to read config: {error}"),
            ConfigError::Parse(error) => write!(f, "failed to parse config: {error}"),
            ConfigError::Encode(error) => write!(f, "failed to encode config: {error}"),
            ConfigError::Write(error) => write!(f, "failed to write config: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read(error) | ConfigError::Write(error) => Some(error),
            ConfigError::Parse(error) => Some(error),
            ConfigError::Encode(error) => Some(error),
        }
    }
}

impl MillwrightConfig {
    /// Reads the config file. `Ok(None)` when it does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(ConfigError::Read(error)),
        };
        toml::from_str(&text).map(Some).map_err(ConfigError::Parse)
    }

    pub fn store(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string(self).map_err(ConfigError::Encode)?;
        std::fs::write(path, text).map_err(ConfigError::Write)
    }

    /// Loads tunables, writing the defaults out when the file is missing or broken.
    pub fn load_or_init(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(config)) => {
                info!(
                    path = %path.display(),
                    sail_centered_modifier = config.sail_centered_modifier,
                    "config loaded"
                );
                return config;
            }
            Ok(None) => info!(path = %path.display(), "no config file, writing defaults"),
            Err(error) => warn!(path = %path.display(), %error, "invalid config, writing defaults"),
        }

        let defaults = Self::default();
        if let Err(error) = defaults.store(path) {
            warn!(path = %path.display(), %error, "failed to write default config");
        }
        defaults
    }
}
