//! Gameplay tuning for the single-segment windmill rotor.
//!
//! Keep this separate from runtime configuration (sample cadence, file paths, etc.).

use std::collections::HashMap;

/// Most sail segments a rotor can carry.
pub const MAX_SAILS: u8 = 5;
/// Sail items consumed per attached segment and dropped per removed one.
pub const SAIL_ITEMS_PER_SEGMENT: u32 = 4;
pub const SAIL_ITEM_CODE: &str = "millwright:sailcentered";

/// Below this sunlight level the rotor counts as underground.
pub const MIN_SUNLIGHT: i32 = 5;
/// Chance per sample tick of re-checking the sails for obstructions.
pub const BREAKAGE_CHECK_CHANCE: f64 = 0.2;

pub const RESISTANCE: f64 = 0.003;
pub const BASE_ACCELERATION: f64 = 0.05;
// Target speed cap, as a multiple of the sail modifier.
pub const SPEED_CAP: f64 = 0.6;

pub const DEFAULT_SAIL_MODIFIER: f64 = 2.0;

pub const BREAK_SOUND: &str = "game:sounds/effect/toolbreak";
pub const BREAK_SOUND_RANGE: f64 = 20.0;
pub const AMBIENT_SOUND: &str = "game:sounds/effect/swoosh";

/// Persisted field holding the sail count.
pub const SAIL_LENGTH_FIELD: &str = "sailLength";
pub const UNDERGROUND_WINDMILLS_KEY: &str = "undergroundWindmills";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorTuning {
    /// Scales torque, target speed and acceleration.
    pub sail_modifier: f64,

    /// Keep sampling wind when sunlight is too low.
    pub allow_underground: bool,
}

impl RotorTuning {
    pub fn from_settings(sail_modifier: f64, settings: &WorldSettings) -> Self {
        Self {
            sail_modifier,
            allow_underground: settings.get_string(UNDERGROUND_WINDMILLS_KEY, "false") == "true",
        }
    }
}

impl Default for RotorTuning {
    fn default() -> Self {
        Self {
            sail_modifier: DEFAULT_SAIL_MODIFIER,
            allow_underground: false,
        }
    }
}

// World-level string settings, as set by the host.
#[derive(Debug, Clone, Default)]
pub struct WorldSettings {
    values: HashMap<String, String>,
}

impl WorldSettings {
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values.get(key).map_or(default, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_flag_is_unset_then_underground_is_disabled() {
        let tuning = RotorTuning::from_settings(2.0, &WorldSettings::default());
        assert!(!tuning.allow_underground);
    }

    #[test]
    fn when_flag_is_exactly_true_then_underground_is_enabled() {
        let mut settings = WorldSettings::default();
        settings.set(UNDERGROUND_WINDMILLS_KEY, "true");

        assert!(RotorTuning::from_settings(2.0, &settings).allow_underground);
    }

    #[test]
    fn when_flag_is_not_exactly_true_then_underground_is_disabled() {
        for value in ["TRUE", "True", " true", "1", "yes"] {
            let mut settings = WorldSettings::default();
            settings.set(UNDERGROUND_WINDMILLS_KEY, value);
            assert!(
                !RotorTuning::from_settings(2.0, &settings).allow_underground,
                "{value:?} must not enable underground windmills"
            );
        }
    }
}
