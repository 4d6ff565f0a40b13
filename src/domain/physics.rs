// Scalar parameters the rotor hands to the mechanical network.

use crate::domain::tuning::{BASE_ACCELERATION, RESISTANCE, SPEED_CAP};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorPhysics {
    // Static friction the network must overcome to start turning.
    pub resistance: f64,
    pub acceleration_factor: f64,
    pub target_speed: f64,
    pub torque_factor: f64,
}

impl RotorPhysics {
    pub fn derive(sail_count: u8, wind_speed: f64, sail_modifier: f64) -> Self {
        Self {
            resistance: RESISTANCE,
            acceleration_factor: BASE_ACCELERATION + sail_modifier / 4.0,
            target_speed: (SPEED_CAP * sail_modifier).min(wind_speed * sail_modifier),
            // Five sails give 125% of a single-sail baseline, not 500%.
            torque_factor: f64::from(sail_count) * sail_modifier / 4.0,
        }
    }
}

/// Volume of the ambient swoosh cue.
pub fn sound_volume(sail_count: u8, wind_speed: f64) -> f64 {
    (0.5 + 0.5 * wind_speed) * f64::from(sail_count) / 3.0
}

/// Power output shown to players, in kN.
pub fn power_output_kn(sail_count: u8, sail_modifier: f64) -> i64 {
    (f64::from(sail_count) * sail_modifier / 5.0 * 100.0) as i64
}
