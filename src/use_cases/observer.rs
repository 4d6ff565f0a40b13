// Read-only rotor replica for the rendering side. It only ever changes by
// applying sync snapshots from the authoritative controller.

use crate::domain::physics::{self, power_output_kn};
use crate::domain::ports::{ShapeId, ShapeResolver};
use crate::domain::state::RotorSnapshot;
use crate::domain::tuning::{AMBIENT_SOUND, MAX_SAILS};
use crate::use_cases::types::RotorSync;

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientSound {
    pub sound: &'static str,
    pub volume: f64,
}

pub struct ObserverRotor<S> {
    snapshot: RotorSnapshot,
    sail_modifier: f64,
    // Block rotation carried into every resolved shape.
    rotate_y: f32,
    shapes: S,
    shape: ShapeId,
}

impl<S> ObserverRotor<S>
where
    S: ShapeResolver,
{
    pub fn new(snapshot: RotorSnapshot, sail_modifier: f64, rotate_y: f32, shapes: S) -> Self {
        let shape = shapes.resolve(snapshot.sail_count, rotate_y);
        Self {
            snapshot,
            sail_modifier,
            rotate_y,
            shapes,
            shape,
        }
    }

    /// Applies a sync snapshot. Returns true when the displayed shape changed.
    pub fn apply(&mut self, sync: RotorSync) -> bool {
        self.snapshot.wind_speed = sync.wind_speed;

        let sail_count = sync.sail_count.min(MAX_SAILS);
        if sail_count == self.snapshot.sail_count {
            return false;
        }
        self.snapshot.sail_count = sail_count;
        self.shape = self.shapes.resolve(sail_count, self.rotate_y);
        true
    }

    pub fn snapshot(&self) -> &RotorSnapshot {
        &self.snapshot
    }

    pub fn shape(&self) -> &ShapeId {
        &self.shape
    }

    pub fn ambient_sound(&self) -> AmbientSound {
        AmbientSound {
            sound: AMBIENT_SOUND,
            volume: physics::sound_volume(self.snapshot.sail_count, self.snapshot.wind_speed),
        }
    }

    /// Info lines shown when a player looks at the rotor.
    pub fn block_info(&self) -> Vec<String> {
        let wind_percent = (100.0 * self.snapshot.wind_speed) as i64;
        let power = power_output_kn(self.snapshot.sail_count, self.sail_modifier);
        vec![
            format!("Wind speed: {wind_percent}%"),
            format!("Sails power output: {power} kN"),
        ]
    }
}
