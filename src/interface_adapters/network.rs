// Mechanical network stand-in: logs what the rotor reports and keeps the
// latest values around for inspection.

use crate::domain::geometry::BlockPos;
use crate::domain::physics::RotorPhysics;
use crate::domain::ports::MechanicalNetwork;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

#[derive(Debug, Default)]
struct NetworkLog {
    last_report: Option<RotorPhysics>,
    reports: usize,
    topology_changes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNetwork {
    log: Arc<Mutex<NetworkLog>>,
}

impl RecordingNetwork {
    fn lock(&self) -> MutexGuard<'_, NetworkLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn last_report(&self) -> Option<RotorPhysics> {
        self.lock().last_report
    }

    pub fn reports(&self) -> usize {
        self.lock().reports
    }

    pub fn topology_changes(&self) -> usize {
        self.lock().topology_changes
    }
}

impl MechanicalNetwork for RecordingNetwork {
    fn report(&mut self, position: BlockPos, physics: RotorPhysics) {
        debug!(
            %position,
            resistance = physics.resistance,
            acceleration = physics.acceleration_factor,
            target_speed = physics.target_speed,
            torque = physics.torque_factor,
            "rotor physics reported"
        );
        let mut log = self.lock();
        log.last_report = Some(physics);
        log.reports += 1;
    }

    fn topology_changed(&mut self, position: BlockPos) {
        info!(%position, "network topology changed");
        self.lock().topology_changes += 1;
    }
}
