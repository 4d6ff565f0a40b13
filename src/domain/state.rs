// Read-only view of a rotor, shared by the authoritative and observer sides.

use crate::domain::geometry::{BladeAxis, BlockPos};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorSnapshot {
    pub position: BlockPos,
    pub blade_axis: BladeAxis,
    pub sail_count: u8,
    pub wind_speed: f64,
}
