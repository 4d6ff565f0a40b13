// Ports for the collaborators a rotor talks to. Implementations live in
// the interface adapters; every call is synchronous and bounded.

use crate::domain::actor::{GameMode, Notice};
use crate::domain::errors::StoreError;
use crate::domain::geometry::{BlockPos, Cuboid, Vec3};
use crate::domain::items::ItemStack;
use crate::domain::physics::RotorPhysics;

pub trait WindSampler {
    /// Normalized wind magnitude, roughly 0..1 in normal weather.
    fn wind_speed_at(&self, pos: BlockPos) -> f64;
    /// Sky light reaching the cell; block light sources do not count.
    fn sunlight_level_at(&self, pos: BlockPos) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Air,
    Solid,
    // Grass, flowers; never collidable.
    Plant,
    SnowLayer,
    SnowBlock,
}

impl BlockKind {
    /// Blocks that never stop sails, whatever their collision boxes.
    pub fn is_negligible(self) -> bool {
        matches!(self, BlockKind::SnowLayer | BlockKind::SnowBlock)
    }
}

pub trait SpatialQuery {
    fn collision_volumes_at(&self, pos: BlockPos) -> Vec<Cuboid>;
    fn block_kind_at(&self, pos: BlockPos) -> BlockKind;
}

// Write-only side effects on the world.
pub trait WorldEffects {
    fn spawn_item(&mut self, stack: ItemStack, at: Vec3);
    fn play_sound(&mut self, sound: &str, at: Vec3, range: f64, volume: f64);
}

pub trait MechanicalNetwork {
    fn report(&mut self, position: BlockPos, physics: RotorPhysics);
    fn topology_changed(&mut self, position: BlockPos);
}

// Integer attributes keyed by the owning block entity.
pub trait StateStore {
    fn read_int(&self, owner: BlockPos, field: &str) -> Result<Option<i64>, StoreError>;
    fn write_int(&mut self, owner: BlockPos, field: &str, value: i64) -> Result<(), StoreError>;
    fn remove(&mut self, owner: BlockPos) -> Result<(), StoreError>;
}

/// Identifier of a renderable shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeId {
    pub base: String,
    pub rotate_y: f32,
}

pub trait ShapeResolver {
    fn resolve(&self, sail_count: u8, rotate_y: f32) -> ShapeId;
}

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

pub trait Actor {
    fn active_slot(&mut self) -> &mut Option<ItemStack>;
    fn game_mode(&self) -> GameMode;
    fn notify(&mut self, notice: Notice);
}
