// In-memory voxel world: block grid, uniform wind field, light levels, and
// a record of the items and sounds rotors emit into it.

use crate::domain::geometry::{BlockPos, Cuboid, Vec3};
use crate::domain::items::ItemStack;
use crate::domain::ports::{BlockKind, SpatialQuery, WindSampler, WorldEffects};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Sunlight level of a cell with open sky above it.
pub const OPEN_SKY_LIGHT: i32 = 24;

const SNOW_LAYER_HEIGHT: f64 = 0.125;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayedSound {
    pub sound: String,
    pub at: Vec3,
    pub range: f64,
    pub volume: f64,
}

#[derive(Debug, Default)]
pub struct VoxelWorld {
    blocks: HashMap<BlockPos, BlockKind>,
    wind_speed: f64,
    // Cells without an entry see open sky.
    sunlight: HashMap<BlockPos, i32>,
    drops: Vec<(ItemStack, Vec3)>,
    sounds: Vec<PlayedSound>,
}

// Cloneable handle; every clone sees the same world.
#[derive(Debug, Clone, Default)]
pub struct SharedWorld {
    inner: Arc<Mutex<VoxelWorld>>,
}

impl SharedWorld {
    fn lock(&self) -> MutexGuard<'_, VoxelWorld> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_block(&self, pos: BlockPos, kind: BlockKind) {
        let mut world = self.lock();
        if kind == BlockKind::Air {
            world.blocks.remove(&pos);
        } else {
            world.blocks.insert(pos, kind);
        }
    }

    /// Sets every block in the inclusive box spanned by `from` and `to`.
    pub fn fill(&self, from: BlockPos, to: BlockPos, kind: BlockKind) {
        for x in from.x.min(to.x)..=from.x.max(to.x) {
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                for z in from.z.min(to.z)..=from.z.max(to.z) {
                    self.set_block(BlockPos::new(x, y, z), kind);
                }
            }
        }
    }

    pub fn set_wind(&self, wind_speed: f64) {
        self.lock().wind_speed = wind_speed;
    }

    pub fn set_sunlight(&self, pos: BlockPos, level: i32) {
        self.lock().sunlight.insert(pos, level);
    }

    pub fn drops(&self) -> Vec<(ItemStack, Vec3)> {
        self.lock().drops.clone()
    }

    pub fn sounds(&self) -> Vec<String> {
        self.lock()
            .sounds
            .iter()
            .map(|played| played.sound.clone())
            .collect()
    }
}

impl WindSampler for SharedWorld {
    fn wind_speed_at(&self, _pos: BlockPos) -> f64 {
        self.lock().wind_speed
    }

    fn sunlight_level_at(&self, pos: BlockPos) -> i32 {
        self.lock().sunlight.get(&pos).copied().unwrap_or(OPEN_SKY_LIGHT)
    }
}

impl SpatialQuery for SharedWorld {
    fn collision_volumes_at(&self, pos: BlockPos) -> Vec<Cuboid> {
        match self.block_kind_at(pos) {
            BlockKind::Air | BlockKind::Plant => Vec::new(),
            BlockKind::Solid | BlockKind::SnowBlock => vec![Cuboid::full_block(pos)],
            BlockKind::SnowLayer => vec![Cuboid::block_slab(pos, SNOW_LAYER_HEIGHT)],
        }
    }

    fn block_kind_at(&self, pos: BlockPos) -> BlockKind {
        self.lock()
            .blocks
            .get(&pos)
            .copied()
            .unwrap_or(BlockKind::Air)
    }
}

impl WorldEffects for SharedWorld {
    fn spawn_item(&mut self, stack: ItemStack, at: Vec3) {
        debug!(item = %stack.code, size = stack.size, x = at.x, y = at.y, z = at.z, "item spawned");
        self.lock().drops.push((stack, at));
    }

    fn play_sound(&mut self, sound: &str, at: Vec3, range: f64, volume: f64) {
        debug!(sound, range, volume, "sound played");
        self.lock().sounds.push(PlayedSound {
            sound: sound.to_string(),
            at,
            range,
            volume,
        });
    }
}
