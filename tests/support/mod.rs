// Shared builders for rotor integration tests.
#![allow(dead_code)]

use millwright::domain::ports::RandomSource;
use millwright::domain::tuning::SAIL_ITEM_CODE;
use millwright::domain::{
    BladeAxis, BlockPos, GameMode, ItemStack, Player, RotorTuning, ShaftFacing,
};
use millwright::interface_adapters::network::RecordingNetwork;
use millwright::interface_adapters::store::JsonStateStore;
use millwright::interface_adapters::world::SharedWorld;
use millwright::use_cases::RotorController;
use std::path::PathBuf;

pub const HUB: BlockPos = BlockPos::new(10, 80, -4);

// Random source pinned to one roll, so breakage checks are deterministic.
pub struct PinnedRoll(pub f64);

impl RandomSource for PinnedRoll {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

pub type Rotor = RotorController<SharedWorld, RecordingNetwork, PinnedRoll>;

pub fn rotor(world: &SharedWorld, network: &RecordingNetwork, roll: f64) -> Rotor {
    RotorController::place(
        HUB,
        BladeAxis::from_shaft(ShaftFacing::East),
        RotorTuning::default(),
        world.clone(),
        network.clone(),
        PinnedRoll(roll),
    )
}

pub fn restored(world: &SharedWorld, store: &JsonStateStore) -> Rotor {
    RotorController::restore(
        HUB,
        BladeAxis::from_shaft(ShaftFacing::East),
        RotorTuning::default(),
        store,
        world.clone(),
        RecordingNetwork::default(),
        PinnedRoll(1.0),
    )
}

pub fn sail_stack(size: u32) -> ItemStack {
    ItemStack::new(SAIL_ITEM_CODE, size)
}

pub fn creative_player() -> Player {
    Player::new("builder", GameMode::Creative).holding(sail_stack(16))
}

pub fn survival_player(sails: u32) -> Player {
    Player::new("miller", GameMode::Survival).holding(sail_stack(sails))
}

// Unique file in the temp dir; callers remove it when done.
pub fn temp_path(extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("millwright-it-{}.{extension}", uuid::Uuid::new_v4()))
}
